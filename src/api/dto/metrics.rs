//! DTOs for the domain analytics endpoint.

use crate::domain::entities::ScoredMember;
use serde::Serialize;

/// Most shortened domains, highest count first.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub top_domains: Vec<ScoredMember>,
}
