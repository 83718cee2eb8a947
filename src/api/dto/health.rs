//! Health endpoint payloads.

use serde::Serialize;

/// Overall service state reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Outcome of a single dependency probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: StoreCheck,
}

/// Store reachability as seen by a PING.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: ProbeStatus,
    pub message: &'static str,
}

impl StoreCheck {
    pub fn from_ping(reachable: bool) -> Self {
        if reachable {
            Self {
                status: ProbeStatus::Ok,
                message: "Store reachable",
            }
        } else {
            Self {
                status: ProbeStatus::Error,
                message: "Store ping failed",
            }
        }
    }
}

impl HealthResponse {
    /// Derives the overall status from the store check.
    pub fn new(store: StoreCheck) -> Self {
        let status = match store.status {
            ProbeStatus::Ok => ServiceStatus::Healthy,
            ProbeStatus::Error => ServiceStatus::Degraded,
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { store },
        }
    }
}
