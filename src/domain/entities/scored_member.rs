//! Sorted-set entry returned by range queries.

use serde::Serialize;

/// A member of a sorted collection together with its score.
///
/// For the `domains` set the member is a hostname and the score is the
/// cumulative number of shorten requests recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMember {
    pub member: String,
    pub score: f64,
}

impl ScoredMember {
    pub fn new(member: impl Into<String>, score: f64) -> Self {
        Self {
            member: member.into(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_member_and_score() {
        let entry = ScoredMember::new("example.com", 2.0);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["member"], "example.com");
        assert_eq!(json["score"], 2.0);
    }
}
