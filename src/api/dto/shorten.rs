//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// A missing `originalURL` field deserializes to an empty string so that it
/// is reported by validation like an explicitly empty one.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(rename = "originalURL", default)]
    #[validate(length(min = 1, message = "originalURL cannot be empty"))]
    pub original_url: String,
}

/// Response carrying the shareable short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_field_name() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{"originalURL": "https://example.com"}"#).unwrap();
        assert_eq!(request.original_url, "https://example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_field_fails_validation() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_err());
    }
}
