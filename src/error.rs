//! HTTP-facing error type.
//!
//! Handlers return [`AppError`], which renders as
//! `{"error": {"code": ..., "message": ..., "details": ...}}` with the
//! matching status code.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::ShortenerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload embedded in every error response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}: {}", self, self.to_error_info().details);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(e: ShortenerError) -> Self {
        match e {
            ShortenerError::UrlParse(reason) => {
                AppError::bad_request("Invalid URL format", json!({ "reason": reason }))
            }
            ShortenerError::NotFound(short_key) => {
                AppError::not_found("URL not found", json!({ "short_key": short_key }))
            }
            ShortenerError::StoreWrite(source) => AppError::internal(
                "Failed to write to store",
                json!({ "reason": source.to_string() }),
            ),
            ShortenerError::StoreRead(source) => AppError::internal(
                "Failed to read from store",
                json!({ "reason": source.to_string() }),
            ),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: Vec<Value> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    json!({
                        "field": field,
                        "message": error
                            .message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| error.code.to_string()),
                    })
                })
            })
            .collect();

        AppError::bad_request("Validation failed", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::StoreError;

    #[test]
    fn test_shortener_error_status_mapping() {
        let parse: AppError = ShortenerError::UrlParse("relative URL".to_string()).into();
        assert_eq!(parse.status_code(), StatusCode::BAD_REQUEST);

        let missing: AppError = ShortenerError::NotFound("deadbeef".to_string()).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let write: AppError =
            ShortenerError::StoreWrite(StoreError::Timeout("SET".to_string())).into();
        assert_eq!(write.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let read: AppError =
            ShortenerError::StoreRead(StoreError::Backend("down".to_string())).into();
        assert_eq!(read.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_info_codes() {
        let err = AppError::not_found("URL not found", json!({ "short_key": "abc" }));
        let info = err.to_error_info();

        assert_eq!(info.code, "not_found");
        assert_eq!(info.message, "URL not found");
        assert_eq!(info.details["short_key"], "abc");
        assert_eq!(err.to_string(), "URL not found");
    }
}
