//! Shared API types and utilities
//!
//! Common request/response types, error handling and conversion from core
//! results, used across all endpoints.

use axum::{http::StatusCode, response::Json};
use email_score::{CheckSignals, Status, ValidationResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum accepted address length: 64 octets of local part, `@`, and 255
/// octets of domain.
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Query parameters for single-address scoring
#[derive(Debug, Deserialize)]
pub struct ScoreQuery {
    /// Address to score (e.g., "user@example.com")
    pub email: String,
}

/// Request body for POST scoring
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// Address to score
    pub email: String,
}

/// Request body for bulk scoring
#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    /// Addresses to score, one result per entry
    pub emails: Vec<String>,
}

/// API response for one scored address
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    /// Request ID for tracking
    pub request_id: String,
    /// The address that was scored
    pub email: String,
    /// The seven check signals
    pub signals: CheckSignals,
    /// Normalized deliverability score, 0-100
    pub score: u8,
    /// Verdict derived from the score
    pub status: Status,
    /// Timestamp when scoring was performed (ISO 8601)
    pub checked_at: String,
}

/// API response for a bulk request
#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    /// Request ID for tracking
    pub request_id: String,
    /// Per-address results, in request order
    pub results: Vec<BatchEntry>,
    /// Timestamp when scoring was performed (ISO 8601)
    pub checked_at: String,
}

/// One entry of a bulk response
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub email: String,
    pub signals: CheckSignals,
    pub score: u8,
    pub status: Status,
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    pub request_id: String,
    pub timestamp: String,
}

/// Result type for API handlers
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    InvalidInput(String),
    BatchTooLarge(usize),
    InternalError(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_code, message) = match self {
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "INVALID_INPUT", msg),
            ApiError::BatchTooLarge(max) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "BATCH_TOO_LARGE",
                format!("Batch size exceeds the configured maximum of {}", max),
            ),
            ApiError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let error_response = ErrorResponse {
            error: message,
            error_code: error_code.to_string(),
            request_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Reject inputs that cannot possibly be addresses before running the
/// pipeline: empty strings and oversized payloads.
pub fn check_input(email: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::InvalidInput("Email cannot be empty".to_string()));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(ApiError::InvalidInput(format!(
            "Email too long (max {} bytes)",
            MAX_EMAIL_LENGTH
        )));
    }
    Ok(())
}

/// Convert a core result to the single-address API response
pub fn convert_result(result: ValidationResult, request_id: String) -> ScoreResponse {
    ScoreResponse {
        request_id,
        email: result.email,
        signals: result.signals,
        score: result.score,
        status: result.status,
        checked_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Convert a core result to one bulk response entry
pub fn convert_batch_entry(result: ValidationResult) -> BatchEntry {
    BatchEntry {
        email: result.email,
        signals: result.signals,
        score: result.score,
        status: result.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_result() -> ValidationResult {
        ValidationResult {
            email: "user@example.com".to_string(),
            signals: CheckSignals {
                syntax: true,
                domain: true,
                mx: false,
                disposable: false,
                role_based: false,
                catch_all: false,
                smtp: false,
            },
            score: 47,
            status: Status::Risky,
        }
    }

    #[test]
    fn test_check_input() {
        assert!(check_input("user@example.com").is_ok());
        assert!(check_input("").is_err());
        assert!(check_input("   ").is_err());
        assert!(check_input(&"a".repeat(MAX_EMAIL_LENGTH + 1)).is_err());
        assert!(check_input(&"a".repeat(MAX_EMAIL_LENGTH)).is_ok());
    }

    #[test]
    fn test_length_gate_counts_bytes() {
        // 200 two-byte characters: well under the limit in characters,
        // over it in bytes.
        assert!(check_input(&"é".repeat(200)).is_err());
        assert!(check_input(&"é".repeat(160)).is_ok());
    }

    #[test]
    fn test_convert_result() {
        let response = convert_result(sample_result(), "req-1".to_string());
        assert_eq!(response.request_id, "req-1");
        assert_eq!(response.email, "user@example.com");
        assert_eq!(response.score, 47);
        assert_eq!(response.status, Status::Risky);
        assert!(response.signals.syntax);
        assert!(!response.signals.smtp);
    }

    #[test]
    fn test_signal_serialization_is_camel_case() {
        let entry = convert_batch_entry(sample_result());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["signals"]["roleBased"], false);
        assert_eq!(json["signals"]["catchAll"], false);
        assert_eq!(json["status"], "risky");
    }
}
