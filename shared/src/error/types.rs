//! Error types and the error response envelope

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Carries:
/// - a standardized [`ErrorCode`]
/// - a human-readable message
/// - optional structured details (offending field, resource id, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }
}

/// Error response envelope
///
/// Successful responses carry the raw row JSON; only failures are wrapped:
/// - `code`: numeric error code
/// - `message`: human-readable message
/// - `details`: additional error details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Error code (non-zero)
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message,
            details: err.details,
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let status = self.http_status();
        (status, Json(ApiResponse::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::SeatNotFound);
        assert_eq!(err.code, ErrorCode::SeatNotFound);
        assert_eq!(err.message, "Seat not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::SeatOccupied)
            .with_detail("seat_id", 5)
            .with_detail("user_id", 42);

        let details = err.details.unwrap();
        assert_eq!(details.get("seat_id").unwrap(), 5);
        assert_eq!(details.get("user_id").unwrap(), 42);
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::new(ErrorCode::FoodNotFound).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::invalid_credentials().http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::database("boom").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_convenience_constructors() {
        let err = AppError::validation("price must not be negative");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "price must not be negative");

        let err = AppError::database("pool closed");
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::BillNotFound, "Bill 9 not found");
        assert_eq!(format!("{}", err), "Bill 9 not found");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::with_message(ErrorCode::UserNotFound, "User not found")
            .with_detail("email", "a@b.c");
        let response = ApiResponse::from(err);

        assert_eq!(response.code, 8011);
        assert_eq!(response.message, "User not found");
        assert!(response.details.is_some());
    }

    #[tokio::test]
    async fn test_into_response_renders_envelope() {
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorCode::SeatOccupied)
            .with_detail("seat_id", 5)
            .into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ApiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, 7002);
        assert_eq!(body.message, "Seat is occupied");
        assert_eq!(body.details.unwrap().get("seat_id").unwrap(), 5);
    }

    #[test]
    fn test_api_response_serialize_skips_empty_details() {
        let response: ApiResponse = AppError::new(ErrorCode::InternalError).into();
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"code":9001,"message":"Internal server error"}"#);
    }
}
