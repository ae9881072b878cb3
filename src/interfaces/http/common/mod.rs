//! Shared HTTP plumbing

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard response envelope.
///
/// Every REST endpoint wraps its payload:
/// `{"success": true, "data": {...}}` on success,
/// `{"success": false, "error": "..."}` on failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Empty response for operations without return data
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// HTTP status for a domain error. The four booking-engine outcomes are
/// conflicts the caller can correct by refreshing and retrying; transient
/// storage trouble is 503.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidWindow(_) | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::SlotUnavailable
        | DomainError::InsufficientCredit(_)
        | DomainError::InvalidTransition(_)
        | DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Map a domain error to the standard error response.
pub fn error_response<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    (status_for(&err), Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(
            status_for(&DomainError::InvalidWindow("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&DomainError::SlotUnavailable), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&DomainError::InsufficientCredit("p".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&DomainError::not_found("Booking", "id", "b1")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::Storage("database is locked".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn envelope_wire_shape() {
        let ok = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 7}));

        let err = serde_json::to_value(ApiResponse::<i32>::error("nope")).unwrap();
        assert_eq!(
            err,
            serde_json::json!({"success": false, "data": null, "error": "nope"})
        );
    }

    #[test]
    fn envelope_shape() {
        let ok = ApiResponse::success(1);
        assert!(ok.success);
        assert_eq!(ok.data, Some(1));
        assert!(ok.error.is_none());

        let err = ApiResponse::<i32>::error("nope");
        assert!(!err.success);
        assert!(err.data.is_none());
        assert_eq!(err.error.as_deref(), Some("nope"));
    }
}
