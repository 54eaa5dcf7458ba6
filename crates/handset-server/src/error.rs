//! HTTP error mapping.
//!
//! Every failure a handler can hit is turned into exactly one
//! `{"error": "<description>"}` response. Client-input problems map to 400,
//! store and transport failures map to 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use handset_core::constants::{MSG_INVALID_ID, MSG_SMS_FAILURE};
use handset_sender::SenderError;
use handset_storage::StorageError;
use thiserror::Error;
use tracing::{debug, error};

/// Result type for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Path identifier failed the shape check
    #[error("{}", MSG_INVALID_ID)]
    InvalidId,

    /// Request body could not be bound or is missing required fields
    #[error(transparent)]
    Input(#[from] handset_core::Error),

    /// Store lookup, write or acquisition failed (including not-found)
    #[error(transparent)]
    Store(#[from] StorageError),

    /// Sender resolution or SMS transport failed
    #[error(transparent)]
    Sender(#[from] SenderError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidId | Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Sender(e) if !e.is_transport_failure() => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Sender(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body.
    ///
    /// Transport failures are reported generically; the cause only goes to
    /// the log.
    pub fn public_message(&self) -> String {
        match self {
            Self::Sender(e) if e.is_transport_failure() => MSG_SMS_FAILURE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Sender(e) if e.is_transport_failure() => {
                error!(error = %e, "{}", MSG_SMS_FAILURE);
            }
            Self::Store(e) => error!(error = %e, "Store operation failed"),
            other => debug!(error = %other, status = status.as_u16(), "Rejected request"),
        }

        let body = serde_json::json!({ "error": self.public_message() });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_is_bad_request() {
        let error = ApiError::InvalidId;
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Invalid id provided");
    }

    #[test]
    fn test_input_error_is_bad_request() {
        let error = ApiError::from(handset_core::Error::MissingField("to".to_string()));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Missing required field: to");
    }

    #[test]
    fn test_not_found_is_server_error() {
        let error = ApiError::from(StorageError::device_not_found("5f1a2b3c4d5e6f7081920a1b"));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.public_message().contains("not found"));
    }

    #[test]
    fn test_unsupported_kind_is_bad_request() {
        let error = ApiError::from(SenderError::unsupported_kind("palmos"));
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.public_message(), "Unsupported device kind: palmos");
    }

    #[test]
    fn test_transport_failure_hides_cause() {
        let error = ApiError::from(SenderError::transport("modem offline"));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.public_message(), MSG_SMS_FAILURE);
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::InvalidId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
