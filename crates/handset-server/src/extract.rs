//! Request extractors that report failures as [`ApiError`].
//!
//! axum's stock `Path` and `Bytes` rejections answer in plain text; these
//! wrappers keep every failure in the `{"error": ..}` shape.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use handset_core::{DeviceId, Error};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Device identifier taken from the `{device_id}` path segment.
///
/// A segment that cannot be decoded or is not a valid id is rejected with
/// [`ApiError::InvalidId`].
#[derive(Debug, Clone)]
pub struct DeviceIdPath(pub DeviceId);

impl<S: Send + Sync> FromRequestParts<S> for DeviceIdPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> ApiResult<Self> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(reason = %rejection.body_text(), "Rejected device id segment");
                ApiError::InvalidId
            })?;
        device_id(&raw).map(Self)
    }
}

/// Raw request body, buffered before binding.
///
/// Buffering failures (including bodies over the size limit) are reported as
/// an invalid body.
#[derive(Debug, Clone)]
pub struct RawBody(pub Bytes);

impl<S: Send + Sync> FromRequest<S> for RawBody {
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> ApiResult<Self> {
        Bytes::from_request(request, state)
            .await
            .map(Self)
            .map_err(|rejection| ApiError::Input(Error::InvalidBody(rejection.body_text())))
    }
}

/// Validate a path identifier before anything touches the store.
pub fn device_id(raw: &str) -> ApiResult<DeviceId> {
    DeviceId::parse(raw).map_err(|_| ApiError::InvalidId)
}

/// Bind a raw request body to `T`.
///
/// The body must be a JSON object. Unknown members are ignored; which members
/// are required is up to `T`.
pub fn bind_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))?;

    if !value.is_object() {
        return Err(Error::InvalidBody("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| Error::InvalidBody(e.to_string()))
}
