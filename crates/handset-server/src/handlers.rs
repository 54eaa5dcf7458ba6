//! Request handlers for the device registry.
//!
//! Each handler validates in a fixed order: path identifier, store lookup,
//! sender resolution (SMS only), body binding, then the action itself. The
//! first failure short-circuits into an [`ApiError`] response.

use axum::Json;
use axum::extract::{Extension, State};
use chrono::Utc;
use handset_core::constants::{KEY_DEVICE_CREATED_ID, MSG_DEVICE_DELETED};
use handset_core::{Device, DeviceFields, SmsRequest, next_update_timestamp};
use handset_sender::SmsSender;
use handset_storage::{DeviceRepository, DeviceStore};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::extract::{DeviceIdPath, RawBody, bind_json};
use crate::session::StoreHandle;
use crate::state::AppState;

/// `POST /device/new/`
pub async fn create_device<S: DeviceStore>(
    Extension(repo): Extension<StoreHandle<S>>,
    RawBody(body): RawBody,
) -> ApiResult<Json<Value>> {
    let fields: DeviceFields = bind_json(&body)?;

    let device = repo.insert(fields, Utc::now()).await?;
    info!(id = %device.id, os = %device.os, "Device created");

    Ok(Json(json!({ KEY_DEVICE_CREATED_ID: device.id })))
}

/// `GET /device/{device_id}/`
pub async fn get_device<S: DeviceStore>(
    Extension(repo): Extension<StoreHandle<S>>,
    DeviceIdPath(id): DeviceIdPath,
) -> ApiResult<Json<Device>> {
    let device = repo.find_by_id(&id).await?;
    Ok(Json(device))
}

/// `PUT /device/{device_id}/`
///
/// Overwrites `name`, `os` and `phoneNumber` (members missing from the body
/// become empty), bumps `lastUpdatedTimestamp`, and returns the stored record.
pub async fn update_device<S: DeviceStore>(
    Extension(repo): Extension<StoreHandle<S>>,
    DeviceIdPath(id): DeviceIdPath,
    RawBody(body): RawBody,
) -> ApiResult<Json<Device>> {
    let existing = repo.find_by_id(&id).await?;
    let fields: DeviceFields = bind_json(&body)?;

    let updated_at = next_update_timestamp(&existing, Utc::now());
    repo.update_fields(&id, &fields, updated_at).await?;
    info!(id = %id, "Device updated");

    let device = repo.find_by_id(&id).await?;
    Ok(Json(device))
}

/// `DELETE /device/{device_id}/`
pub async fn delete_device<S: DeviceStore>(
    Extension(repo): Extension<StoreHandle<S>>,
    DeviceIdPath(id): DeviceIdPath,
) -> ApiResult<Json<Value>> {
    repo.delete(&id).await?;
    info!(id = %id, "Device deleted");

    Ok(Json(json!({ "message": MSG_DEVICE_DELETED })))
}

/// `GET /devices`
pub async fn list_devices<S: DeviceStore>(
    Extension(repo): Extension<StoreHandle<S>>,
) -> ApiResult<Json<Vec<Device>>> {
    let devices = repo.find_all().await?;
    debug!(count = devices.len(), "Listed devices");
    Ok(Json(devices))
}

/// `POST /device/sms/{device_id}/`
///
/// The sender is resolved from the stored device's `os` on every call.
pub async fn send_sms<S: DeviceStore>(
    State(state): State<AppState<S>>,
    Extension(repo): Extension<StoreHandle<S>>,
    DeviceIdPath(id): DeviceIdPath,
    RawBody(body): RawBody,
) -> ApiResult<Json<Value>> {
    let device = repo.find_by_id(&id).await?;
    let sender = state.factory.create(&device.os)?;
    let sender_info = sender.info();
    debug!(id = %id, kind = %sender_info.kind, transport = %sender_info.transport, "Resolved sender");

    let request: SmsRequest = bind_json(&body)?;
    request.validate()?;

    let result = sender.send_sms(&request).await?;
    info!(id = %id, kind = sender.kind(), to = %request.to, "SMS dispatched");

    Ok(Json(json!({ "message": result })))
}

/// `GET`, `PUT` and `DELETE` on `/device/new/`
///
/// `new` sits where an id would; it is answered as one that fails the shape
/// check.
pub async fn reserved_id() -> ApiError {
    ApiError::InvalidId
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
