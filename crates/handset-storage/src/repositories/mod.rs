pub mod memory;
pub mod mongo;

pub use memory::{InMemoryDeviceRepository, InMemoryStore, StoreStats};
pub use mongo::MongoDeviceRepository;

use std::future::Future;

use chrono::{DateTime, Utc};
use handset_core::{Device, DeviceFields, DeviceId};

use crate::error::StorageResult;

/// Repository trait for Device entity operations
///
/// This trait defines the contract for device data access. A repository value
/// is a request-scoped store handle: it is acquired from a [`DeviceStore`] at
/// the start of a request and dropped when the request completes.
///
/// # Implementation Note
///
/// Implementations use native async methods (Edition 2024). The trait spells
/// out `impl Future + Send` so that handles can be used from axum handlers,
/// which run on a multi-threaded runtime.
pub trait DeviceRepository: Send + Sync {
    /// Assign a new id, stamp both timestamps with `now`, and insert
    fn insert(
        &self,
        fields: DeviceFields,
        now: DateTime<Utc>,
    ) -> impl Future<Output = StorageResult<Device>> + Send;

    /// Find a device by id, failing with `NotFound` if it does not exist
    fn find_by_id(&self, id: &DeviceId) -> impl Future<Output = StorageResult<Device>> + Send;

    /// Get every registered device
    fn find_all(&self) -> impl Future<Output = StorageResult<Vec<Device>>> + Send;

    /// Overwrite `name`, `os`, `phoneNumber` and set the update timestamp
    fn update_fields(
        &self,
        id: &DeviceId,
        fields: &DeviceFields,
        updated_at: DateTime<Utc>,
    ) -> impl Future<Output = StorageResult<()>> + Send;

    /// Delete a device by id, failing with `NotFound` if it does not exist
    fn delete(&self, id: &DeviceId) -> impl Future<Output = StorageResult<()>> + Send;
}

/// Source of request-scoped repository handles.
///
/// Cloning a store is cheap; all clones share the same underlying connection
/// (or in-memory map). [`acquire`](Self::acquire) derives a handle that must
/// not be shared across concurrent requests.
pub trait DeviceStore: Clone + Send + Sync + 'static {
    /// Handle type produced per request.
    type Handle: DeviceRepository + 'static;

    /// Acquire a fresh handle for one request.
    fn acquire(&self) -> impl Future<Output = StorageResult<Self::Handle>> + Send;
}
