use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use handset_core::{Device, DeviceFields, DeviceId};
use tokio::sync::RwLock;

use super::{DeviceRepository, DeviceStore};
use crate::error::{StorageError, StorageResult};
use crate::models::device::generate_device_id;

/// Counters describing how a store has been used.
///
/// Handy for asserting that a request never reached the store, or that every
/// acquired handle was released.
#[derive(Debug, Default)]
pub struct StoreStats {
    acquired: AtomicUsize,
    released: AtomicUsize,
    operations: AtomicUsize,
}

impl StoreStats {
    /// Number of handles acquired so far
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of handles dropped so far
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Number of repository operations attempted so far
    pub fn operations(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    /// Handles acquired and not yet released
    pub fn outstanding(&self) -> usize {
        self.acquired().saturating_sub(self.released())
    }
}

#[derive(Debug, Default)]
struct Shared {
    devices: RwLock<HashMap<DeviceId, Device>>,
    stats: StoreStats,
    unavailable: AtomicBool,
    failing: AtomicBool,
}

/// In-memory implementation of DeviceStore using HashMap
///
/// Used by tests and local development. All clones share one map.
///
/// # Examples
///
/// ```
/// use handset_core::DeviceFields;
/// use handset_storage::repositories::{DeviceRepository, DeviceStore, InMemoryStore};
/// use chrono::Utc;
///
/// # async fn example() -> handset_storage::StorageResult<()> {
/// let store = InMemoryStore::new();
/// let handle = store.acquire().await?;
///
/// let device = handle.insert(DeviceFields::default(), Utc::now()).await?;
/// assert_eq!(handle.find_by_id(&device.id).await?, device);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    shared: Arc<Shared>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Usage counters shared by every clone and handle
    pub fn stats(&self) -> &StoreStats {
        &self.shared.stats
    }

    /// Make `acquire` fail, simulating an unreachable store
    pub fn set_unavailable(&self, unavailable: bool) {
        self.shared.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make every repository operation fail after acquisition
    pub fn set_failing(&self, failing: bool) {
        self.shared.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored devices
    pub async fn len(&self) -> usize {
        self.shared.devices.read().await.len()
    }

    /// Whether the store holds no devices
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DeviceStore for InMemoryStore {
    type Handle = InMemoryDeviceRepository;

    async fn acquire(&self) -> StorageResult<InMemoryDeviceRepository> {
        if self.shared.unavailable.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store marked unavailable".to_string(),
            ));
        }

        self.shared.stats.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(InMemoryDeviceRepository {
            shared: self.shared.clone(),
        })
    }
}

/// Request-scoped handle onto an [`InMemoryStore`]
#[derive(Debug)]
pub struct InMemoryDeviceRepository {
    shared: Arc<Shared>,
}

impl InMemoryDeviceRepository {
    fn begin(&self) -> StorageResult<()> {
        self.shared.stats.operations.fetch_add(1, Ordering::SeqCst);
        if self.shared.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "in-memory store marked failing".to_string(),
            ));
        }
        Ok(())
    }
}

impl DeviceRepository for InMemoryDeviceRepository {
    async fn insert(&self, fields: DeviceFields, now: DateTime<Utc>) -> StorageResult<Device> {
        self.begin()?;

        let device = Device::new(generate_device_id(), fields, now);
        let mut devices = self.shared.devices.write().await;
        devices.insert(device.id.clone(), device.clone());
        Ok(device)
    }

    async fn find_by_id(&self, id: &DeviceId) -> StorageResult<Device> {
        self.begin()?;

        let devices = self.shared.devices.read().await;
        devices
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::device_not_found(id))
    }

    async fn find_all(&self) -> StorageResult<Vec<Device>> {
        self.begin()?;

        let devices = self.shared.devices.read().await;
        let mut all: Vec<Device> = devices.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn update_fields(
        &self,
        id: &DeviceId,
        fields: &DeviceFields,
        updated_at: DateTime<Utc>,
    ) -> StorageResult<()> {
        self.begin()?;

        let mut devices = self.shared.devices.write().await;
        let device = devices
            .get_mut(id)
            .ok_or_else(|| StorageError::device_not_found(id))?;
        device.apply(fields.clone(), updated_at);
        Ok(())
    }

    async fn delete(&self, id: &DeviceId) -> StorageResult<()> {
        self.begin()?;

        let mut devices = self.shared.devices.write().await;
        devices
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StorageError::device_not_found(id))
    }
}

impl Drop for InMemoryDeviceRepository {
    fn drop(&mut self) {
        self.shared.stats.released.fetch_add(1, Ordering::SeqCst);
    }
}
