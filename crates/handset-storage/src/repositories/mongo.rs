use chrono::{DateTime, Utc};
use handset_core::{Device, DeviceFields, DeviceId};
use mongodb::bson::doc;
use mongodb::{ClientSession, Collection};
use tokio::sync::Mutex;
use tracing::{debug, trace};

use super::DeviceRepository;
use crate::error::{StorageError, StorageResult};
use crate::models::DeviceDocument;
use crate::models::device::{generate_device_id, object_id, to_bson_datetime};

/// MongoDB implementation of DeviceRepository
///
/// Each instance owns one `ClientSession` derived from the process-wide
/// client. Every operation runs inside that session, so cursor and causal
/// consistency state never leaks between concurrent requests. Dropping the
/// repository ends the session and returns it to the driver's pool.
pub struct MongoDeviceRepository {
    collection: Collection<DeviceDocument>,
    session: Mutex<ClientSession>,
}

impl MongoDeviceRepository {
    /// Create a repository bound to `collection` and running in `session`
    pub fn new(collection: Collection<DeviceDocument>, session: ClientSession) -> Self {
        Self {
            collection,
            session: Mutex::new(session),
        }
    }
}

impl DeviceRepository for MongoDeviceRepository {
    async fn insert(&self, fields: DeviceFields, now: DateTime<Utc>) -> StorageResult<Device> {
        let device = Device::new(generate_device_id(), fields, now);
        let document = DeviceDocument::from_device(&device);

        let mut session = self.session.lock().await;
        self.collection
            .insert_one_with_session(&document, None, &mut session)
            .await?;

        debug!(id = %device.id, os = %device.os, "Inserted device");
        Ok(device)
    }

    async fn find_by_id(&self, id: &DeviceId) -> StorageResult<Device> {
        let mut session = self.session.lock().await;
        let document = self
            .collection
            .find_one_with_session(doc! { "_id": object_id(id) }, None, &mut session)
            .await?;

        match document {
            Some(document) => document.into_device(),
            None => Err(StorageError::device_not_found(id)),
        }
    }

    async fn find_all(&self) -> StorageResult<Vec<Device>> {
        let mut session = self.session.lock().await;
        let mut cursor = self
            .collection
            .find_with_session(None, None, &mut session)
            .await?;

        let mut devices = Vec::new();
        while let Some(document) = cursor.next(&mut session).await {
            devices.push(document?.into_device()?);
        }

        trace!(count = devices.len(), "Listed devices");
        Ok(devices)
    }

    async fn update_fields(
        &self,
        id: &DeviceId,
        fields: &DeviceFields,
        updated_at: DateTime<Utc>,
    ) -> StorageResult<()> {
        let update = doc! {
            "$set": {
                "os": fields.os.as_str(),
                "name": fields.name.as_str(),
                "phoneNumber": fields.phone_number.as_str(),
                "lastUpdatedTimestamp": to_bson_datetime(updated_at),
            }
        };

        let mut session = self.session.lock().await;
        let result = self
            .collection
            .update_one_with_session(doc! { "_id": object_id(id) }, update, None, &mut session)
            .await?;

        if result.matched_count == 0 {
            return Err(StorageError::device_not_found(id));
        }

        debug!(id = %id, "Updated device");
        Ok(())
    }

    async fn delete(&self, id: &DeviceId) -> StorageResult<()> {
        let mut session = self.session.lock().await;
        let result = self
            .collection
            .delete_one_with_session(doc! { "_id": object_id(id) }, None, &mut session)
            .await?;

        if result.deleted_count == 0 {
            return Err(StorageError::device_not_found(id));
        }

        debug!(id = %id, "Deleted device");
        Ok(())
    }
}

impl Drop for MongoDeviceRepository {
    fn drop(&mut self) {
        trace!("Releasing store session");
    }
}
