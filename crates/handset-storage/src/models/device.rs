use chrono::{DateTime, Utc};
use handset_core::{Device, DeviceId};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Device document as persisted in the `listings` collection.
///
/// The domain [`Device`] carries a hex [`DeviceId`] and chrono timestamps;
/// the document carries the store-native `ObjectId` under `_id` and BSON
/// datetimes (millisecond resolution).
///
/// # Collection Schema
///
/// ```text
/// {
///   _id:                  ObjectId,
///   name:                 String,
///   os:                   String,
///   phoneNumber:          String,
///   createdTimestamp:     Date,
///   lastUpdatedTimestamp: Date
/// }
/// ```
///
/// # Examples
///
/// ```
/// use handset_core::{Device, DeviceFields, DeviceId};
/// use handset_storage::models::DeviceDocument;
/// use chrono::Utc;
///
/// let id = DeviceId::parse("5f1a2b3c4d5e6f7081920a1b").unwrap();
/// let device = Device::new(id, DeviceFields::default(), Utc::now());
///
/// let document = DeviceDocument::from_device(&device);
/// assert_eq!(document.id.to_hex(), "5f1a2b3c4d5e6f7081920a1b");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,

    pub os: String,

    pub phone_number: String,

    pub created_timestamp: bson::DateTime,

    pub last_updated_timestamp: bson::DateTime,
}

impl DeviceDocument {
    /// Map a domain device to its stored form.
    pub fn from_device(device: &Device) -> Self {
        Self {
            id: object_id(&device.id),
            name: device.name.clone(),
            os: device.os.clone(),
            phone_number: device.phone_number.clone(),
            created_timestamp: to_bson_datetime(device.created_timestamp),
            last_updated_timestamp: to_bson_datetime(device.last_updated_timestamp),
        }
    }

    /// Map a stored document back to a domain device.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CorruptDocument` if a timestamp is outside the
    /// range chrono can represent.
    pub fn into_device(self) -> StorageResult<Device> {
        Ok(Device {
            id: DeviceId::from_bytes(self.id.bytes()),
            name: self.name,
            os: self.os,
            phone_number: self.phone_number,
            created_timestamp: from_bson_datetime(self.created_timestamp)?,
            last_updated_timestamp: from_bson_datetime(self.last_updated_timestamp)?,
        })
    }
}

/// Store-native id for a validated device id.
pub fn object_id(id: &DeviceId) -> ObjectId {
    ObjectId::from_bytes(id.to_bytes())
}

/// Fresh store-generated device id.
pub fn generate_device_id() -> DeviceId {
    DeviceId::from_bytes(ObjectId::new().bytes())
}

pub(crate) fn to_bson_datetime(timestamp: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(timestamp.timestamp_millis())
}

fn from_bson_datetime(timestamp: bson::DateTime) -> StorageResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(timestamp.timestamp_millis()).ok_or_else(|| {
        StorageError::CorruptDocument(format!("timestamp out of range: {timestamp}"))
    })
}
