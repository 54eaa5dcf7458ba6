//! Device registry entities.
//!
//! A [`Device`] is a registered phone handset. Clients only ever supply the
//! mutable [`DeviceFields`]; the identifier and both timestamps are assigned
//! server-side.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::DeviceId;

/// Registered phone device.
///
/// # Fields
///
/// * `id` - Store-assigned identifier, immutable once created
/// * `name` - Free-text display label
/// * `os` - Device kind tag used to select the SMS sender (e.g. `"android"`)
/// * `phone_number` - Number owned by the device
/// * `created_timestamp` - Set once at creation
/// * `last_updated_timestamp` - Set at creation, refreshed on every update
///
/// # Invariants
///
/// `created_timestamp <= last_updated_timestamp` always holds. The `os` tag is
/// not validated at write time; sender resolution happens on every send.
///
/// # Examples
///
/// ```
/// use handset_core::{Device, DeviceFields, DeviceId};
/// use chrono::Utc;
///
/// let fields = DeviceFields {
///     name: "Phone1".to_string(),
///     os: "android".to_string(),
///     phone_number: "5551234".to_string(),
/// };
///
/// let id = DeviceId::parse("5f1a2b3c4d5e6f7081920a1b").unwrap();
/// let device = Device::new(id, fields, Utc::now());
///
/// assert_eq!(device.created_timestamp, device.last_updated_timestamp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Store-assigned unique identifier
    pub id: DeviceId,

    /// Display label
    pub name: String,

    /// Device kind tag
    pub os: String,

    /// Phone number owned by the device
    pub phone_number: String,

    /// Creation timestamp
    pub created_timestamp: DateTime<Utc>,

    /// Last successful update timestamp
    pub last_updated_timestamp: DateTime<Utc>,
}

impl Device {
    /// Create a freshly registered device with both timestamps set to `now`.
    #[must_use]
    pub fn new(id: DeviceId, fields: DeviceFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            os: fields.os,
            phone_number: fields.phone_number,
            created_timestamp: now,
            last_updated_timestamp: now,
        }
    }

    /// Overwrite the mutable fields and stamp the update time.
    pub fn apply(&mut self, fields: DeviceFields, updated_at: DateTime<Utc>) {
        self.name = fields.name;
        self.os = fields.os;
        self.phone_number = fields.phone_number;
        self.last_updated_timestamp = updated_at;
    }

    /// Mutable fields of this device.
    #[must_use]
    pub fn fields(&self) -> DeviceFields {
        DeviceFields {
            name: self.name.clone(),
            os: self.os.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// Client-supplied device fields for create and update requests.
///
/// Every field defaults to the empty string when absent. Members not listed
/// here (`id`, timestamps, anything else) are ignored when binding a request
/// body, so clients can never choose an identifier or backdate a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceFields {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub os: String,

    #[serde(default)]
    pub phone_number: String,
}

/// Compute the `last_updated_timestamp` for an update applied at `now`.
///
/// The result is strictly greater than the device's current update timestamp:
/// when the clock has not advanced (or went backwards), the previous value is
/// bumped by one millisecond, the store's timestamp resolution.
///
/// # Examples
///
/// ```
/// use handset_core::{Device, DeviceFields, DeviceId, next_update_timestamp};
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let id = DeviceId::parse("5f1a2b3c4d5e6f7081920a1b").unwrap();
/// let device = Device::new(id, DeviceFields::default(), now);
///
/// assert!(next_update_timestamp(&device, now) > device.last_updated_timestamp);
/// ```
#[must_use]
pub fn next_update_timestamp(device: &Device, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = device.last_updated_timestamp + Duration::milliseconds(1);
    if now >= floor { now } else { floor }
}
