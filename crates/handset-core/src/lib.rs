pub mod constants;
pub mod device;
pub mod error;
pub mod sms;
pub mod types;

pub use device::{Device, DeviceFields, next_update_timestamp};
pub use error::{Error, Result};
pub use sms::SmsRequest;
pub use types::DeviceId;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
