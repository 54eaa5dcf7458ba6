//! Storage layer for the Handset device registry.
//!
//! This crate persists [`Device`](handset_core::Device) records in a MongoDB
//! collection and exposes them through request-scoped repository handles.
//!
//! # Architecture
//!
//! - [`Database`] - Lazily connected, process-wide MongoDB client
//! - [`DeviceStore`] - Source of request-scoped handles (`acquire`)
//! - [`DeviceRepository`] - Device data access on a single handle
//! - [`InMemoryStore`] - HashMap-backed store with usage counters for tests
//!
//! # Request Scoping
//!
//! A store is shared by every request. Each request acquires its own handle
//! (for MongoDB, a fresh `ClientSession` derived from the shared client),
//! performs its operations through it, and drops it when the response is
//! produced. Handles are never shared between concurrent requests.
//!
//! # Examples
//!
//! ```no_run
//! use handset_core::DeviceFields;
//! use handset_storage::{Database, DatabaseConfig, DeviceRepository, DeviceStore};
//! use chrono::Utc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new(DatabaseConfig::default())?;
//!
//! let handle = db.acquire().await?;
//! let fields = DeviceFields {
//!     name: "Phone1".to_string(),
//!     os: "android".to_string(),
//!     phone_number: "5551234".to_string(),
//! };
//! let device = handle.insert(fields, Utc::now()).await?;
//! println!("created {}", device.id);
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{Database, DatabaseConfig};
pub use error::{StorageError, StorageResult};
pub use models::DeviceDocument;
pub use repositories::{
    DeviceRepository, DeviceStore, InMemoryDeviceRepository, InMemoryStore,
    MongoDeviceRepository, StoreStats,
};
