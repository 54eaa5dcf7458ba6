//! SMS sender abstraction layer for the Handset device registry.
//!
//! This crate provides the polymorphic "send an SMS through a device of kind
//! X" capability. Each supported operating system has its own sender, all of
//! them implementing the [`SmsSender`] trait, and the [`DeviceFactory`] picks
//! one at runtime from the device's `os` tag.
//!
//! # Design Philosophy
//!
//! - **Async-first**: Sending is asynchronous using native `async fn` in
//!   implementations (Edition 2024 RPITIT), no `async_trait` macro.
//! - **Enum dispatch**: Runtime selection goes through [`AnySender`] rather
//!   than trait objects, since async trait methods are not object-safe.
//! - **Registry-driven**: New kinds are added by registering a constructor
//!   with the factory; dispatch code never changes.
//! - **Error-aware**: Every send returns [`SenderResult<T>`] and failures are
//!   reported to the caller, never retried or swallowed.
//!
//! # Sending an SMS
//!
//! ```no_run
//! use handset_core::SmsRequest;
//! use handset_sender::{DeviceFactory, SmsSender};
//!
//! # async fn example() -> handset_sender::SenderResult<()> {
//! let factory = DeviceFactory::default();
//!
//! // Resolve from the device's os tag, then send
//! let sender = factory.create("android")?;
//! let result = sender.send_sms(&SmsRequest::new("5559999", "hi")).await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Resolution fails with [`SenderError::UnsupportedDeviceKind`]; everything
//! else is a transport failure (see [`SenderError::is_transport_failure`]).
//!
//! # Mock Implementations
//!
//! [`mock::MockSender`] records requests and can inject failures, for use in
//! tests that need to observe whether a transport call happened.
//!
//! [`SmsSender`]: traits::SmsSender
//! [`DeviceFactory`]: factory::DeviceFactory
//! [`AnySender`]: devices::AnySender

pub mod devices;
pub mod error;
pub mod factory;
pub mod mock;
pub mod senders;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use devices::AnySender;
pub use error::{SenderError, SenderResult};
pub use factory::{DeviceFactory, SenderConstructor};
pub use traits::SmsSender;
pub use types::SenderInfo;
