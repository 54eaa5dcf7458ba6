//! Sender implementations, one per supported device kind.
//!
//! Each sender encapsulates the kind-specific rules for shaping a message
//! before it is handed to the transport.

pub mod android;
pub mod ios;

pub use android::AndroidSender;
pub use ios::IosSender;
