//! Core constants for the Handset device registry.
//!
//! This module centralizes the values shared by the storage, sender and server
//! layers: identifier shape, well-known device kinds and the fixed messages
//! returned over the HTTP surface.
//!
//! # Usage
//!
//! ```
//! use handset_core::constants::*;
//!
//! assert_eq!(DEVICE_ID_HEX_LENGTH, 24);
//! assert_eq!(KIND_ANDROID, "android");
//! ```

// ============================================================================
// Identifiers
// ============================================================================

/// Length in bytes of a store-native device identifier (ObjectId).
pub const DEVICE_ID_BYTE_LENGTH: usize = 12;

/// Length of the textual (hex) form of a device identifier.
pub const DEVICE_ID_HEX_LENGTH: usize = DEVICE_ID_BYTE_LENGTH * 2;

// ============================================================================
// Device kinds
// ============================================================================

/// Device kind tag for Android handsets.
pub const KIND_ANDROID: &str = "android";

/// Device kind tag for iOS handsets.
pub const KIND_IOS: &str = "ios";

// ============================================================================
// Phone numbers
// ============================================================================

/// Minimum number of digits in a dialable phone number.
pub const MIN_PHONE_DIGITS: usize = 3;

/// Maximum number of digits in a dialable phone number (E.164 allows 15,
/// local formats with extensions stretch a little further).
pub const MAX_PHONE_DIGITS: usize = 20;

// ============================================================================
// Response messages
// ============================================================================

/// Error message returned when a path identifier fails the shape check.
pub const MSG_INVALID_ID: &str = "Invalid id provided";

/// Confirmation message returned after a successful delete.
pub const MSG_DEVICE_DELETED: &str = "device deleted successfully";

/// JSON key used in the create-device response body.
pub const KEY_DEVICE_CREATED_ID: &str = "device created id";

/// Error message returned when the SMS transport fails. The cause is logged.
pub const MSG_SMS_FAILURE: &str = "Issue with the SMS module";
