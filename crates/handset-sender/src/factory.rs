//! Device factory.
//!
//! This module provides the [`DeviceFactory`], which maps a device kind tag
//! (the `os` field of a registered device) to a sender constructor. Resolution
//! is an exact, case-sensitive string match with no normalization.
//!
//! # Architecture
//!
//! ```text
//! device.os ──► DeviceFactory ──► constructor ──► AnySender ──► send_sms()
//!   "android"     (registry)        fn()           ::Android
//! ```
//!
//! Adding a kind means registering one more constructor; the dispatch logic
//! itself never changes.
//!
//! # Examples
//!
//! ```
//! use handset_sender::factory::DeviceFactory;
//! use handset_sender::traits::SmsSender;
//!
//! let factory = DeviceFactory::default();
//!
//! let sender = factory.create("android").unwrap();
//! assert_eq!(sender.kind(), "android");
//!
//! assert!(factory.create("Android").is_err());
//! assert!(factory.create("palmos").is_err());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use handset_core::constants::{KIND_ANDROID, KIND_IOS};
use tracing::debug;

use crate::devices::AnySender;
use crate::error::{SenderError, SenderResult};
use crate::senders::{AndroidSender, IosSender};

/// Constructor producing a fresh sender for one device kind.
pub type SenderConstructor = Arc<dyn Fn() -> AnySender + Send + Sync>;

/// Registry of sender constructors keyed by device kind.
///
/// The factory is immutable once shared; build it up front with
/// [`register`](Self::register) and then hand clones to request handlers.
#[derive(Clone)]
pub struct DeviceFactory {
    constructors: HashMap<String, SenderConstructor>,
}

impl DeviceFactory {
    /// Create an empty factory with no registered kinds.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor for `kind`, replacing any existing entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use handset_sender::devices::AnySender;
    /// use handset_sender::factory::DeviceFactory;
    /// use handset_sender::mock::MockSender;
    ///
    /// let (mock, _handle) = MockSender::new("test");
    /// let factory = DeviceFactory::empty()
    ///     .register("test", move || AnySender::Mock(mock.clone()));
    ///
    /// assert!(factory.is_supported("test"));
    /// ```
    pub fn register<F>(mut self, kind: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> AnySender + Send + Sync + 'static,
    {
        self.constructors.insert(kind.into(), Arc::new(constructor));
        self
    }

    /// Produce a sender for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `SenderError::UnsupportedDeviceKind` carrying the offending
    /// string if no constructor is registered for it.
    pub fn create(&self, kind: &str) -> SenderResult<AnySender> {
        match self.constructors.get(kind) {
            Some(constructor) => {
                debug!(kind, "Resolved sender for device kind");
                Ok(constructor())
            }
            None => Err(SenderError::unsupported_kind(kind)),
        }
    }

    /// Whether a constructor is registered for `kind`.
    pub fn is_supported(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Registered kinds in sorted order.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl Default for DeviceFactory {
    /// Factory with the built-in `"android"` and `"ios"` senders.
    fn default() -> Self {
        Self::empty()
            .register(KIND_ANDROID, || AnySender::Android(AndroidSender::new()))
            .register(KIND_IOS, || AnySender::Ios(IosSender::new()))
    }
}

impl fmt::Debug for DeviceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceFactory")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSender;
    use crate::traits::SmsSender;
    use rstest::rstest;

    #[test]
    fn test_default_kinds() {
        let factory = DeviceFactory::default();
        assert_eq!(factory.kinds(), vec!["android", "ios"]);
    }

    #[rstest]
    #[case("android", "android")]
    #[case("ios", "ios")]
    fn test_create_known_kind(#[case] kind: &str, #[case] expected: &str) {
        let factory = DeviceFactory::default();
        let sender = factory.create(kind).unwrap();
        assert_eq!(sender.kind(), expected);
    }

    #[rstest]
    #[case("palmos")]
    #[case("Android")] // case-sensitive
    #[case(" android")] // no trimming
    #[case("")]
    fn test_create_unknown_kind(#[case] kind: &str) {
        let factory = DeviceFactory::default();
        let error = factory.create(kind).unwrap_err();
        assert_eq!(error, SenderError::unsupported_kind(kind));
    }

    #[test]
    fn test_register_new_kind() {
        let (mock, _handle) = MockSender::new("blackberry");
        let factory =
            DeviceFactory::default().register("blackberry", move || AnySender::Mock(mock.clone()));

        assert!(factory.is_supported("blackberry"));
        assert_eq!(factory.create("blackberry").unwrap().kind(), "blackberry");
        assert_eq!(factory.kinds(), vec!["android", "blackberry", "ios"]);
    }

    #[test]
    fn test_register_replaces_existing() {
        let (mock, _handle) = MockSender::new("android-mock");
        let factory =
            DeviceFactory::default().register("android", move || AnySender::Mock(mock.clone()));

        assert!(matches!(factory.create("android").unwrap(), AnySender::Mock(_)));
    }

    #[test]
    fn test_empty_factory() {
        let factory = DeviceFactory::empty();
        assert!(factory.kinds().is_empty());
        assert!(!factory.is_supported("android"));
    }

    #[test]
    fn test_debug_lists_kinds() {
        let debug = format!("{:?}", DeviceFactory::default());
        assert!(debug.contains("android"));
        assert!(debug.contains("ios"));
    }
}
