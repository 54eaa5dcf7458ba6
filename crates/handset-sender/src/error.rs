//! Error types for SMS sender operations.
//!
//! This module covers the two failure families of the send path: resolving a
//! sender for a device kind, and handing a message to the kind's transport.

/// Result type alias for sender operations.
pub type SenderResult<T> = std::result::Result<T, SenderError>;

/// Errors that can occur while resolving a sender or sending an SMS.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SenderError {
    /// No sender is registered for this device kind.
    #[error("Unsupported device kind: {kind}")]
    UnsupportedDeviceKind { kind: String },

    /// Destination is not a dialable phone number.
    #[error("Invalid destination number: {to}")]
    InvalidDestination { to: String },

    /// Message does not fit in what the transport accepts.
    #[error("Message too long for {kind}: {length} chars exceeds {limit}")]
    MessageTooLong {
        kind: String,
        length: usize,
        limit: usize,
    },

    /// Transport rejected or failed to deliver the message.
    #[error("Transport failure: {message}")]
    Transport { message: String },
}

impl SenderError {
    /// Create a new unsupported device kind error.
    pub fn unsupported_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedDeviceKind { kind: kind.into() }
    }

    /// Create a new invalid destination error.
    pub fn invalid_destination(to: impl Into<String>) -> Self {
        Self::InvalidDestination { to: to.into() }
    }

    /// Create a new message too long error.
    pub fn message_too_long(kind: impl Into<String>, length: usize, limit: usize) -> Self {
        Self::MessageTooLong {
            kind: kind.into(),
            length,
            limit,
        }
    }

    /// Create a new transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Whether this error happened inside the transport rather than during
    /// sender resolution.
    pub fn is_transport_failure(&self) -> bool {
        !matches!(self, Self::UnsupportedDeviceKind { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_error() {
        let error = SenderError::unsupported_kind("palmos");
        assert!(matches!(error, SenderError::UnsupportedDeviceKind { .. }));
        assert_eq!(error.to_string(), "Unsupported device kind: palmos");
        assert!(!error.is_transport_failure());
    }

    #[test]
    fn test_message_too_long_error() {
        let error = SenderError::message_too_long("ios", 2500, 2000);
        assert_eq!(
            error.to_string(),
            "Message too long for ios: 2500 chars exceeds 2000"
        );
        assert!(error.is_transport_failure());
    }

    #[test]
    fn test_transport_errors_are_transport_failures() {
        let errors = vec![
            SenderError::invalid_destination("abc"),
            SenderError::transport("carrier unreachable"),
        ];

        for error in errors {
            assert!(error.is_transport_failure());
        }
    }
}
