//! Common types shared across sender implementations.

use handset_core::constants::{MAX_PHONE_DIGITS, MIN_PHONE_DIGITS};
use serde::{Deserialize, Serialize};

use crate::error::{SenderError, SenderResult};

/// Sender metadata.
///
/// Describes the device kind a sender serves, the transport it hands
/// messages to, and the largest message body it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderInfo {
    /// Device kind tag (e.g., "android").
    pub kind: String,

    /// Transport name (e.g., "GSM SMS").
    pub transport: String,

    /// Maximum accepted message length in characters.
    pub max_message_len: Option<usize>,
}

impl SenderInfo {
    /// Create a new SenderInfo with required fields.
    pub fn new(kind: impl Into<String>, transport: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            transport: transport.into(),
            max_message_len: None,
        }
    }

    /// Set the maximum accepted message length.
    pub fn with_max_message_len(mut self, max_message_len: usize) -> Self {
        self.max_message_len = Some(max_message_len);
        self
    }
}

/// Check that a destination looks like a dialable phone number.
///
/// Accepts digits with an optional leading `+` and the usual visual
/// separators (spaces, dashes, dots, parentheses). The digit count must be
/// between [`MIN_PHONE_DIGITS`] and [`MAX_PHONE_DIGITS`].
///
/// # Errors
///
/// Returns `SenderError::InvalidDestination` otherwise.
///
/// # Examples
///
/// ```
/// use handset_sender::types::validate_destination;
///
/// assert!(validate_destination("+1 (555) 010-0100").is_ok());
/// assert!(validate_destination("call me").is_err());
/// ```
pub fn validate_destination(to: &str) -> SenderResult<()> {
    let trimmed = to.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(SenderError::invalid_destination(to)),
        }
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
        return Err(SenderError::invalid_destination(to));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_sender_info_builder() {
        let info = SenderInfo::new("android", "GSM SMS").with_max_message_len(1530);

        assert_eq!(info.kind, "android");
        assert_eq!(info.transport, "GSM SMS");
        assert_eq!(info.max_message_len, Some(1530));
    }

    #[rstest]
    #[case("5559999")]
    #[case("555-0100")]
    #[case("+55 (11) 91234-5678")]
    #[case("555.010.0100")]
    fn test_valid_destinations(#[case] to: &str) {
        assert!(validate_destination(to).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("12")] // too few digits
    #[case("123456789012345678901")] // too many digits
    #[case("555-CALL-NOW")]
    #[case("++5559999")]
    fn test_invalid_destinations(#[case] to: &str) {
        assert_eq!(
            validate_destination(to),
            Err(SenderError::invalid_destination(to))
        );
    }
}
