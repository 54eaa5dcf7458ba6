use serde::{Deserialize, Serialize};

use crate::{Result, error::Error};

/// Outbound SMS request. Never persisted.
///
/// `to` is required and must be non-empty; `message` may be omitted, in which
/// case an empty body is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsRequest {
    /// Destination phone number
    pub to: String,

    /// Message body
    #[serde(default)]
    pub message: String,
}

impl SmsRequest {
    pub fn new(to: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            message: message.into(),
        }
    }

    /// Check the required fields after binding.
    ///
    /// # Errors
    /// Returns `Error::MissingField` if `to` is empty. Whitespace is left for
    /// the sender's destination check.
    pub fn validate(&self) -> Result<()> {
        if self.to.is_empty() {
            return Err(Error::MissingField("to".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_optional() {
        let request: SmsRequest = serde_json::from_str(r#"{"to":"5559999"}"#).unwrap();
        assert_eq!(request.to, "5559999");
        assert!(request.message.is_empty());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_to_fails_binding() {
        let result: std::result::Result<SmsRequest, _> = serde_json::from_str(r#"{"message":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_to_fails_validation() {
        let request = SmsRequest::new("", "hi");
        assert_eq!(
            request.validate(),
            Err(Error::MissingField("to".to_string()))
        );
    }

    #[test]
    fn test_whitespace_to_passes_binding_checks() {
        let request = SmsRequest::new("  ", "hi");
        assert!(request.validate().is_ok());
    }
}
