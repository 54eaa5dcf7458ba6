//! Android sender.
//!
//! Android handsets send plain carrier SMS. Bodies longer than a single
//! segment are split into concatenated segments, which carry a user data
//! header and therefore hold fewer characters each.

use handset_core::SmsRequest;
use handset_core::constants::KIND_ANDROID;
use tracing::{debug, info};

use crate::error::{SenderError, SenderResult};
use crate::traits::SmsSender;
use crate::types::{SenderInfo, validate_destination};

/// Characters in a single, unconcatenated SMS segment.
pub const SINGLE_SEGMENT_CHARS: usize = 160;

/// Characters per segment once a message is concatenated.
pub const CONCAT_SEGMENT_CHARS: usize = 153;

/// Maximum number of concatenated segments the transport accepts.
pub const MAX_SEGMENTS: usize = 10;

/// Sender for `"android"` devices.
///
/// # Examples
///
/// ```
/// use handset_core::SmsRequest;
/// use handset_sender::senders::AndroidSender;
/// use handset_sender::traits::SmsSender;
///
/// #[tokio::main]
/// async fn main() -> handset_sender::SenderResult<()> {
///     let sender = AndroidSender::new();
///     let result = sender.send_sms(&SmsRequest::new("5559999", "hi")).await?;
///     assert!(result.contains("android"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AndroidSender;

impl AndroidSender {
    pub fn new() -> Self {
        Self
    }

    /// Number of segments needed to carry a message of `chars` characters.
    ///
    /// An empty message still occupies one segment.
    pub fn segment_count(chars: usize) -> usize {
        if chars <= SINGLE_SEGMENT_CHARS {
            1
        } else {
            chars.div_ceil(CONCAT_SEGMENT_CHARS)
        }
    }

    /// Longest message the transport accepts.
    pub fn max_message_len() -> usize {
        CONCAT_SEGMENT_CHARS * MAX_SEGMENTS
    }
}

impl SmsSender for AndroidSender {
    fn kind(&self) -> &str {
        KIND_ANDROID
    }

    fn info(&self) -> SenderInfo {
        SenderInfo::new(KIND_ANDROID, "GSM SMS").with_max_message_len(Self::max_message_len())
    }

    async fn send_sms(&self, request: &SmsRequest) -> SenderResult<String> {
        validate_destination(&request.to)?;

        let length = request.message.chars().count();
        let segments = Self::segment_count(length);
        if segments > MAX_SEGMENTS {
            return Err(SenderError::message_too_long(
                KIND_ANDROID,
                length,
                Self::max_message_len(),
            ));
        }

        debug!(to = %request.to, length, segments, "Splitting SMS into segments");
        info!(to = %request.to, segments, "Dispatching SMS via android device");

        let noun = if segments == 1 { "segment" } else { "segments" };
        Ok(format!(
            "SMS sent via android device to {} ({} {})",
            request.to, segments, noun
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(160, 1)]
    #[case(161, 2)]
    #[case(306, 2)]
    #[case(307, 3)]
    #[case(1530, 10)]
    #[case(1531, 11)]
    fn test_segment_count(#[case] chars: usize, #[case] expected: usize) {
        assert_eq!(AndroidSender::segment_count(chars), expected);
    }

    #[tokio::test]
    async fn test_send_single_segment() {
        let sender = AndroidSender::new();
        let result = sender
            .send_sms(&SmsRequest::new("5559999", "hi"))
            .await
            .unwrap();

        assert_eq!(result, "SMS sent via android device to 5559999 (1 segment)");
    }

    #[tokio::test]
    async fn test_send_multi_segment() {
        let sender = AndroidSender::new();
        let body = "x".repeat(200);
        let result = sender
            .send_sms(&SmsRequest::new("5559999", body))
            .await
            .unwrap();

        assert!(result.ends_with("(2 segments)"));
    }

    #[tokio::test]
    async fn test_send_empty_message() {
        let sender = AndroidSender::new();
        assert!(sender.send_sms(&SmsRequest::new("5559999", "")).await.is_ok());
    }

    #[tokio::test]
    async fn test_send_too_long() {
        let sender = AndroidSender::new();
        let body = "x".repeat(AndroidSender::max_message_len() + 1);
        let error = sender
            .send_sms(&SmsRequest::new("5559999", body))
            .await
            .unwrap_err();

        assert!(matches!(error, SenderError::MessageTooLong { .. }));
        assert!(error.is_transport_failure());
    }

    #[tokio::test]
    async fn test_send_invalid_destination() {
        let sender = AndroidSender::new();
        let error = sender
            .send_sms(&SmsRequest::new("nobody", "hi"))
            .await
            .unwrap_err();

        assert_eq!(error, SenderError::invalid_destination("nobody"));
    }

    #[test]
    fn test_info() {
        let info = AndroidSender::new().info();
        assert_eq!(info.kind, "android");
        assert_eq!(info.max_message_len, Some(1530));
    }
}
