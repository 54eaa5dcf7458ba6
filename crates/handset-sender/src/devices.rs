//! Enum wrapper for sender dispatch.
//!
//! Native `async fn` in traits is not object-safe, so `Box<dyn SmsSender>` is
//! not available. [`AnySender`] provides concrete type dispatch instead: the
//! factory returns one of these, and callers use it through the
//! [`SmsSender`] trait without knowing which variant they hold.
//!
//! # Examples
//!
//! ```
//! use handset_sender::devices::AnySender;
//! use handset_sender::senders::AndroidSender;
//! use handset_sender::traits::SmsSender;
//!
//! let sender = AnySender::Android(AndroidSender::new());
//! assert_eq!(sender.kind(), "android");
//! ```

use handset_core::SmsRequest;

use crate::error::SenderResult;
use crate::mock::MockSender;
use crate::senders::{AndroidSender, IosSender};
use crate::traits::SmsSender;
use crate::types::SenderInfo;

/// Enum wrapper for SMS sender dispatch.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum AnySender {
    /// Android handset sender.
    Android(AndroidSender),

    /// iOS handset sender.
    Ios(IosSender),

    /// Mock sender for development and testing.
    Mock(MockSender),
}

impl SmsSender for AnySender {
    fn kind(&self) -> &str {
        match self {
            Self::Android(sender) => sender.kind(),
            Self::Ios(sender) => sender.kind(),
            Self::Mock(sender) => sender.kind(),
        }
    }

    fn info(&self) -> SenderInfo {
        match self {
            Self::Android(sender) => sender.info(),
            Self::Ios(sender) => sender.info(),
            Self::Mock(sender) => sender.info(),
        }
    }

    async fn send_sms(&self, request: &SmsRequest) -> SenderResult<String> {
        match self {
            Self::Android(sender) => sender.send_sms(request).await,
            Self::Ios(sender) => sender.send_sms(request).await,
            Self::Mock(sender) => sender.send_sms(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_any_sender_android() {
        let sender = AnySender::Android(AndroidSender::new());

        let result = sender
            .send_sms(&SmsRequest::new("5559999", "hi"))
            .await
            .unwrap();
        assert!(result.starts_with("SMS sent via android device"));
    }

    #[tokio::test]
    async fn test_any_sender_ios() {
        let sender = AnySender::Ios(IosSender::new());
        assert_eq!(sender.info().transport, "Messages");
    }

    #[tokio::test]
    async fn test_any_sender_mock() {
        let (mock, handle) = MockSender::new("test");
        let sender = AnySender::Mock(mock);

        sender
            .send_sms(&SmsRequest::new("5559999", "hi"))
            .await
            .unwrap();
        assert_eq!(sender.kind(), "test");
        assert_eq!(handle.sent_count(), 1);
    }
}
