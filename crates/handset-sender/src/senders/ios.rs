//! iOS sender.

use handset_core::SmsRequest;
use handset_core::constants::KIND_IOS;
use tracing::info;

use crate::error::{SenderError, SenderResult};
use crate::traits::SmsSender;
use crate::types::{SenderInfo, validate_destination};

/// Longest message body accepted in a single payload.
pub const MAX_MESSAGE_CHARS: usize = 2000;

/// Sender for `"ios"` devices.
///
/// iOS hands the whole body to the messaging service as one payload, so there
/// is no segmentation, only an upper bound on length.
#[derive(Debug, Clone, Default)]
pub struct IosSender;

impl IosSender {
    pub fn new() -> Self {
        Self
    }
}

impl SmsSender for IosSender {
    fn kind(&self) -> &str {
        KIND_IOS
    }

    fn info(&self) -> SenderInfo {
        SenderInfo::new(KIND_IOS, "Messages").with_max_message_len(MAX_MESSAGE_CHARS)
    }

    async fn send_sms(&self, request: &SmsRequest) -> SenderResult<String> {
        validate_destination(&request.to)?;

        let length = request.message.chars().count();
        if length > MAX_MESSAGE_CHARS {
            return Err(SenderError::message_too_long(
                KIND_IOS,
                length,
                MAX_MESSAGE_CHARS,
            ));
        }

        info!(to = %request.to, length, "Dispatching SMS via ios device");

        Ok(format!("SMS sent via ios device to {}", request.to))
    }
}
