//! Mock sender implementation for testing and development.

use std::sync::{Arc, Mutex, PoisonError};

use handset_core::SmsRequest;

use crate::error::{SenderError, SenderResult};
use crate::traits::SmsSender;
use crate::types::SenderInfo;

#[derive(Debug, Default)]
struct MockState {
    sent: Vec<SmsRequest>,
    failure: Option<SenderError>,
}

/// Mock sender for testing and development.
///
/// Every successful or failed send is observable through the paired
/// [`MockSenderHandle`]. Clones share the same recorded state, so a factory
/// can hand out fresh copies per request while a test keeps the handle.
///
/// # Examples
///
/// ```
/// use handset_core::SmsRequest;
/// use handset_sender::mock::MockSender;
/// use handset_sender::traits::SmsSender;
///
/// #[tokio::main]
/// async fn main() -> handset_sender::SenderResult<()> {
///     let (sender, handle) = MockSender::new("test");
///
///     sender.send_sms(&SmsRequest::new("5559999", "hi")).await?;
///
///     assert_eq!(handle.sent_count(), 1);
///     assert_eq!(handle.sent()[0].message, "hi");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MockSender {
    /// Device kind served
    kind: String,

    /// State shared with the handle
    state: Arc<Mutex<MockState>>,
}

impl MockSender {
    /// Create a new mock sender for `kind`.
    ///
    /// Returns a tuple of (MockSender, MockSenderHandle) where the handle
    /// can be used to inspect requests and inject failures.
    pub fn new(kind: impl Into<String>) -> (Self, MockSenderHandle) {
        let state = Arc::new(Mutex::new(MockState::default()));

        let sender = Self {
            kind: kind.into(),
            state: state.clone(),
        };

        (sender, MockSenderHandle { state })
    }
}

impl SmsSender for MockSender {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn info(&self) -> SenderInfo {
        SenderInfo::new(self.kind.clone(), "Mock")
    }

    async fn send_sms(&self, request: &SmsRequest) -> SenderResult<String> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.sent.push(request.clone());

        if let Some(error) = state.failure.clone() {
            return Err(error);
        }

        Ok(format!("SMS sent via {} device to {}", self.kind, request.to))
    }
}

/// Handle for inspecting and controlling a mock sender.
#[derive(Debug, Clone)]
pub struct MockSenderHandle {
    state: Arc<Mutex<MockState>>,
}

impl MockSenderHandle {
    /// All requests received so far, in order.
    pub fn sent(&self) -> Vec<SmsRequest> {
        self.lock().sent.clone()
    }

    /// Number of requests received so far.
    pub fn sent_count(&self) -> usize {
        self.lock().sent.len()
    }

    /// Make every subsequent send fail with `error`.
    pub fn fail_with(&self, error: SenderError) {
        self.lock().failure = Some(error);
    }

    /// Clear an injected failure.
    pub fn succeed(&self) {
        self.lock().failure = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
