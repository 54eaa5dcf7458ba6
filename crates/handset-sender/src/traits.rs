//! SMS sender trait definition.
//!
//! This module defines the capability every device kind implements: taking an
//! [`SmsRequest`] and handing it to the kind's transport. The trait is the
//! contract between the request handlers and the per-OS sender variants.
//!
//! Methods use native `async fn` in implementations (Edition 2024 RPITIT). The
//! trait spells out `impl Future + Send` so that senders can be driven from
//! multi-threaded Tokio tasks such as HTTP handlers.

use std::future::Future;

use handset_core::SmsRequest;

use crate::error::SenderResult;
use crate::types::SenderInfo;

/// SMS sending capability for one device kind.
///
/// Implementations must not touch the device registry: sending an SMS and
/// mutating a device record are independent operations. Failures are always
/// reported to the caller, never swallowed or retried here.
///
/// # Object Safety and Dynamic Dispatch
///
/// **NOTE**: This trait is NOT object-safe because its async methods return
/// `impl Future`. You cannot use `Box<dyn SmsSender>`.
///
/// For most use cases, use generic type parameters:
///
/// ```no_run
/// use handset_core::SmsRequest;
/// use handset_sender::traits::SmsSender;
/// use handset_sender::SenderResult;
///
/// async fn notify<S: SmsSender>(sender: &S, to: &str) -> SenderResult<String> {
///     sender.send_sms(&SmsRequest::new(to, "hello")).await
/// }
/// ```
///
/// For runtime selection by device kind, use [`AnySender`](crate::devices::AnySender)
/// obtained from the [`DeviceFactory`](crate::factory::DeviceFactory).
pub trait SmsSender: Send + Sync {
    /// Device kind tag served by this sender.
    fn kind(&self) -> &str;

    /// Get sender metadata.
    fn info(&self) -> SenderInfo;

    /// Send an SMS and return a human-readable result message.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The destination is not a dialable number
    /// - The message exceeds what the transport accepts
    /// - The transport fails to take the message
    fn send_sms(&self, request: &SmsRequest) -> impl Future<Output = SenderResult<String>> + Send;
}
