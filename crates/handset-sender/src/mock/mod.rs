//! Mock sender implementation for testing and development.
//!
//! This module provides a sender that records every request it receives and
//! can be told to fail, so that dispatch paths can be exercised without a
//! real transport.

pub mod sender;

pub use sender::{MockSender, MockSenderHandle};
