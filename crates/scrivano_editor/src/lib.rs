//! Editor-side relay client for Scrivano.
//!
//! Drives streaming exchanges against the relay server, applies incoming
//! text to a host document, and projects network status for user feedback.

mod action;
mod decode;
mod document;
mod relay;
mod status;

pub use action::{Action, ActionItem, ApplyMode, action_catalog};
pub use decode::StreamDecoder;
pub use document::{Document, RangeError, TextDocument};
pub use relay::{RelayClient, RelayError};
pub use status::{
    COMPLETED_IDLE_DELAY, ERROR_IDLE_DELAY, Status, StatusIndicator, StatusSink,
};
