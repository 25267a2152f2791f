//! Upstream provider client for the Scrivano relay.
//!
//! Implements the OpenAI chat and legacy completion wire formats,
//! including SSE stream decoding, and exposes the [`CompletionStream`]
//! trait the relay server consumes.

mod backend;
mod config;
pub mod openai;

pub use backend::{CompletionStream, DeltaStream};
pub use config::{OpenAIConfig, OpenAIConfigBuilder};
pub use openai::{OpenAIClient, OpenAIError};
