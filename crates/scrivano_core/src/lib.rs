//! Core data types for the Scrivano relay.
//!
//! This crate provides the foundation data types used across the relay
//! server, upstream client, and editor-facing surfaces.

mod conversation;
mod message;
mod model;
mod request;
mod role;

pub use conversation::{ChatSession, Conversation};
pub use message::{Message, MessageBuilder};
pub use model::{ModelFamily, token_ceiling};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, ModelOptions, ModelOptionsBuilder,
};
pub use role::Role;
