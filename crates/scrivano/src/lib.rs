//! Unified interface for the Scrivano streaming completion relay.
//!
//! Re-exports the workspace crates: core data types, the upstream OpenAI
//! client, the relay server, and the editor-side relay client.

pub mod cli;

pub use scrivano_core::{
    ChatSession, CompletionRequest, Conversation, Message, ModelFamily, ModelOptions, Role,
    token_ceiling,
};
pub use scrivano_editor::{
    Action, ActionItem, ApplyMode, Document, RelayClient, Status, StatusIndicator, StatusSink,
    TextDocument, action_catalog,
};
pub use scrivano_error::{ScrivanoError, ScrivanoErrorKind, ScrivanoResult};
pub use scrivano_models::{CompletionStream, DeltaStream, OpenAIClient, OpenAIConfig, OpenAIError};
pub use scrivano_relay::{RelayConfig, create_router, serve};
