//! OpenAI API client.
//!
//! This module provides the streaming client used by the relay server and
//! the non-streaming chat call used by the chat form.

mod client;
pub mod conversions;
mod dto;
mod sse;

pub use client::OpenAIClient;
pub use dto::{
    ChatChoice, ChatChunk, ChatMessage, ChatRequest, ChatResponse, ChunkChoice, CompletionChoice,
    CompletionChunk, Delta, OpenAIError, PromptRequest,
};
pub use sse::SseDecoder;
