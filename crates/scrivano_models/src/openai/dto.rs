//! Data transfer objects for the OpenAI API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the OpenAI chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// OpenAI chat completion request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Enable streaming
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

impl ChatRequest {
    /// Creates a new builder for ChatRequest.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }

    /// Create a streaming version of this request
    pub fn with_streaming(self) -> Self {
        Self {
            stream: Some(true),
            ..self
        }
    }
}

/// OpenAI legacy completion request (raw prompt).
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct PromptRequest {
    /// Model identifier
    model: String,
    /// Raw prompt text
    prompt: String,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Enable streaming
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

impl PromptRequest {
    /// Creates a new builder for PromptRequest.
    pub fn builder() -> PromptRequestBuilder {
        PromptRequestBuilder::default()
    }

    /// Create a streaming version of this request
    pub fn with_streaming(self) -> Self {
        Self {
            stream: Some(true),
            ..self
        }
    }
}

/// A choice in the non-streaming chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message content
    pub message: ChatMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// OpenAI chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response choices
    pub choices: Vec<ChatChoice>,
}

/// Streaming chat completion chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChunk {
    /// Delta choices
    pub choices: Vec<ChunkChoice>,
}

/// A choice in a streaming chat chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    /// Delta content
    pub delta: Delta,
    /// Finish reason (if complete)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Delta content in a streaming chat chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct Delta {
    /// Role (only in first chunk)
    #[serde(default)]
    pub role: Option<String>,
    /// Incremental content
    #[serde(default)]
    pub content: Option<String>,
}

/// Streaming legacy completion chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChunk {
    /// Text choices
    pub choices: Vec<CompletionChoice>,
}

/// A choice in a streaming legacy completion chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// Incremental text
    #[serde(default)]
    pub text: String,
    /// Finish reason (if complete)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Errors from the OpenAI API.
#[derive(Debug, Clone, derive_more::Display)]
pub enum OpenAIError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// API returned an error
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Request rejected before any upstream call
    #[display("Request rejected: {}", _0)]
    Rejected(String),

    /// Failed to parse a response or stream chunk
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Response carried no choices
    #[display("Empty response: no choices returned")]
    EmptyResponse,

    /// Builder error
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl std::error::Error for OpenAIError {}
