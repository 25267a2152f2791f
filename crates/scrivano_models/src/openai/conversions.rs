//! Conversions between Scrivano core types and OpenAI wire types.

use crate::openai::{ChatMessage, ChatRequest, OpenAIError, PromptRequest};
use scrivano_core::{Conversation, ModelOptions, Role};

fn role_to_wire(role: &Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// Build a chat request from a conversation and model options.
///
/// # Errors
///
/// Returns a builder error if required fields are missing.
pub fn to_chat_request(
    conversation: &Conversation,
    options: &ModelOptions,
) -> Result<ChatRequest, OpenAIError> {
    let messages: Vec<ChatMessage> = conversation
        .messages()
        .iter()
        .map(|message| ChatMessage {
            role: role_to_wire(message.role()).to_string(),
            content: message.content().clone(),
        })
        .collect();

    ChatRequest::builder()
        .model(options.model().clone())
        .messages(messages)
        .max_tokens(Some(*options.max_tokens()))
        .temperature(Some(*options.temperature()))
        .build()
        .map_err(|e| OpenAIError::Builder(e.to_string()))
}

/// Build a legacy completion request from a raw prompt and model options.
///
/// The prompt is trimmed before sending.
///
/// # Errors
///
/// Returns a builder error if required fields are missing.
pub fn to_prompt_request(
    prompt: &str,
    options: &ModelOptions,
) -> Result<PromptRequest, OpenAIError> {
    PromptRequest::builder()
        .model(options.model().clone())
        .prompt(prompt.trim())
        .max_tokens(Some(*options.max_tokens()))
        .temperature(Some(*options.temperature()))
        .build()
        .map_err(|e| OpenAIError::Builder(e.to_string()))
}
