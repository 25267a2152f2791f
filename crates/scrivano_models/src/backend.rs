//! Trait seam between the relay server and the upstream provider.

use crate::openai::{OpenAIClient, OpenAIError, conversions};
use async_trait::async_trait;
use futures::stream::BoxStream;
use scrivano_core::{Conversation, ModelOptions};

/// A boxed stream of text deltas in upstream receipt order.
pub type DeltaStream = BoxStream<'static, Result<String, OpenAIError>>;

/// Upstream streaming completion operations consumed by the relay server.
///
/// The relay depends on this trait rather than on [`OpenAIClient`]
/// directly so tests can substitute a scripted backend.
#[async_trait]
pub trait CompletionStream: Send + Sync {
    /// Open a streaming chat completion for the given conversation.
    async fn stream_chat(
        &self,
        conversation: Conversation,
        options: ModelOptions,
    ) -> Result<DeltaStream, OpenAIError>;

    /// Open a streaming legacy completion for the given raw prompt.
    async fn stream_completion(
        &self,
        prompt: String,
        options: ModelOptions,
    ) -> Result<DeltaStream, OpenAIError>;
}

#[async_trait]
impl CompletionStream for OpenAIClient {
    async fn stream_chat(
        &self,
        conversation: Conversation,
        options: ModelOptions,
    ) -> Result<DeltaStream, OpenAIError> {
        let request = conversions::to_chat_request(&conversation, &options)?;
        OpenAIClient::stream_chat(self, request).await
    }

    async fn stream_completion(
        &self,
        prompt: String,
        options: ModelOptions,
    ) -> Result<DeltaStream, OpenAIError> {
        let request = conversions::to_prompt_request(&prompt, &options)?;
        OpenAIClient::stream_completion(self, request).await
    }
}
