//! Streaming client for the OpenAI API.

use crate::backend::DeltaStream;
use crate::config::OpenAIConfig;
use crate::openai::sse::SseDecoder;
use crate::openai::{
    ChatChunk, ChatRequest, ChatResponse, CompletionChunk, OpenAIError, PromptRequest,
    conversions,
};
use async_stream::try_stream;
use futures_util::StreamExt;
use reqwest::Client;
use scrivano_core::{ChatSession, CompletionRequest, ModelOptions};
use tracing::{debug, error, instrument};

/// Client for the OpenAI chat and legacy completion endpoints.
///
/// Streaming calls yield one text delta per upstream fragment, in receipt
/// order, and terminate when the provider sends its done sentinel.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAIClient {
    /// Creates a new client from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &OpenAIConfig) -> Self {
        let client = Client::new();

        debug!(url = %config.base_url(), "Created OpenAI client");

        Self {
            client,
            api_key: config.api_key().clone(),
            base_url: config.base_url().clone(),
        }
    }

    /// Returns the base URL in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_stream(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<reqwest::Response, OpenAIError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = ?e, "HTTP request failed");
                OpenAIError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        Ok(response)
    }

    /// Opens a streaming chat completion and yields each content delta.
    ///
    /// Fragments with no content (the role-only first delta and the finish
    /// chunk) are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be established; mid-stream
    /// failures surface as an `Err` item.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn stream_chat(&self, request: ChatRequest) -> Result<DeltaStream, OpenAIError> {
        let response = self
            .post_stream("/v1/chat/completions", &request.with_streaming())
            .await?;

        Ok(delta_stream(response, |payload| {
            let chunk: ChatChunk = serde_json::from_str(payload).map_err(|e| {
                OpenAIError::ResponseParsing(format!("Failed to parse chat chunk: {}", e))
            })?;
            Ok(chunk
                .choices
                .first()
                .and_then(|choice| choice.delta.content.clone()))
        }))
    }

    /// Opens a streaming legacy completion and yields each text delta.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be established; mid-stream
    /// failures surface as an `Err` item.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn stream_completion(
        &self,
        request: PromptRequest,
    ) -> Result<DeltaStream, OpenAIError> {
        let response = self
            .post_stream("/v1/completions", &request.with_streaming())
            .await?;

        Ok(delta_stream(response, |payload| {
            let chunk: CompletionChunk = serde_json::from_str(payload).map_err(|e| {
                OpenAIError::ResponseParsing(format!("Failed to parse completion chunk: {}", e))
            })?;
            Ok(chunk.choices.first().map(|choice| choice.text.clone()))
        }))
    }

    /// Performs one non-streaming chat completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn create_chat(&self, request: ChatRequest) -> Result<ChatResponse, OpenAIError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                OpenAIError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");

            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OpenAIError::ResponseParsing(format!("Failed to parse JSON: {}", e))
        })
    }

    /// Runs one chat form turn against the session.
    ///
    /// The user text and options are validated first, so a blank entry or
    /// an over-ceiling `max_tokens` is rejected before any upstream call.
    /// Sends the session history plus the new user text; on success the
    /// assistant reply is committed to the session and returned trimmed.
    /// On failure the session history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAIError::Rejected`] if validation fails, or an error
    /// if the exchange fails or yields no choices.
    #[instrument(skip(self, session, text), fields(model = %options.model()))]
    pub async fn chat_turn(
        &self,
        session: &mut ChatSession,
        text: &str,
        options: &ModelOptions,
    ) -> Result<String, OpenAIError> {
        CompletionRequest::builder()
            .prompt(text)
            .options(options.clone())
            .build()
            .map_err(|e| OpenAIError::Builder(e.to_string()))?
            .validate()
            .map_err(|e| {
                debug!(error = %e, "Rejected chat turn");
                OpenAIError::Rejected(e.message)
            })?;

        let outbound = session.prepare(text);
        let request = conversions::to_chat_request(&outbound, options)?;

        debug!(
            message_count = outbound.messages().len(),
            "Sending chat turn"
        );

        let response = self.create_chat(request).await?;
        let reply = response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(OpenAIError::EmptyResponse)?;

        session.record(outbound, &reply);
        Ok(reply)
    }
}

/// Adapts an SSE response body into a stream of text deltas.
///
/// `extract` parses one event payload and returns its delta, or `None` for
/// fragments carrying no text.
fn delta_stream<F>(response: reqwest::Response, extract: F) -> DeltaStream
where
    F: Fn(&str) -> Result<Option<String>, OpenAIError> + Send + 'static,
{
    Box::pin(try_stream! {
        let mut decoder = SseDecoder::new();
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let chunk = chunk
                .map_err(|e| OpenAIError::Http(format!("Stream read failed: {}", e)))?;

            for payload in decoder.push(&chunk) {
                if let Some(delta) = extract(&payload)? {
                    if !delta.is_empty() {
                        yield delta;
                    }
                }
            }

            if decoder.is_finished() {
                break;
            }
        }
    })
}
