//! Relay request types and validation.

use crate::model::token_ceiling;
use scrivano_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Generation options attached to a relay request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ModelOptions {
    /// Model identifier
    model: String,
    /// Sampling temperature (0.0 - 2.0)
    temperature: f32,
    /// Maximum tokens to generate
    max_tokens: u32,
}

impl ModelOptions {
    /// Returns a builder for constructing ModelOptions.
    pub fn builder() -> ModelOptionsBuilder {
        ModelOptionsBuilder::default()
    }
}

/// A relay generation request: one prompt plus model options.
///
/// Immutable once sent; discarded after the relay completes.
///
/// # Examples
///
/// ```
/// use scrivano_core::{CompletionRequest, ModelOptions};
///
/// let request = CompletionRequest::builder()
///     .prompt("Say hi")
///     .options(
///         ModelOptions::builder()
///             .model("gpt-3.5-turbo")
///             .temperature(0.4)
///             .max_tokens(128u32)
///             .build()
///             .expect("Valid ModelOptions"),
///     )
///     .build()
///     .expect("Valid CompletionRequest");
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Prompt text
    prompt: String,
    /// Generation options
    options: ModelOptions,
}

impl CompletionRequest {
    /// Returns a builder for constructing a CompletionRequest.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }

    /// The prompt with surrounding whitespace removed.
    pub fn trimmed_prompt(&self) -> &str {
        self.prompt.trim()
    }

    /// Validate the request before any upstream call.
    ///
    /// Checks that the prompt is non-empty after trimming, the temperature
    /// is within 0.0 - 2.0, max_tokens is positive, and max_tokens does not
    /// exceed the ceiling for the selected model.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] with a user-facing message describing
    /// the first failed check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.trimmed_prompt().is_empty() {
            return Err(ValidationError::new("The prompt field cannot be empty."));
        }

        let temperature = self.options.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ValidationError::new(
                "The temperature must be between 0 and 2.",
            ));
        }

        if self.options.max_tokens == 0 {
            return Err(ValidationError::new("The max token value must be positive."));
        }

        if let Some(ceiling) = token_ceiling(&self.options.model) {
            if self.options.max_tokens > ceiling {
                return Err(ValidationError::new(format!(
                    "The model you have selected only supports a maximum of {ceiling} tokens. \
                     Please reduce the max token value to {ceiling} or lower."
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str, model: &str, max_tokens: u32) -> CompletionRequest {
        CompletionRequest::builder()
            .prompt(prompt)
            .options(
                ModelOptions::builder()
                    .model(model)
                    .temperature(0.4)
                    .max_tokens(max_tokens)
                    .build()
                    .expect("Valid ModelOptions"),
            )
            .build()
            .expect("Valid CompletionRequest")
    }

    #[test]
    fn accepts_tokens_at_or_below_the_ceiling() {
        assert!(request("hello", "gpt-4", 8192).validate().is_ok());
        assert!(request("hello", "gpt-3.5-turbo", 4096).validate().is_ok());
        assert!(request("hello", "gpt-3.5-turbo-16k", 16384).validate().is_ok());
        assert!(request("hello", "text-davinci-003", 4097).validate().is_ok());
        assert!(request("hello", "text-ada-001", 2049).validate().is_ok());
    }

    #[test]
    fn rejects_tokens_over_the_ceiling_with_a_ceiling_specific_message() {
        let err = request("hello", "gpt-4", 9000).validate().unwrap_err();
        assert!(err.message.contains("8192"));

        let err = request("hello", "gpt-3.5-turbo", 4097).validate().unwrap_err();
        assert!(err.message.contains("4096"));

        let err = request("hello", "gpt-3.5-turbo-16k", 20000)
            .validate()
            .unwrap_err();
        assert!(err.message.contains("16384"));

        let err = request("hello", "text-davinci-003", 5000)
            .validate()
            .unwrap_err();
        assert!(err.message.contains("4097"));
    }

    #[test]
    fn rejects_empty_and_whitespace_prompts() {
        assert!(request("", "gpt-4", 128).validate().is_err());
        assert!(request("   \n\t", "gpt-4", 128).validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_temperature() {
        let mut req = request("hello", "gpt-4", 128);
        req.options.temperature = 2.5;
        assert!(req.validate().is_err());
        req.options.temperature = -0.1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_models_pass_the_ceiling_check() {
        assert!(request("hello", "mystery-model", 1_000_000).validate().is_ok());
    }
}
