//! Configuration for the OpenAI API connection.

use derive_getters::Getters;
use scrivano_error::ConfigError;

/// Connection settings for the OpenAI API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct OpenAIConfig {
    /// API key sent as a bearer token
    api_key: String,
    /// Base URL of the API (e.g., "https://api.openai.com")
    #[builder(default = "String::from(\"https://api.openai.com\")")]
    base_url: String,
}

impl OpenAIConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com")
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY not set"))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());

        Ok(OpenAIConfigBuilder::default()
            .api_key(api_key)
            .base_url(base_url)
            .build()
            .expect("Valid OpenAIConfig"))
    }
}
