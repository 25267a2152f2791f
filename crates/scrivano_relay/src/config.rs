//! Configuration for the relay server.

use derive_getters::Getters;
use scrivano_error::ConfigError;

/// Bind settings for the relay server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct RelayConfig {
    /// Host to bind (e.g., "127.0.0.1")
    #[builder(default = "String::from(\"127.0.0.1\")")]
    host: String,
    /// Port to bind
    #[builder(default = "8080")]
    port: u16,
}

impl RelayConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `RELAY_HOST` (default: "127.0.0.1")
    /// - `RELAY_PORT` (default: 8080)
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `RELAY_PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("RELAY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("RELAY_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::new(format!("RELAY_PORT is not a valid port: {raw}")))?,
            Err(_) => 8080,
        };

        Ok(RelayConfigBuilder::default()
            .host(host)
            .port(port)
            .build()
            .expect("Valid RelayConfig"))
    }

    /// The bind address in "host:port" form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
