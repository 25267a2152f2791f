//! The `serve` command: run the relay server.

use scrivano_error::ScrivanoResult;
use scrivano_models::{OpenAIClient, OpenAIConfig};
use scrivano_relay::{RelayConfig, RelayConfigBuilder};
use std::sync::Arc;
use tracing::info;

/// Build configuration and run the relay server until shutdown.
///
/// Environment settings are read first; CLI flags override them.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the server fails.
pub async fn handle_serve_command(host: Option<String>, port: Option<u16>) -> ScrivanoResult<()> {
    let env_config = RelayConfig::from_env()?;
    let config = RelayConfigBuilder::default()
        .host(host.unwrap_or_else(|| env_config.host().clone()))
        .port(port.unwrap_or(*env_config.port()))
        .build()
        .expect("Valid RelayConfig");

    let openai_config = OpenAIConfig::from_env()?;
    let backend = Arc::new(OpenAIClient::new(&openai_config));

    info!(addr = %config.bind_addr(), "Starting relay server");

    scrivano_relay::serve(&config, backend).await?;
    Ok(())
}
