//! Relay server lifecycle.

use crate::api::create_router;
use crate::config::RelayConfig;
use scrivano_error::{HttpError, ScrivanoResult};
use scrivano_models::CompletionStream;
use std::sync::Arc;
use tracing::{info, instrument};

/// Bind and run the relay server until shutdown.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
#[instrument(skip(backend))]
pub async fn serve(config: &RelayConfig, backend: Arc<dyn CompletionStream>) -> ScrivanoResult<()> {
    let router = create_router(backend);
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {addr}: {e}")))?;

    info!(addr = %addr, "Relay server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| HttpError::new(format!("Server error: {e}")))?;

    Ok(())
}
