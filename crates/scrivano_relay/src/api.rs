//! HTTP API for the streaming completion relay.
//!
//! One POST endpoint bridges a client request to one upstream streaming
//! call: each upstream text delta is written to the response body as its
//! own chunk, in receipt order, with no full-body buffering.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header},
    response::Response,
    routing::post,
};
use bytes::Bytes;
use futures_util::StreamExt;
use scrivano_core::{CompletionRequest, Conversation, ModelFamily};
use scrivano_models::CompletionStream;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// System instruction sent with every chat-routed relay request.
const SYSTEM_INSTRUCTION: &str = "You are an expert in content editing and an assistant to a \
    user writing content for their website. Please return all answers without using first, \
    second, or third person voice.";

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Upstream streaming backend.
    pub backend: Arc<dyn CompletionStream>,
}

/// Creates the API router.
pub fn create_router(backend: Arc<dyn CompletionStream>) -> Router {
    let state = ApiState { backend };

    Router::new()
        .route("/api/completion", post(completion))
        .with_state(state)
}

/// Relay one generation request to the upstream provider.
///
/// Validation failures return 422 before any upstream call. A failure to
/// establish the upstream stream returns 502. Once streaming has begun,
/// an upstream error terminates the response body, which the client
/// observes as an abnormal end.
#[instrument(skip(state, request), fields(model = %request.options().model()))]
async fn completion(
    State(state): State<ApiState>,
    Json(request): Json<CompletionRequest>,
) -> Result<Response, (StatusCode, String)> {
    if let Err(e) = request.validate() {
        debug!(error = %e, "Rejected relay request");
        return Err((StatusCode::UNPROCESSABLE_ENTITY, e.message));
    }

    let options = request.options().clone();
    let family = ModelFamily::of(options.model());

    info!(family = %family, "Opening upstream stream");

    let upstream = match family {
        ModelFamily::Chat => {
            let conversation = Conversation::seed(SYSTEM_INSTRUCTION, request.trimmed_prompt());
            state.backend.stream_chat(conversation, options).await
        }
        ModelFamily::Completion => {
            state
                .backend
                .stream_completion(request.trimmed_prompt().to_string(), options)
                .await
        }
    };

    let deltas = upstream.map_err(|e| {
        error!(error = %e, "Failed to establish upstream stream");
        (StatusCode::BAD_GATEWAY, e.to_string())
    })?;

    // One upstream fragment becomes one body chunk; order is preserved and
    // nothing is batched.
    let body = Body::from_stream(deltas.map(|delta| delta.map(Bytes::from)));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(body)
        .map_err(|e| {
            error!(error = %e, "Failed to build streaming response");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(response)
}
