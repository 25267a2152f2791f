//! Relay client: drives one streaming exchange against the relay server
//! and applies incoming text to a live document.

use crate::decode::StreamDecoder;
use crate::document::{Document, RangeError};
use crate::status::{Status, StatusIndicator};
use futures_util::StreamExt;
use scrivano_core::CompletionRequest;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, instrument};

/// Errors from a relay exchange.
#[derive(Debug, derive_more::Display)]
pub enum RelayError {
    /// HTTP/network error
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// The relay endpoint returned a failure status
    #[display("Relay error (status {})", _0)]
    Status(u16),

    /// The document rejected the edit
    #[display("Document edit failed: {}", _0)]
    Document(RangeError),
}

impl std::error::Error for RelayError {}

impl From<RangeError> for RelayError {
    fn from(err: RangeError) -> Self {
        RelayError::Document(err)
    }
}

/// Client for the relay endpoint.
///
/// One instance serves one editing surface; its status indicator is the
/// surface's feedback display.
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
    indicator: Arc<StatusIndicator>,
}

impl RelayClient {
    /// Creates a client for the relay at `base_url`.
    pub fn new(base_url: impl Into<String>, indicator: Arc<StatusIndicator>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            indicator,
        }
    }

    /// The status indicator for this surface.
    pub fn indicator(&self) -> &Arc<StatusIndicator> {
        &self.indicator
    }

    async fn post(
        &self,
        endpoint: &str,
        request: &CompletionRequest,
    ) -> Result<reqwest::Response, RelayError> {
        self.indicator.publish(Status::Waiting);

        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(url = %url, error = ?e, "Relay request failed");
                self.indicator.fail();
                RelayError::Http(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(url = %url, status = %status, "Relay returned failure status");
            self.indicator.fail();
            return Err(RelayError::Status(status.as_u16()));
        }

        Ok(response)
    }

    /// Stream a completion into the document at its cursor.
    ///
    /// Each received fragment is decoded and inserted in arrival order,
    /// advancing the cursor so fragments append after one another. When
    /// `cancel` fires (hosting surface torn down), the loop stops without
    /// touching the document again and the status sink is detached.
    ///
    /// # Errors
    ///
    /// Returns an error on a failure response or a mid-stream read error;
    /// partial text already inserted is left in place.
    #[instrument(skip_all, fields(model = %request.options().model()))]
    pub async fn stream_into<D: Document>(
        &self,
        document: &mut D,
        endpoint: &str,
        request: &CompletionRequest,
        cancel: &CancellationToken,
    ) -> Result<(), RelayError> {
        let response = self.post(endpoint, request).await?;
        self.indicator.publish(Status::Receiving);

        let mut body = response.bytes_stream();
        let mut decoder = StreamDecoder::new();

        loop {
            let chunk = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Hosting surface torn down, abandoning stream");
                    self.indicator.detach();
                    return Ok(());
                }
                chunk = body.next() => chunk,
            };

            match chunk {
                Some(Ok(bytes)) => {
                    let text = decoder.push(&bytes);
                    if !text.is_empty() {
                        document.insert_at_cursor(&text);
                    }
                }
                Some(Err(e)) => {
                    error!(error = ?e, "Stream read failed");
                    self.indicator.fail();
                    return Err(RelayError::Http(format!("Stream read failed: {}", e)));
                }
                None => {
                    let tail = decoder.finish();
                    if !tail.is_empty() {
                        document.insert_at_cursor(&tail);
                    }
                    self.indicator.complete();
                    return Ok(());
                }
            }
        }
    }

    /// Rewrite the current selection with the full response text.
    ///
    /// The selection range is captured before the request and applied
    /// unchanged after the round trip; concurrent edits that invalidate
    /// it surface as a [`RelayError::Document`] rather than a misplaced
    /// write.
    ///
    /// # Errors
    ///
    /// Returns an error on a failure response, a body read error, or a
    /// stale selection range.
    #[instrument(skip_all, fields(model = %request.options().model()))]
    pub async fn replace_selection<D: Document>(
        &self,
        document: &mut D,
        endpoint: &str,
        request: &CompletionRequest,
    ) -> Result<(), RelayError> {
        let (start, end) = document.selection();

        let response = self.post(endpoint, request).await?;
        self.indicator.publish(Status::Receiving);

        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            self.indicator.fail();
            RelayError::Http(format!("Body read failed: {}", e))
        })?;

        self.indicator.publish(Status::Writing);

        if let Err(e) = document.replace_range(start, end, &text) {
            error!(error = %e, "Captured selection no longer valid");
            self.indicator.fail();
            return Err(e.into());
        }

        self.indicator.complete();
        Ok(())
    }
}
