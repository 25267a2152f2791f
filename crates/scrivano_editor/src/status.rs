//! Network status projector for user feedback.
//!
//! Holds a single current status value, overwritten on every publish.
//! Feedback is advisory, not an audit log: if several publishes land
//! before a reader looks, only the latest value is visible.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::debug;

/// Network activity states for one editing surface.
///
/// The `Display` strings are the user-facing status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Status {
    /// No relay in flight
    #[display("Idle")]
    Idle,
    /// Request sent, response not yet received
    #[display("Waiting for response...")]
    Waiting,
    /// Response stream open, fragments arriving
    #[display("Receiving response...")]
    Receiving,
    /// Full response received, applying it to the document
    #[display("Writing response...")]
    Writing,
    /// The relay failed
    #[display("An error occurred. Check the logs for details.")]
    Error,
    /// The relay finished normally
    #[display("Request completed.")]
    Completed,
}

/// A rendering sink notified on every publish.
pub trait StatusSink: Send + Sync {
    /// Render the new status.
    fn display(&self, status: Status);
}

/// Delay before auto-idling after [`Status::Error`].
pub const ERROR_IDLE_DELAY: Duration = Duration::from_millis(3000);

/// Delay before auto-idling after [`Status::Completed`].
pub const COMPLETED_IDLE_DELAY: Duration = Duration::from_millis(1200);

struct IndicatorState {
    current: Status,
    sink: Option<Arc<dyn StatusSink>>,
}

/// Single-writer-many-reader status projector.
///
/// `publish` overwrites the current value and synchronously notifies the
/// attached sink. After a terminal state, `fail` and `complete` schedule
/// an automatic reset to [`Status::Idle`].
pub struct StatusIndicator {
    state: Mutex<IndicatorState>,
    error_idle_delay: Duration,
    completed_idle_delay: Duration,
}

impl StatusIndicator {
    /// Create an indicator with the standard auto-idle delays.
    pub fn new() -> Arc<Self> {
        Self::with_delays(ERROR_IDLE_DELAY, COMPLETED_IDLE_DELAY)
    }

    /// Create an indicator with custom auto-idle delays.
    pub fn with_delays(error_idle_delay: Duration, completed_idle_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(IndicatorState {
                current: Status::Idle,
                sink: None,
            }),
            error_idle_delay,
            completed_idle_delay,
        })
    }

    /// Attach the rendering sink, replacing any previous one.
    pub fn attach(&self, sink: Arc<dyn StatusSink>) {
        let mut state = self.state.lock().expect("status lock");
        state.sink = Some(sink);
    }

    /// Detach the rendering sink; later publishes update the value but
    /// notify nobody. Called when the hosting surface is torn down.
    pub fn detach(&self) {
        let mut state = self.state.lock().expect("status lock");
        state.sink = None;
    }

    /// The current status value.
    pub fn current(&self) -> Status {
        self.state.lock().expect("status lock").current
    }

    /// Overwrite the current value and synchronously notify the sink.
    pub fn publish(&self, status: Status) {
        let sink = {
            let mut state = self.state.lock().expect("status lock");
            state.current = status;
            state.sink.clone()
        };

        debug!(status = %status, "Status published");

        if let Some(sink) = sink {
            sink.display(status);
        }
    }

    /// Publish [`Status::Error`] and auto-idle after the error delay.
    pub fn fail(self: &Arc<Self>) {
        self.publish(Status::Error);
        self.idle_after(self.error_idle_delay);
    }

    /// Publish [`Status::Completed`] and auto-idle after the completion delay.
    pub fn complete(self: &Arc<Self>) {
        self.publish(Status::Completed);
        self.idle_after(self.completed_idle_delay);
    }

    fn idle_after(self: &Arc<Self>, delay: Duration) {
        let this = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            this.publish(Status::Idle);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every displayed status.
    pub struct RecordingSink {
        seen: Mutex<Vec<Status>>,
    }

    impl RecordingSink {
        pub fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }

        pub fn seen(&self) -> Vec<Status> {
            self.seen.lock().expect("seen lock").clone()
        }
    }

    impl StatusSink for RecordingSink {
        fn display(&self, status: Status) {
            self.seen.lock().expect("seen lock").push(status);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completed_auto_idles_after_the_short_delay() {
        let indicator = StatusIndicator::new();
        let sink = RecordingSink::new();
        indicator.attach(sink.clone());

        indicator.complete();
        assert_eq!(indicator.current(), Status::Completed);

        tokio::time::sleep(COMPLETED_IDLE_DELAY + Duration::from_millis(1)).await;
        tokio::task::yield_now().await;

        assert_eq!(indicator.current(), Status::Idle);
        assert_eq!(sink.seen(), vec![Status::Completed, Status::Idle]);
    }

    #[tokio::test(start_paused = true)]
    async fn error_auto_idles_after_the_long_delay() {
        let indicator = StatusIndicator::new();

        indicator.fail();
        assert_eq!(indicator.current(), Status::Error);

        tokio::time::sleep(ERROR_IDLE_DELAY - Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert_eq!(indicator.current(), Status::Error);

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(indicator.current(), Status::Idle);
    }

    #[test]
    fn publish_is_last_writer_wins() {
        let indicator = StatusIndicator::with_delays(Duration::ZERO, Duration::ZERO);
        indicator.publish(Status::Waiting);
        indicator.publish(Status::Receiving);
        assert_eq!(indicator.current(), Status::Receiving);
    }

    #[tokio::test]
    async fn detached_sink_is_not_notified() {
        let indicator = StatusIndicator::new();
        let sink = RecordingSink::new();
        indicator.attach(sink.clone());

        indicator.publish(Status::Waiting);
        indicator.detach();
        indicator.publish(Status::Receiving);

        assert_eq!(sink.seen(), vec![Status::Waiting]);
        // The value still tracks publishes after detach.
        assert_eq!(indicator.current(), Status::Receiving);
    }

    #[test]
    fn status_strings_match_the_ui_wording() {
        assert_eq!(Status::Idle.to_string(), "Idle");
        assert_eq!(Status::Waiting.to_string(), "Waiting for response...");
        assert_eq!(Status::Receiving.to_string(), "Receiving response...");
        assert_eq!(Status::Writing.to_string(), "Writing response...");
        assert_eq!(Status::Completed.to_string(), "Request completed.");
        assert_eq!(
            Status::Error.to_string(),
            "An error occurred. Check the logs for details."
        );
    }
}
