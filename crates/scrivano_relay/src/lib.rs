//! Streaming completion relay server.
//!
//! Bridges one client HTTP request to one upstream streaming completion
//! call, forwarding each fragment as soon as it arrives.

mod api;
mod config;
mod serve;

pub use api::{ApiState, create_router};
pub use config::{RelayConfig, RelayConfigBuilder};
pub use serve::serve;
