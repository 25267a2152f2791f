//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Roles are shared between the chat endpoint and the relay forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}
