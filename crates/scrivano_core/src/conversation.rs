//! Conversation history for multi-turn chat.
//!
//! The upstream chat endpoint is stateless per call, so the whole history
//! is resent each round trip. [`Conversation`] enforces the turn-taking
//! invariants by construction; [`ChatSession`] owns one conversation and
//! only advances it after a successful exchange.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// Ordered role-tagged message history.
///
/// The system entry, if present, is the sole first entry and is never
/// duplicated; each subsequent user entry is followed by exactly one
/// assistant entry after a successful exchange.
///
/// # Examples
///
/// ```
/// use scrivano_core::{Conversation, Role};
///
/// let mut conversation = Conversation::seed("S", "U1");
/// conversation.push_assistant("A1");
/// conversation.push_user("U2");
///
/// assert_eq!(conversation.messages().len(), 4);
/// assert_eq!(*conversation.messages()[0].role(), Role::System);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Conversation {
    /// Messages in turn order
    messages: Vec<Message>,
}

impl Conversation {
    /// Seed a conversation with one system entry and one user entry.
    ///
    /// Both entries are trimmed. This is the only way a system entry
    /// enters the history.
    pub fn seed(system: impl AsRef<str>, user: impl AsRef<str>) -> Self {
        Self {
            messages: vec![
                Message::system(system.as_ref().trim()),
                Message::user(user.as_ref().trim()),
            ],
        }
    }

    /// Append one user entry, trimmed.
    pub fn push_user(&mut self, content: impl AsRef<str>) {
        self.messages.push(Message::user(content.as_ref().trim()));
    }

    /// Append one assistant entry, trimmed.
    pub fn push_assistant(&mut self, content: impl AsRef<str>) {
        self.messages
            .push(Message::assistant(content.as_ref().trim()));
    }

    /// The content of the most recent assistant entry, if any.
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| *m.role() == Role::Assistant)
            .map(|m| m.content().as_str())
    }
}

/// One form session's chat state.
///
/// Owns the conversation with caller-controlled lifetime. A turn is a
/// two-step exchange: [`ChatSession::prepare`] produces the outbound
/// history (without committing it), and [`ChatSession::record`] stores it
/// together with the assistant reply once the exchange succeeded. A failed
/// exchange therefore leaves the stored history untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Operator-supplied system instruction, applied once at seed time
    system: String,
    /// Committed history, absent until the first successful turn
    history: Option<Conversation>,
}

impl ChatSession {
    /// Create a session with the given system instruction.
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            history: None,
        }
    }

    /// The committed history, if any turn has completed.
    pub fn history(&self) -> Option<&Conversation> {
        self.history.as_ref()
    }

    /// Build the outbound history for a turn with the given user text.
    ///
    /// First turn: system entry plus the user entry. Later turns: the
    /// committed history plus one user entry; the system entry is never
    /// re-added.
    pub fn prepare(&self, text: &str) -> Conversation {
        match &self.history {
            Some(history) => {
                let mut outbound = history.clone();
                outbound.push_user(text);
                outbound
            }
            None => Conversation::seed(&self.system, text),
        }
    }

    /// Commit a successful turn: the outbound history plus the reply.
    pub fn record(&mut self, mut sent: Conversation, reply: &str) {
        sent.push_assistant(reply);
        self.history = Some(sent);
    }

    /// Discard the committed history, keeping the system instruction.
    pub fn reset(&mut self) {
        self.history = None;
    }
}
