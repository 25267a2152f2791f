//! Model catalog: endpoint families and token ceilings.

use serde::{Deserialize, Serialize};

/// Which upstream endpoint a model identifier is served by.
///
/// The chat endpoint covers the gpt families; everything else goes to the
/// legacy completion endpoint. The family is a pure function of the
/// identifier string.
///
/// # Examples
///
/// ```
/// use scrivano_core::ModelFamily;
///
/// assert_eq!(ModelFamily::of("gpt-3.5-turbo"), ModelFamily::Chat);
/// assert_eq!(ModelFamily::of("text-davinci-003"), ModelFamily::Completion);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Chat completion endpoint, message-based
    #[display("chat")]
    Chat,
    /// Legacy completion endpoint, raw prompt
    #[display("completion")]
    Completion,
}

impl ModelFamily {
    /// Determine the family for a model identifier.
    pub fn of(model: &str) -> Self {
        if model.contains("gpt") {
            ModelFamily::Chat
        } else {
            ModelFamily::Completion
        }
    }
}

/// Maximum combined prompt+response token budget for a model identifier.
///
/// Returns `None` for identifiers with no known ceiling; such requests are
/// passed through and left to the provider to police.
pub fn token_ceiling(model: &str) -> Option<u32> {
    if model.starts_with("gpt-4-32k") {
        Some(32768)
    } else if model.starts_with("gpt-4") {
        Some(8192)
    } else if model.starts_with("gpt-3.5-turbo-16k") {
        Some(16384)
    } else if model.starts_with("gpt-3.5-turbo") {
        Some(4096)
    } else if model.contains("davinci") {
        Some(4097)
    } else if model.contains("curie") || model.contains("babbage") || model.contains("ada") {
        Some(2049)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_routes_gpt_models_to_chat() {
        assert_eq!(ModelFamily::of("gpt-4"), ModelFamily::Chat);
        assert_eq!(ModelFamily::of("gpt-3.5-turbo-0301"), ModelFamily::Chat);
        assert_eq!(ModelFamily::of("text-davinci-003"), ModelFamily::Completion);
        assert_eq!(ModelFamily::of("text-curie-001"), ModelFamily::Completion);
    }

    #[test]
    fn ceilings_match_the_model_table() {
        assert_eq!(token_ceiling("gpt-4"), Some(8192));
        assert_eq!(token_ceiling("gpt-4-0314"), Some(8192));
        assert_eq!(token_ceiling("gpt-4-32k"), Some(32768));
        assert_eq!(token_ceiling("gpt-3.5-turbo"), Some(4096));
        assert_eq!(token_ceiling("gpt-3.5-turbo-0301"), Some(4096));
        assert_eq!(token_ceiling("gpt-3.5-turbo-16k"), Some(16384));
        assert_eq!(token_ceiling("text-davinci-003"), Some(4097));
        assert_eq!(token_ceiling("text-curie-001"), Some(2049));
        assert_eq!(token_ceiling("text-babbage-001"), Some(2049));
        assert_eq!(token_ceiling("text-ada-001"), Some(2049));
        assert_eq!(token_ceiling("mystery-model"), None);
    }
}
