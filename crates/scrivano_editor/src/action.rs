//! Editor action catalog.
//!
//! The hosting editor's dropdown is a static list of actions resolved at
//! startup. Each action knows its label, how its result is applied to the
//! document, and how to build its prompt.

/// Editor actions exposed by the relay integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Action {
    /// Generate text from a typed prompt
    #[display("completion")]
    Completion,
    /// Rewrite the selection in a requested tone
    #[display("tone")]
    Tone,
    /// Summarize the selection
    #[display("summarize")]
    Summarize,
    /// Translate the selection into a requested language
    #[display("translate")]
    Translate,
    /// Reformat the selection as semantic HTML
    #[display("reformat_html")]
    ReformatHtml,
}

/// How an action's response is applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    /// Fragments are inserted at the cursor as they arrive
    StreamInsert,
    /// The full response replaces the captured selection
    ReplaceSelection,
}

impl Action {
    /// The dropdown label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Completion => "Text Completion",
            Action::Tone => "Adjust tone/voice",
            Action::Summarize => "Summarize",
            Action::Translate => "Translate",
            Action::ReformatHtml => "Reformat/correct HTML",
        }
    }

    /// How this action applies its result.
    pub fn apply_mode(&self) -> ApplyMode {
        match self {
            Action::Completion => ApplyMode::StreamInsert,
            Action::Tone | Action::Summarize | Action::Translate | Action::ReformatHtml => {
                ApplyMode::ReplaceSelection
            }
        }
    }

    /// Build the prompt sent to the relay.
    ///
    /// `input` is the typed prompt for [`Action::Completion`] and the
    /// selected text for the rewrite actions. `argument` carries the tone
    /// or target language where the action takes one.
    pub fn build_prompt(&self, input: &str, argument: Option<&str>) -> String {
        match self {
            Action::Completion => input.to_string(),
            Action::Tone => format!(
                "Change the tone of the following text to be {} using the same language as \
                 the following text:\r\n{}",
                argument.unwrap_or_default(),
                input
            ),
            Action::Summarize => format!(
                "Summarize the following text into something more compact using the same \
                 language as the following text: {}",
                input
            ),
            Action::Translate => format!(
                "Translate the following text into {} using the same formatting as the \
                 following text: {}",
                argument.unwrap_or_default(),
                input
            ),
            Action::ReformatHtml => format!(
                "Please fix this text to be marked up with semantic HTML using only lists, \
                 headers, or paragraph tags: {}",
                input
            ),
        }
    }
}

/// One dropdown entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionItem {
    /// Display label
    pub label: &'static str,
    /// The action to run
    pub action: Action,
    /// Whether the entry is executable
    pub enabled: bool,
}

/// The static action catalog, resolved once at startup.
///
/// `enabled` reflects the operator's completion-feature flag and applies
/// to every entry.
pub fn action_catalog(enabled: bool) -> Vec<ActionItem> {
    [
        Action::Completion,
        Action::Tone,
        Action::Summarize,
        Action::Translate,
        Action::ReformatHtml,
    ]
    .into_iter()
    .map(|action| ActionItem {
        label: action.label(),
        action,
        enabled,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_action_once() {
        let catalog = action_catalog(true);
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|item| item.enabled));

        let labels: Vec<&str> = catalog.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec![
                "Text Completion",
                "Adjust tone/voice",
                "Summarize",
                "Translate",
                "Reformat/correct HTML",
            ]
        );
    }

    #[test]
    fn disabled_catalog_keeps_entries_but_not_executable() {
        let catalog = action_catalog(false);
        assert!(catalog.iter().all(|item| !item.enabled));
    }

    #[test]
    fn completion_streams_and_rewrites_replace() {
        assert_eq!(Action::Completion.apply_mode(), ApplyMode::StreamInsert);
        assert_eq!(Action::Tone.apply_mode(), ApplyMode::ReplaceSelection);
        assert_eq!(Action::Summarize.apply_mode(), ApplyMode::ReplaceSelection);
        assert_eq!(Action::ReformatHtml.apply_mode(), ApplyMode::ReplaceSelection);
    }

    #[test]
    fn tone_prompt_embeds_the_requested_tone_and_selection() {
        let prompt = Action::Tone.build_prompt("the original text", Some("friendly"));
        assert!(prompt.contains("friendly"));
        assert!(prompt.ends_with("the original text"));
    }

    #[test]
    fn completion_prompt_is_passed_through() {
        assert_eq!(Action::Completion.build_prompt("Say hi", None), "Say hi");
    }
}
