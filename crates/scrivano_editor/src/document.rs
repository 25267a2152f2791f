//! Document model seam.
//!
//! The hosting editor exposes its document through this trait; the relay
//! client only ever inserts at the cursor or replaces a captured range.

/// Editing operations the relay client performs on a host document.
pub trait Document: Send {
    /// Current cursor position, as a byte offset into the text.
    fn cursor(&self) -> usize;

    /// Insert text at the cursor and advance the cursor past it, so
    /// consecutive insertions append in order.
    fn insert_at_cursor(&mut self, text: &str);

    /// The current selection as a half-open byte range.
    fn selection(&self) -> (usize, usize);

    /// Replace the given range with new text.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError`] if the range does not fall on character
    /// boundaries within the document, for example after concurrent edits
    /// invalidated a captured selection.
    fn replace_range(&mut self, start: usize, end: usize, text: &str) -> Result<(), RangeError>;
}

/// A captured range no longer fits the document.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Range {}..{} is not valid for a document of length {}", start, end, len)]
pub struct RangeError {
    /// Range start byte offset
    pub start: usize,
    /// Range end byte offset
    pub end: usize,
    /// Document length at the time of the attempt
    pub len: usize,
}

impl std::error::Error for RangeError {}

/// In-memory plain-text document.
///
/// Backs the editor actions in tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct TextDocument {
    text: String,
    cursor: usize,
    selection: (usize, usize),
}

impl TextDocument {
    /// Create an empty document with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            selection: (cursor, cursor),
        }
    }

    /// The document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Move the cursor to a byte offset.
    ///
    /// Out-of-range or mid-character offsets are clamped back to the
    /// nearest valid boundary at or before the target.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.clamp_to_boundary(offset);
    }

    /// Select a half-open byte range, clamped to character boundaries.
    pub fn select(&mut self, start: usize, end: usize) {
        let start = self.clamp_to_boundary(start);
        let end = self.clamp_to_boundary(end.max(start));
        self.selection = (start, end);
    }

    /// The currently selected text.
    pub fn selected_text(&self) -> &str {
        let (start, end) = self.selection;
        &self.text[start..end]
    }

    fn clamp_to_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

impl Document for TextDocument {
    fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_at_cursor(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) -> Result<(), RangeError> {
        let valid = start <= end
            && end <= self.text.len()
            && self.text.is_char_boundary(start)
            && self.text.is_char_boundary(end);
        if !valid {
            return Err(RangeError {
                start,
                end,
                len: self.text.len(),
            });
        }

        self.text.replace_range(start..end, text);
        self.cursor = start + text.len();
        self.selection = (start, start + text.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertions_append_in_order() {
        let mut document = TextDocument::new();
        document.insert_at_cursor("Hel");
        document.insert_at_cursor("lo, ");
        document.insert_at_cursor("world");
        assert_eq!(document.text(), "Hello, world");
    }

    #[test]
    fn insertion_at_a_mid_document_cursor_preserves_the_tail() {
        let mut document = TextDocument::with_text("ab");
        document.set_cursor(1);
        document.insert_at_cursor("X");
        document.insert_at_cursor("Y");
        assert_eq!(document.text(), "aXYb");
    }

    #[test]
    fn replace_range_swaps_exactly_the_selection() {
        let mut document = TextDocument::with_text("keep DELETE keep");
        document.select(5, 11);
        assert_eq!(document.selected_text(), "DELETE");

        let (start, end) = document.selection();
        document
            .replace_range(start, end, "replaced")
            .expect("valid range");
        assert_eq!(document.text(), "keep replaced keep");
    }

    #[test]
    fn replace_range_rejects_a_stale_range() {
        let mut document = TextDocument::with_text("short");
        let err = document.replace_range(2, 40, "x").unwrap_err();
        assert_eq!(err.len, 5);
        assert_eq!(document.text(), "short");
    }

    #[test]
    fn replace_range_rejects_mid_character_offsets() {
        let mut document = TextDocument::with_text("héllo");
        // 'é' occupies bytes 1..3; offset 2 splits it.
        assert!(document.replace_range(0, 2, "x").is_err());
    }
}
