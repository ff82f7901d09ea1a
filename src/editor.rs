//! # Editor Helpers
//!
//! Selection-based markdown insertion for the article editor. Operations
//! work on a text buffer plus a `[start, end)` selection measured in
//! characters, so multi-byte text behaves the same as ASCII. Neither
//! operation validates the resulting buffer as well-formed markup;
//! overlapping repeated operations can nest badly and avoiding that is the
//! caller's responsibility.

/// A half-open selection range in character indices. `start == end` is a
/// caret (empty selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(position: usize) -> Self {
        Self { start: position, end: position }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Token pairs that wrap an existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    Bold,
    Italic,
    Underline,
    Quote,
    Code,
    Link,
}

impl WrapKind {
    fn tokens(&self) -> (&'static str, &'static str) {
        match self {
            WrapKind::Bold => ("**", "**"),
            WrapKind::Italic => ("*", "*"),
            WrapKind::Underline => ("<u>", "</u>"),
            WrapKind::Quote => ("> ", ""),
            WrapKind::Code => ("`", "`"),
            // The selection becomes the link text; the URL stays a
            // placeholder for the user to fill in.
            WrapKind::Link => ("[", "](url)"),
        }
    }
}

/// Fixed snippets inserted at the cursor, ignoring any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertKind {
    Heading,
    BulletList,
    NumberedList,
    Image,
}

impl InsertKind {
    fn template(&self) -> &'static str {
        match self {
            InsertKind::Heading => "## Heading",
            InsertKind::BulletList => "- item",
            InsertKind::NumberedList => "1. item",
            InsertKind::Image => "![alt](image-url)",
        }
    }
}

/// The editor's text buffer with its current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    pub text: String,
    pub selection: Selection,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>, selection: Selection) -> Self {
        Self { text: text.into(), selection }
    }

    /// Wrap the selected span with the token pair for `kind`, leaving the
    /// whole wrapped span (tokens included) selected. No-op when the
    /// selection is empty.
    pub fn wrap_selection(&mut self, kind: WrapKind) {
        if self.selection.is_empty() {
            return;
        }
        let (prefix, suffix) = kind.tokens();
        let start_byte = self.byte_offset(self.selection.start);
        let end_byte = self.byte_offset(self.selection.end);

        // Suffix first so the start offset stays valid.
        self.text.insert_str(end_byte, suffix);
        self.text.insert_str(start_byte, prefix);

        self.selection.end += prefix.chars().count() + suffix.chars().count();
    }

    /// Insert the template snippet for `kind` at the cursor (the selection
    /// start) and collapse the selection to just after the insertion.
    pub fn insert_at_cursor(&mut self, kind: InsertKind) {
        let snippet = kind.template();
        let cursor = self.selection.start.min(self.char_len());
        let at = self.byte_offset(cursor);

        self.text.insert_str(at, snippet);
        self.selection = Selection::caret(cursor + snippet.chars().count());
    }

    /// The selected substring, empty for a caret.
    pub fn selected_text(&self) -> &str {
        let start = self.byte_offset(self.selection.start);
        let end = self.byte_offset(self.selection.end.max(self.selection.start));
        &self.text[start..end]
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of a character index, clamped to the end of the buffer.
    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }
}
