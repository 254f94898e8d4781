//! In-memory document buffer
//!
//! The concrete document accessor behind the engine's `TextDocument` port:
//! full text, line access, offset/position conversion, and edit
//! application. Conversions are total; out-of-range input is clamped.

use std::fs;
use std::path::Path;

use crate::domain::tracker::{Position, TextDocument, TextEdit};
use crate::error::{Result, TagtrackError};

#[derive(Debug, Clone)]
pub struct DocumentBuffer {
    id: String,
    language: String,
    text: String,
}

impl DocumentBuffer {
    pub fn new(id: impl Into<String>, language: impl Into<String>, text: impl Into<String>) -> Self {
        DocumentBuffer {
            id: id.into(),
            language: language.into(),
            text: text.into(),
        }
    }

    /// Load a document from disk. The document id is the path as given;
    /// the language is inferred from the file extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagtrackError::PathNotFound(path.to_path_buf())
            } else {
                TagtrackError::Io(e)
            }
        })?;
        Ok(DocumentBuffer::new(
            path.display().to_string(),
            language_for_path(path),
            text,
        ))
    }

    /// Apply one edit to the buffer, clamping the replaced range to the
    /// current text and to character boundaries.
    pub fn apply(&mut self, edit: &TextEdit) {
        let start = clamp_to_boundary(&self.text, edit.start);
        let end = clamp_to_boundary(&self.text, edit.old_end().max(start));
        self.text.replace_range(start..end, &edit.inserted);
    }

    /// Convenience for tests and interactive use: insert `text` at
    /// `offset` and return the edit that was applied.
    pub fn insert(&mut self, offset: usize, text: &str) -> TextEdit {
        let edit = TextEdit::insertion(offset, text);
        self.apply(&edit);
        edit
    }
}

/// Map a file extension to the language tag used for eligibility
pub fn language_for_path(path: &Path) -> String {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
    {
        Some(ext) if ext == "htm" || ext == "html" => "html".to_string(),
        Some(ext) => ext,
        None => "plaintext".to_string(),
    }
}

/// Largest char-boundary offset not exceeding `offset`
fn clamp_to_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

impl TextDocument for DocumentBuffer {
    fn id(&self) -> &str {
        &self.id
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_text(&self, line: usize) -> Option<&str> {
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    fn offset_at(&self, position: Position) -> usize {
        let mut consumed = 0;
        for (index, raw_line) in self.text.split('\n').enumerate() {
            if index == position.line {
                let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
                let column_byte = line
                    .char_indices()
                    .nth(position.column)
                    .map(|(byte, _)| byte)
                    .unwrap_or(line.len());
                return consumed + column_byte;
            }
            consumed += raw_line.len() + 1;
        }
        self.text.len()
    }

    fn position_at(&self, offset: usize) -> Position {
        let offset = clamp_to_boundary(&self.text, offset);
        let mut consumed = 0;
        for (index, raw_line) in self.text.split('\n').enumerate() {
            if offset <= consumed + raw_line.len() {
                let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
                let in_line = (offset - consumed).min(line.len());
                let column = line[..in_line].chars().count();
                return Position::new(index, column);
            }
            consumed += raw_line.len() + 1;
        }
        Position::new(self.line_count().saturating_sub(1), 0)
    }
}
