//! Edit-reaction policy
//!
//! The per-document tracking state machine and the auto-close convenience
//! evaluated on text mutation events.

use super::edit::TextEdit;
use crate::domain::markers::grammar::{opening_at_end_regex, CLOSING_PREFIX};

/// Tracking lifecycle of one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    #[default]
    Untracked,
    TrackedValid,
    TrackedStale,
}

impl TrackState {
    /// Transition taken when a query (re)extracts the document
    pub fn on_extracted(self) -> TrackState {
        TrackState::TrackedValid
    }

    /// Transition taken on a text mutation event
    pub fn on_edit(self) -> TrackState {
        match self {
            TrackState::Untracked => TrackState::Untracked,
            _ => TrackState::TrackedStale,
        }
    }
}

/// Directive to insert a closing marker produced by the auto-close policy.
/// Offsets are byte offsets into the post-edit document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoClose {
    /// Where to insert the closing marker (right after the typed space)
    pub insert_offset: usize,

    /// The closing marker text, e.g. `[~name]`
    pub text: String,

    /// Where the cursor should land: between the space and the inserted
    /// closing marker
    pub cursor_offset: usize,
}

/// Evaluate the auto-close convenience for one edit.
///
/// Fires only when the edit is a single space inserted (nothing replaced)
/// immediately after a complete opening marker, and the line does not
/// already contain a closing marker for the same name. The marker name is
/// the trimmed raw name, not the display-sanitized one.
///
/// `line_text` is the post-edit text of the line containing the insertion;
/// `column` is the byte offset of the insertion point within that line.
pub fn evaluate_auto_close(edit: &TextEdit, line_text: &str, column: usize) -> Option<AutoClose> {
    if edit.inserted != " " || edit.replaced_len != 0 {
        return None;
    }

    let before = line_text.get(..column)?;
    let caps = opening_at_end_regex().captures(before)?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }

    let closer = format!("{}{}]", CLOSING_PREFIX, name);
    if line_text.contains(&closer) {
        return None;
    }

    Some(AutoClose {
        insert_offset: edit.start + 1,
        text: closer,
        cursor_offset: edit.start + 1,
    })
}
