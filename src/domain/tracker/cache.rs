//! Per-document occurrence cache
//!
//! Maps a document identity to the latest extracted occurrence sequence.
//! Entries are filled lazily on `get`, patched or dropped on edit, and
//! removed on document close. Ineligible documents are never cached, which
//! bounds the cache to tracked document types.

use std::collections::HashMap;

use tracing::debug;

use super::edit::TextEdit;
use crate::domain::markers::{extract, Occurrence};

#[derive(Debug, Default)]
pub struct TagCache {
    entries: HashMap<String, Vec<Occurrence>>,
}

impl TagCache {
    pub fn new() -> Self {
        TagCache::default()
    }

    /// Return the cached occurrence sequence for `document_id`, extracting
    /// from `current_text` and storing the result on a miss. Ineligible
    /// documents always yield an empty sequence and are never stored.
    pub fn get(&mut self, document_id: &str, current_text: &str, eligible: bool) -> &[Occurrence] {
        if !eligible {
            return &[];
        }
        self.entries
            .entry(document_id.to_string())
            .or_insert_with(|| extract(current_text))
    }

    pub fn contains(&self, document_id: &str) -> bool {
        self.entries.contains_key(document_id)
    }

    /// Drop the cached entry; the next `get` forces a rescan.
    pub fn invalidate(&mut self, document_id: &str) {
        if self.entries.remove(document_id).is_some() {
            debug!(document_id, "cache entry invalidated");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Incrementally patch the cached sequence for a single edit.
    ///
    /// Occurrences ending at or before the edit are kept as-is, occurrences
    /// starting at or after the replaced range are shifted by the edit's
    /// byte delta, and occurrences overlapping the replaced range are
    /// dropped. The lines touched by the edit are then re-extracted from
    /// `new_text` (markers cannot contain CR/LF, so they never cross a line
    /// boundary) and spliced in, which keeps the patched sequence equal to
    /// a full rescan of the post-edit text.
    ///
    /// No-op when the document has no cached entry.
    pub fn apply_edit(&mut self, document_id: &str, edit: &TextEdit, new_text: &str) {
        let Some(occurrences) = self.entries.get_mut(document_id) else {
            return;
        };

        let delta = edit.delta();
        let old_end = edit.old_end();
        let mut patched: Vec<Occurrence> = occurrences
            .drain(..)
            .filter_map(|mut occ| {
                if occ.span.end <= edit.start {
                    Some(occ)
                } else if occ.span.start >= old_end {
                    occ.span.shift(delta);
                    Some(occ)
                } else {
                    None
                }
            })
            .collect();

        let (region_start, region_end) = edited_line_region(new_text, edit.start, edit.new_end());
        patched.retain(|occ| occ.span.end <= region_start || occ.span.start >= region_end);

        let mut fresh = extract(&new_text[region_start..region_end]);
        for occ in &mut fresh {
            occ.span.shift(region_start as i64);
        }

        let insert_at = patched
            .iter()
            .position(|occ| occ.span.start >= region_end)
            .unwrap_or(patched.len());
        patched.splice(insert_at..insert_at, fresh);

        *occurrences = patched;
    }
}

/// Byte range of the full lines of `text` touched by an edit spanning
/// `[from, to)` in post-edit coordinates. Bounds are clamped to the text
/// and to character boundaries so malformed input degrades to a larger
/// rescan instead of a panic.
fn edited_line_region(text: &str, from: usize, to: usize) -> (usize, usize) {
    let from = floor_boundary(text, from);
    let to = floor_boundary(text, to).max(from);
    let start = text[..from].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[to..].find('\n').map(|i| to + i).unwrap_or(text.len());
    (start, end)
}

fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
