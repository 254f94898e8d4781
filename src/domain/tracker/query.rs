//! Positional queries over lines and occurrence sequences
//!
//! Two tiers: a cheap line-scoped heuristic meant to run on every cursor
//! move, and precise span containment for highlighting decisions.

use crate::domain::markers::grammar::{CLOSING_PREFIX, OPENING_PREFIX, QUERY_WINDOW};
use crate::domain::markers::Occurrence;

/// Heuristic: is the character position `column` of `line` inside a marker
/// that starts with `prefix`?
///
/// Only a window of `QUERY_WINDOW` characters on either side of the cursor
/// is inspected; the cursor counts as inside from the prefix start through
/// one position past the nearest following `]`. Positions near the window
/// edges can miss (false negative), which is the accepted trade for
/// bounded per-keystroke cost. Out-of-range columns return false.
pub fn is_inside_marker_prefix(line: &str, column: usize, prefix: &str) -> bool {
    let chars: Vec<char> = line.chars().collect();
    if column > chars.len() {
        return false;
    }
    let prefix_chars: Vec<char> = prefix.chars().collect();
    if prefix_chars.is_empty() {
        return false;
    }

    let window_start = column.saturating_sub(QUERY_WINDOW);
    let window_end = (column + QUERY_WINDOW).min(chars.len());
    let window = &chars[window_start..window_end];
    let cursor = column - window_start;

    for start in 0..window.len().saturating_sub(prefix_chars.len() - 1) {
        if window[start..start + prefix_chars.len()] != prefix_chars[..] {
            continue;
        }
        if let Some(rel) = window[start..].iter().position(|&c| c == ']') {
            let close = start + rel;
            if cursor >= start && cursor <= close + 1 {
                return true;
            }
        }
    }
    false
}

/// Heuristic over both marker kinds
pub fn is_inside_marker(line: &str, column: usize) -> bool {
    is_inside_marker_prefix(line, column, OPENING_PREFIX)
        || is_inside_marker_prefix(line, column, CLOSING_PREFIX)
}

/// The occurrence whose span contains the byte `offset`, if any
pub fn find_containing(occurrences: &[Occurrence], offset: usize) -> Option<&Occurrence> {
    occurrences.iter().find(|occ| occ.span.contains(offset))
}
