//! Tracker session
//!
//! Owns all mutable engine state for one host session: the occurrence
//! cache, per-document tracking states, the suggestion-suppression flag
//! and its debouncer. Constructed explicitly, passed by reference to
//! whatever needs it, torn down explicitly.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use super::cache::TagCache;
use super::debounce::Debouncer;
use super::edit::TextEdit;
use super::policy::{evaluate_auto_close, AutoClose, TrackState};
use super::query;
use crate::domain::markers::{counterparts, MarkerStatistics, Occurrence};

/// Line/column position in a document. `column` counts characters within
/// the line, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Document accessor the engine consumes. Implementations must be total:
/// out-of-range lines yield `None`, out-of-range offsets and positions are
/// clamped to the nearest valid value.
pub trait TextDocument {
    /// Stable document identity, e.g. a canonical path or URI string
    fn id(&self) -> &str;

    /// Language tag used for eligibility checks, e.g. "html"
    fn language(&self) -> &str;

    fn text(&self) -> &str;

    fn line_count(&self) -> usize;

    /// Text of one line, without its terminator
    fn line_text(&self, line: usize) -> Option<&str>;

    /// Byte offset for a position (clamped)
    fn offset_at(&self, position: Position) -> usize;

    /// Position for a byte offset (clamped)
    fn position_at(&self, offset: usize) -> Position;
}

/// At most one active occurrence plus its counterpart set; supplied to the
/// highlighting consumer, which owns any persistent selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSelection {
    pub active: Occurrence,
    pub counterparts: Vec<Occurrence>,
}

/// Host-facing toggle for editor suggestion suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSwitch {
    Suppress,
    Restore,
}

/// Session construction knobs, normally sourced from the tracker config
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Language tags of documents the engine tracks
    pub languages: Vec<String>,

    /// Whether the auto-close convenience is evaluated on edits
    pub auto_close: bool,

    /// Quiet period for the suggestion-state debouncer
    pub debounce: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            languages: vec!["html".to_string()],
            auto_close: true,
            debounce: Duration::from_millis(150),
        }
    }
}

pub struct TrackerSession {
    cache: TagCache,
    states: HashMap<String, TrackState>,
    debounce: Debouncer,
    languages: Vec<String>,
    auto_close: bool,
    inside_marker: bool,
}

impl TrackerSession {
    pub fn new(options: SessionOptions) -> Self {
        TrackerSession {
            cache: TagCache::new(),
            states: HashMap::new(),
            debounce: Debouncer::new(options.debounce),
            languages: options.languages,
            auto_close: options.auto_close,
            inside_marker: false,
        }
    }

    pub fn is_eligible(&self, document: &dyn TextDocument) -> bool {
        self.languages.iter().any(|l| l == document.language())
    }

    /// Current occurrence sequence for a document. Extracts lazily and
    /// caches; ineligible documents yield an empty sequence.
    pub fn occurrences(&mut self, document: &dyn TextDocument) -> &[Occurrence] {
        if !self.is_eligible(document) {
            return &[];
        }
        let state = self.states.entry(document.id().to_string()).or_default();
        *state = state.on_extracted();
        self.cache.get(document.id(), document.text(), true)
    }

    /// Cheap line-scoped heuristic for "is the cursor in a marker". Total:
    /// out-of-range positions and ineligible documents yield false.
    pub fn is_inside_marker(&self, document: &dyn TextDocument, position: Position) -> bool {
        if !self.is_eligible(document) {
            return false;
        }
        match document.line_text(position.line) {
            Some(line) => query::is_inside_marker(line, position.column),
            None => {
                debug!(line = position.line, "marker query past end of document");
                false
            }
        }
    }

    /// Precise lookup of the occurrence spanning `position`, if any
    pub fn find_occurrence_at(
        &mut self,
        document: &dyn TextDocument,
        position: Position,
    ) -> Option<Occurrence> {
        let offset = document.offset_at(position);
        query::find_containing(self.occurrences(document), offset).cloned()
    }

    pub fn statistics(&mut self, document: &dyn TextDocument, name: &str) -> MarkerStatistics {
        MarkerStatistics::calculate(name, self.occurrences(document))
    }

    pub fn counterparts(
        &mut self,
        document: &dyn TextDocument,
        occurrence: &Occurrence,
    ) -> Vec<Occurrence> {
        counterparts(occurrence, self.occurrences(document))
            .into_iter()
            .cloned()
            .collect()
    }

    /// Active occurrence at `position` plus all its counterparts, for the
    /// highlighting consumer. None when the cursor is not inside a marker.
    pub fn highlight_at(
        &mut self,
        document: &dyn TextDocument,
        position: Position,
    ) -> Option<HighlightSelection> {
        let active = self.find_occurrence_at(document, position)?;
        let counterparts = self.counterparts(document, &active);
        Some(HighlightSelection {
            active,
            counterparts,
        })
    }

    /// React to a text mutation event. `document` must already reflect the
    /// applied edits. Patches the cache incrementally for a lone edit,
    /// falls back to invalidation otherwise, marks the document stale, arms
    /// the debouncer, and returns any auto-close directives for the host to
    /// apply.
    pub fn handle_edit(
        &mut self,
        document: &dyn TextDocument,
        edits: &[TextEdit],
        now: Instant,
    ) -> Vec<AutoClose> {
        if !self.is_eligible(document) {
            return Vec::new();
        }

        match edits {
            [] => return Vec::new(),
            [edit] if self.cache.contains(document.id()) => {
                self.cache.apply_edit(document.id(), edit, document.text());
            }
            _ => self.cache.invalidate(document.id()),
        }

        if let Some(state) = self.states.get_mut(document.id()) {
            *state = state.on_edit();
        }

        self.debounce.trigger(now);

        if !self.auto_close {
            return Vec::new();
        }
        edits
            .iter()
            .filter_map(|edit| self.auto_close_for(document, edit))
            .collect()
    }

    fn auto_close_for(&self, document: &dyn TextDocument, edit: &TextEdit) -> Option<AutoClose> {
        let position = document.position_at(edit.start);
        let line_text = document.line_text(position.line)?;
        let line_start = document.offset_at(Position::new(position.line, 0));
        let column = edit.start.checked_sub(line_start)?;
        evaluate_auto_close(edit, line_text, column)
    }

    /// React to a cursor move: arms the debounced suggestion evaluation
    pub fn handle_selection(&mut self, now: Instant) {
        self.debounce.trigger(now);
    }

    /// React to a document close: drops the cache entry and tracking state
    pub fn handle_close(&mut self, document_id: &str) {
        self.cache.invalidate(document_id);
        self.states.remove(document_id);
    }

    /// Debounced evaluation of the suggestion-suppression state. Call with
    /// the active document and cursor, if any; returns a switch only when
    /// the deadline has passed and the inside-marker state flipped.
    pub fn poll(
        &mut self,
        active: Option<(&dyn TextDocument, Position)>,
        now: Instant,
    ) -> Option<SuggestionSwitch> {
        if !self.debounce.fire(now) {
            return None;
        }
        let (document, position) = active?;
        let inside = self.is_inside_marker(document, position);
        if inside == self.inside_marker {
            return None;
        }
        self.inside_marker = inside;
        Some(if inside {
            SuggestionSwitch::Suppress
        } else {
            SuggestionSwitch::Restore
        })
    }

    /// Tracking state for a document id
    pub fn state(&self, document_id: &str) -> TrackState {
        self.states
            .get(document_id)
            .copied()
            .unwrap_or(TrackState::Untracked)
    }

    /// Number of cached documents
    pub fn tracked_documents(&self) -> usize {
        self.cache.len()
    }

    /// Cancel the debouncer, drop all cached state, and return the switch
    /// the host needs to undo a pending suppression, if one is in effect.
    pub fn teardown(&mut self) -> Option<SuggestionSwitch> {
        self.debounce.cancel();
        self.cache.clear();
        self.states.clear();
        if std::mem::take(&mut self.inside_marker) {
            Some(SuggestionSwitch::Restore)
        } else {
            None
        }
    }
}

impl Drop for TrackerSession {
    fn drop(&mut self) {
        // teardown() may already have run; cancelling twice is harmless
        self.debounce.cancel();
    }
}
