//! Incremental tracking engine

pub mod cache;
pub mod debounce;
pub mod edit;
pub mod policy;
pub mod query;
pub mod session;

// Re-export main types
pub use cache::TagCache;
pub use debounce::Debouncer;
pub use edit::TextEdit;
pub use policy::{AutoClose, TrackState};
pub use session::{
    HighlightSelection, Position, SessionOptions, SuggestionSwitch, TextDocument, TrackerSession,
};
