//! Domain layer - Marker model and tracking engine

pub mod markers;
pub mod tracker;

pub use markers::{extract, MarkerKind, MarkerStatistics, Occurrence, Span};
pub use tracker::{Position, SessionOptions, TagCache, TextDocument, TextEdit, TrackerSession};
