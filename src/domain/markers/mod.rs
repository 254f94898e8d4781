//! Marker grammar, extraction and derived views

pub mod extractor;
pub mod grammar;
pub mod occurrence;
pub mod pairing;

// Re-export main types
pub use extractor::extract;
pub use occurrence::{MarkerKind, Occurrence, Span};
pub use pairing::{counterparts, MarkerStatistics};
