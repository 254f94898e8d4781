//! Pairing and statistics over an occurrence sequence
//!
//! Derived views, recomputed on demand. A counterpart is any occurrence
//! sharing a marker's name but of the opposite kind; no proximity pairing
//! is attempted.

use super::grammar::sanitize_name;
use super::occurrence::{MarkerKind, Occurrence};

/// Counts and locations for one marker name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStatistics {
    pub total: usize,
    pub opening: usize,
    pub closing: usize,

    /// Occurrences of the name, in source order
    pub locations: Vec<Occurrence>,

    /// True iff opening and closing counts differ
    pub unbalanced: bool,
}

impl MarkerStatistics {
    /// Compute statistics for `name` over an occurrence sequence.
    ///
    /// `name` is sanitized before comparison so callers may pass raw
    /// marker names; occurrences already carry sanitized names.
    pub fn calculate(name: &str, occurrences: &[Occurrence]) -> Self {
        let name = sanitize_name(name);
        let locations: Vec<Occurrence> = occurrences
            .iter()
            .filter(|occ| occ.name == name)
            .cloned()
            .collect();

        let opening = locations
            .iter()
            .filter(|occ| occ.kind == MarkerKind::Opening)
            .count();
        let closing = locations.len() - opening;

        MarkerStatistics {
            total: locations.len(),
            opening,
            closing,
            locations,
            unbalanced: opening != closing,
        }
    }
}

/// All occurrences with the same name as `occurrence` and the opposite kind
pub fn counterparts<'a>(
    occurrence: &Occurrence,
    occurrences: &'a [Occurrence],
) -> Vec<&'a Occurrence> {
    let wanted = occurrence.kind.opposite();
    occurrences
        .iter()
        .filter(|occ| occ.kind == wanted && occ.name == occurrence.name)
        .collect()
}
