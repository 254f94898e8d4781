//! Marker statistics use case

use std::path::Path;

use super::scan::LocatedOccurrence;
use crate::domain::markers::grammar::sanitize_name;
use crate::domain::tracker::TextDocument;
use crate::domain::{MarkerStatistics, TrackerSession};
use crate::error::{Result, TagtrackError};
use crate::infrastructure::{DocumentBuffer, TrackerConfig};

/// Statistics for one marker name in one document
#[derive(Debug, Clone)]
pub struct MarkerReport {
    /// The sanitized name the statistics were computed for
    pub name: String,
    pub statistics: MarkerStatistics,
    pub locations: Vec<LocatedOccurrence>,
}

pub struct StatsService {
    session: TrackerSession,
}

impl StatsService {
    pub fn new(config: TrackerConfig) -> Self {
        StatsService {
            session: TrackerSession::new(config.session_options()),
        }
    }

    /// Compute statistics for `name` in `file`.
    ///
    /// # Errors
    ///
    /// Returns `MarkerNotFound` when the document contains no occurrence
    /// of the name.
    pub fn execute(&mut self, file: &Path, name: &str) -> Result<MarkerReport> {
        let document = DocumentBuffer::from_file(file)?;
        let statistics = self.session.statistics(&document, name);

        if statistics.total == 0 {
            return Err(TagtrackError::MarkerNotFound(name.to_string()));
        }

        let locations = statistics
            .locations
            .iter()
            .map(|occ| LocatedOccurrence {
                occurrence: occ.clone(),
                position: document.position_at(occ.span.start),
            })
            .collect();

        Ok(MarkerReport {
            name: sanitize_name(name),
            statistics,
            locations,
        })
    }
}
