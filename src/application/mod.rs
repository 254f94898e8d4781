//! Application layer - Use cases and orchestration

pub mod check;
pub mod list_tags;
pub mod manage_config;
pub mod scan;
pub mod stats;

pub use check::{CheckService, FileBalance, NameBalance};
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use scan::{FileScan, LocatedOccurrence, ScanService};
pub use stats::{MarkerReport, StatsService};

use crate::error::{Result, TagtrackError};
use crate::infrastructure::document::language_for_path;
use crate::infrastructure::{DocumentBuffer, TrackerConfig};
use std::path::Path;
use walkdir::WalkDir;

/// Collect the documents a use case operates on. A file path loads that
/// one document; a directory is walked recursively and filtered down to
/// files whose extension maps to a tracked language.
pub(crate) fn collect_documents(path: &Path, config: &TrackerConfig) -> Result<Vec<DocumentBuffer>> {
    if !path.exists() {
        return Err(TagtrackError::PathNotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(vec![DocumentBuffer::from_file(path)?]);
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|e| TagtrackError::Config(format!("Walk failed: {}", e)))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !config.is_eligible_language(&language_for_path(entry.path())) {
            continue;
        }
        documents.push(DocumentBuffer::from_file(entry.path())?);
    }
    Ok(documents)
}
