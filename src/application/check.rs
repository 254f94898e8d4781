//! Balance check use case
//!
//! Imbalance is reported, never repaired: a name whose opening and closing
//! counts differ is listed with both counts.

use std::path::{Path, PathBuf};

use crate::domain::tracker::TextDocument;
use crate::domain::{MarkerStatistics, TrackerSession};
use crate::error::Result;
use crate::infrastructure::TrackerConfig;

/// One unbalanced marker name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameBalance {
    pub name: String,
    pub opening: usize,
    pub closing: usize,
}

/// Balance report for one document; only documents with at least one
/// unbalanced name are reported
#[derive(Debug, Clone)]
pub struct FileBalance {
    pub path: PathBuf,
    pub unbalanced: Vec<NameBalance>,
}

pub struct CheckService {
    session: TrackerSession,
    config: TrackerConfig,
}

impl CheckService {
    pub fn new(config: TrackerConfig) -> Self {
        CheckService {
            session: TrackerSession::new(config.session_options()),
            config,
        }
    }

    pub fn execute(&mut self, path: &Path) -> Result<Vec<FileBalance>> {
        let documents = super::collect_documents(path, &self.config)?;

        let mut reports = Vec::new();
        for document in &documents {
            let occurrences = self.session.occurrences(document).to_vec();

            // distinct names in first-seen order
            let mut names: Vec<&str> = Vec::new();
            for occ in &occurrences {
                if !names.contains(&occ.name.as_str()) {
                    names.push(&occ.name);
                }
            }

            let unbalanced: Vec<NameBalance> = names
                .iter()
                .filter_map(|name| {
                    let stats = MarkerStatistics::calculate(name, &occurrences);
                    stats.unbalanced.then(|| NameBalance {
                        name: name.to_string(),
                        opening: stats.opening,
                        closing: stats.closing,
                    })
                })
                .collect();

            if !unbalanced.is_empty() {
                reports.push(FileBalance {
                    path: PathBuf::from(document.id()),
                    unbalanced,
                });
            }
        }
        Ok(reports)
    }
}
