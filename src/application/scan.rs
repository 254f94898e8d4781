//! Marker scan use case

use std::path::{Path, PathBuf};

use crate::domain::tracker::{Position, TextDocument};
use crate::domain::{Occurrence, TrackerSession};
use crate::error::Result;
use crate::infrastructure::TrackerConfig;

/// One occurrence together with its line/column position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedOccurrence {
    pub occurrence: Occurrence,
    pub position: Position,
}

/// Scan result for one document
#[derive(Debug, Clone)]
pub struct FileScan {
    pub path: PathBuf,
    pub markers: Vec<LocatedOccurrence>,
}

/// Service listing marker occurrences across a file or tree
pub struct ScanService {
    session: TrackerSession,
    config: TrackerConfig,
}

impl ScanService {
    pub fn new(config: TrackerConfig) -> Self {
        ScanService {
            session: TrackerSession::new(config.session_options()),
            config,
        }
    }

    /// Scan `path`. For a directory, only files with at least one marker
    /// appear in the result; a single file is always reported, markers or
    /// not.
    pub fn execute(&mut self, path: &Path) -> Result<Vec<FileScan>> {
        let single_file = path.is_file();
        let documents = super::collect_documents(path, &self.config)?;

        let mut scans = Vec::new();
        for document in &documents {
            let markers: Vec<LocatedOccurrence> = self
                .session
                .occurrences(document)
                .iter()
                .map(|occ| LocatedOccurrence {
                    occurrence: occ.clone(),
                    position: document.position_at(occ.span.start),
                })
                .collect();

            if markers.is_empty() && !single_file {
                continue;
            }
            scans.push(FileScan {
                path: PathBuf::from(document.id()),
                markers,
            });
        }
        Ok(scans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarkerKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_single_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("page.html");
        fs::write(&file, "<p>[!intro]</p>\n<p>[~intro]</p>\n").unwrap();

        let mut service = ScanService::new(TrackerConfig::default());
        let scans = service.execute(&file).unwrap();

        assert_eq!(scans.len(), 1);
        let markers = &scans[0].markers;
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].occurrence.kind, MarkerKind::Opening);
        assert_eq!(markers[0].position, Position::new(0, 3));
        assert_eq!(markers[1].occurrence.kind, MarkerKind::Closing);
        assert_eq!(markers[1].position, Position::new(1, 3));
    }

    #[test]
    fn test_scan_directory_skips_files_without_markers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), "[!x][~x]").unwrap();
        fs::write(temp.path().join("b.html"), "nothing here").unwrap();
        fs::write(temp.path().join("c.txt"), "[!ignored]").unwrap();

        let mut service = ScanService::new(TrackerConfig::default());
        let scans = service.execute(temp.path()).unwrap();

        assert_eq!(scans.len(), 1);
        assert!(scans[0].path.ends_with("a.html"));
    }

    #[test]
    fn test_scan_missing_path_is_error() {
        let mut service = ScanService::new(TrackerConfig::default());
        assert!(service.execute(Path::new("/no/such/path")).is_err());
    }

    #[test]
    fn test_scan_single_ineligible_file_reports_no_markers() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "[!x]").unwrap();

        let mut service = ScanService::new(TrackerConfig::default());
        let scans = service.execute(&file).unwrap();

        assert_eq!(scans.len(), 1);
        assert!(scans[0].markers.is_empty());
    }
}
