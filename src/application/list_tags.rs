//! Unique marker listing use case

use std::path::Path;

use crate::domain::TrackerSession;
use crate::error::Result;
use crate::infrastructure::TrackerConfig;

pub struct ListTagsService {
    session: TrackerSession,
    config: TrackerConfig,
}

impl ListTagsService {
    pub fn new(config: TrackerConfig) -> Self {
        ListTagsService {
            session: TrackerSession::new(config.session_options()),
            config,
        }
    }

    /// Collect the distinct marker literals under `path`, in first-seen
    /// order across the scanned documents.
    pub fn execute(&mut self, path: &Path) -> Result<Vec<String>> {
        let documents = super::collect_documents(path, &self.config)?;

        let mut literals: Vec<String> = Vec::new();
        for document in &documents {
            for occ in self.session.occurrences(document) {
                if !literals.contains(&occ.literal) {
                    literals.push(occ.literal.clone());
                }
            }
        }
        Ok(literals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_unique_literals_first_seen_order() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("page.html");
        fs::write(&file, "[!b] [~b] [!a] [!b]").unwrap();

        let mut service = ListTagsService::new(TrackerConfig::default());
        let literals = service.execute(&file).unwrap();

        assert_eq!(literals, vec!["[!b]", "[~b]", "[!a]"]);
    }

    #[test]
    fn test_literals_across_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), "[!x]").unwrap();
        fs::write(temp.path().join("b.html"), "[!x] [~y]").unwrap();

        let mut service = ListTagsService::new(TrackerConfig::default());
        let literals = service.execute(temp.path()).unwrap();

        assert_eq!(literals, vec!["[!x]", "[~y]"]);
    }

    #[test]
    fn test_no_markers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.html"), "plain").unwrap();

        let mut service = ListTagsService::new(TrackerConfig::default());
        let literals = service.execute(temp.path()).unwrap();
        assert!(literals.is_empty());
    }
}
