//! Error types for tagtrack

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagtrack application
#[derive(Debug, Error)]
pub enum TagtrackError {
    #[error("No such file or directory: {0}")]
    PathNotFound(PathBuf),

    #[error("Marker not found: {0}")]
    MarkerNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagtrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagtrackError::PathNotFound(_) => 2,
            TagtrackError::MarkerNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagtrackError::PathNotFound(path) => {
                format!(
                    "No such file or directory: {}\n\n\
                    Suggestions:\n\
                    • Check the path spelling\n\
                    • Run 'tagtrack scan <dir>' on a directory of tracked documents\n\
                    • Only files with a tracked extension are scanned (see 'tagtrack config languages')",
                    path.display()
                )
            }
            TagtrackError::MarkerNotFound(name) => {
                format!(
                    "Marker not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the marker name spelling (names are case-sensitive)\n\
                    • Use 'tagtrack scan <file>' to list the markers in a document\n\
                    • Markers are written [!name] (opening) and [~name] (closing)",
                    name
                )
            }
            TagtrackError::Config(msg) => {
                if msg.contains("Unknown key") {
                    format!(
                        "{}\n\n\
                        Valid keys: languages, auto_close, debounce_ms\n\
                        Example: tagtrack config auto_close false",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagtrackError
pub type Result<T> = std::result::Result<T, TagtrackError>;
