//! Error types for spam-rs

use std::path::PathBuf;
use thiserror::Error;

use crate::corpus::Label;

/// Result type alias for detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;

/// Fatal detector errors
///
/// Unreadable individual documents are not errors; they are recorded in a
/// [`CorpusReport`](crate::corpus::CorpusReport) and skipped.
#[derive(Error, Debug)]
pub enum DetectorError {
    /// A required corpus directory is absent
    #[error("Corpus directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    /// A required corpus directory exists but cannot be listed
    #[error("Cannot list corpus directory {}: {source}", .path.display())]
    UnreadableDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required training directory has no entries
    #[error("Training directory is empty: {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// Every training document of one class was skipped
    #[error("No readable {0} training documents")]
    EmptyCorpus(Label),

    /// Invalid corpus layout
    #[error("Configuration error: {0}")]
    Config(String),
}
