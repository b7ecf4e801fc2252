//! Dataset source types
//!
//! Configuration for the backing delimited file.

use std::path::{Path, PathBuf};

/// Configuration for a delimited backing source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Path to the data file
    pub path: PathBuf,
    /// Field delimiter
    pub delimiter: char,
    /// Whether the first row is a header (and is discarded)
    pub has_header: bool,
}

impl SourceConfig {
    /// Create a source config with default settings (comma delimiter,
    /// header row present)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: ',',
            has_header: true,
        }
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the first row is a header
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// The path to the data file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
