//! Loader types
//!
//! Declarative dataset definition types for YAML parsing.

use crate::dataset::SourceConfig;
use serde::{Deserialize, Serialize};

// ============================================================================
// Dataset Definition
// ============================================================================

/// Top-level dataset definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatasetDefinition {
    /// Dataset name
    pub name: String,
    /// Backing source
    pub source: SourceDefinition,
    /// Page size used when the caller does not specify one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl DatasetDefinition {
    /// Build the source config this definition describes
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::new(&self.source.path)
            .with_delimiter(self.source.delimiter)
            .with_header(self.source.has_header)
    }
}

// ============================================================================
// Source Definition
// ============================================================================

/// Backing source definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SourceDefinition {
    /// Path to the delimited data file
    pub path: String,
    /// Field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Whether the first row is a header
    #[serde(default = "default_has_header")]
    pub has_header: bool,
}

fn default_page_size() -> usize {
    10
}

fn default_delimiter() -> char {
    ','
}

fn default_has_header() -> bool {
    true
}
