//! Error types for hyperpage
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for hyperpage
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Argument Errors
    // ============================================================================
    /// A caller-supplied argument violated a precondition
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// A dataset definition was structurally invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the definition
        message: String,
    },

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    /// The backing source could not be read
    #[error("Data source error: {message}")]
    DataSource {
        /// What went wrong reading the source
        message: String,
    },

    /// A row in the backing source could not be parsed
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow {
        /// 1-indexed line number in the source file
        line: usize,
        /// What was wrong with the row
        message: String,
    },

    /// The backing file does not exist
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// The path that was tried
        path: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// An I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// A contextualized error message
    #[error("{0}")]
    Other(String),

    /// Any other error
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a data source error
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    /// Create a malformed row error
    pub fn malformed_row(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error is a precondition violation by the caller
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Check if this error came from the backing data source
    pub fn is_data_source(&self) -> bool {
        matches!(
            self,
            Error::DataSource { .. }
                | Error::MalformedRow { .. }
                | Error::FileNotFound { .. }
                | Error::Io(_)
        )
    }
}

/// Result type alias for hyperpage
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("page must be a positive integer");
        assert_eq!(
            err.to_string(),
            "Invalid argument: page must be a positive integer"
        );

        let err = Error::data_source("truncated file");
        assert_eq!(err.to_string(), "Data source error: truncated file");

        let err = Error::malformed_row(3, "unterminated quoted field");
        assert_eq!(
            err.to_string(),
            "Malformed row at line 3: unterminated quoted field"
        );

        let err = Error::file_not_found("names.csv");
        assert_eq!(err.to_string(), "Data file not found: names.csv");
    }

    #[test]
    fn test_is_invalid_argument() {
        assert!(Error::invalid_argument("page_size").is_invalid_argument());
        assert!(!Error::data_source("oops").is_invalid_argument());
        assert!(!Error::config("oops").is_invalid_argument());
    }

    #[test]
    fn test_is_data_source() {
        assert!(Error::data_source("bad file").is_data_source());
        assert!(Error::malformed_row(1, "bad quote").is_data_source());
        assert!(Error::file_not_found("missing.csv").is_data_source());

        assert!(!Error::invalid_argument("page").is_data_source());
        assert!(!Error::config("bad yaml").is_data_source());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::data_source("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Data source error: inner"));
    }
}
