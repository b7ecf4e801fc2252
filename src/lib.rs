// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]

//! # Hyperpage
//!
//! A minimal, Rust-native hypermedia pagination service for delimited
//! datasets.
//!
//! ## Features
//!
//! - **Delimited sources**: load any UTF-8 delimited text file (CSV by
//!   default) with quote-aware field splitting and header handling
//! - **One-shot load**: the dataset is read once on first access and cached
//!   for the lifetime of the server
//! - **Offset windows**: pure 1-indexed page arithmetic, pages past the end
//!   are empty rather than errors
//! - **Hypermedia envelopes**: every page can be wrapped with
//!   next/previous page numbers and the total page count
//! - **YAML definitions**: describe a dataset (path, delimiter, header,
//!   default page size) in a small YAML file
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hyperpage::{PageServer, Result};
//!
//! fn main() -> Result<()> {
//!     let server = PageServer::from_path("Popular_Baby_Names.csv");
//!
//!     // A raw page of records
//!     let rows = server.get_page(2, 10)?;
//!
//!     // The same page with navigation metadata
//!     let hyper = server.get_hyper(2, 10)?;
//!     println!("{}", serde_json::to_string(&hyper)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      PageServer                         │
//! │  dataset() → &[Record]      get_page(p, n) → &[Record]  │
//! │  get_hyper(p, n) → HyperPage                            │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴────────────┬────────────────┐
//! │   Dataset    │          Page          │     Loader     │
//! ├──────────────┼────────────────────────┼────────────────┤
//! │ SourceConfig │ index_range            │ YAML parsing   │
//! │ read_records │ PageWindow             │ validation     │
//! │ quote-aware  │ HyperPage envelope     │ serde defaults │
//! └──────────────┴────────────────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Backing source configuration and delimited-text reading
pub mod dataset;

/// Offset windows, hypermedia envelopes, and the page server
pub mod page;

/// YAML loader for dataset definitions
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Dataset, Record};

// Re-export commonly used types
pub use dataset::SourceConfig;
pub use loader::{load_definition, load_definition_from_str, DatasetDefinition};
pub use page::{index_range, HyperPage, PageServer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
