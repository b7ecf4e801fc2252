//! CLI module
//!
//! Command-line interface for serving pages of a dataset.
//!
//! # Commands
//!
//! - `page` - Fetch a single page of records
//! - `hyper` - Fetch a page wrapped in its hypermedia envelope
//! - `info` - Show dataset statistics
//! - `validate` - Validate a dataset definition

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
