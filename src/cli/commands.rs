//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hypermedia pagination CLI
#[derive(Parser, Debug)]
#[command(name = "hyperpage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset definition file (YAML)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Delimited data file (bypasses the definition)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Field delimiter for --file
    #[arg(long, global = true, default_value = ",")]
    pub delimiter: char,

    /// Treat the first row of --file as data, not a header
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Output format
    #[arg(short = 'F', long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a single page of records
    Page {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page (defaults to the definition's page size)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Fetch a page wrapped in its hypermedia envelope
    Hyper {
        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page (defaults to the definition's page size)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Show dataset statistics
    Info {
        /// Page size to report page counts for
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Validate a dataset definition
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
