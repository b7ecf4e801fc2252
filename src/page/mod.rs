//! Page module
//!
//! Offset windows, hypermedia envelopes, and the page server.
//!
//! # Overview
//!
//! The page module provides:
//! - `index_range` / `PageWindow` - Pure 1-indexed offset arithmetic
//! - `HyperPage` - Page data plus navigation metadata
//! - `PageServer` - Serves pages of a memoized dataset
//!
//! Pages are 1-indexed. Requesting a page past the end of the dataset
//! yields an empty page, not an error.

mod server;
mod types;

pub use server::PageServer;
pub use types::{index_range, total_pages, HyperPage, PageWindow};

#[cfg(test)]
mod tests;
