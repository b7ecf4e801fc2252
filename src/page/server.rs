//! Page server
//!
//! Owns the backing source and serves pages with hypermedia metadata.
//! The dataset is loaded once on first access and cached for the lifetime
//! of the server; later calls never touch the source again.

use super::types::{total_pages, HyperPage, PageWindow};
use crate::dataset::{read_records, SourceConfig};
use crate::error::{Error, Result};
use crate::types::{Dataset, Record};
use once_cell::sync::OnceCell;
use std::path::Path;

/// Serves 1-indexed pages of a delimited dataset
///
/// The server is read-only: the cached dataset is immutable once loaded.
/// A failed load is not retried; construct a new server to retry.
#[derive(Debug)]
pub struct PageServer {
    /// Backing source configuration
    source: SourceConfig,
    /// Cached dataset, populated on first access
    dataset: OnceCell<Dataset>,
}

impl PageServer {
    /// Create a server over a configured source
    pub fn new(source: SourceConfig) -> Self {
        Self {
            source,
            dataset: OnceCell::new(),
        }
    }

    /// Create a server over a comma-delimited file with a header row
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(SourceConfig::new(path.as_ref()))
    }

    /// The backing source configuration
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Check whether the dataset has been loaded yet
    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    /// The full dataset, loading it on the first call.
    ///
    /// Concurrent first access is safe: one caller performs the load and
    /// every caller sees the same cached records.
    pub fn dataset(&self) -> Result<&[Record]> {
        self.dataset
            .get_or_try_init(|| read_records(&self.source))
            .map(Vec::as_slice)
    }

    /// Number of records in the dataset
    pub fn len(&self) -> Result<usize> {
        Ok(self.dataset()?.len())
    }

    /// Check if the dataset has no records
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.dataset()?.is_empty())
    }

    /// Total number of pages for the given page size
    pub fn total_pages(&self, page_size: usize) -> Result<usize> {
        validate_page_size(page_size)?;
        Ok(total_pages(self.dataset()?.len(), page_size))
    }

    /// A single page of records.
    ///
    /// Pages are 1-indexed. A page past the end of the dataset is empty,
    /// not an error. The last page may be shorter than `page_size`.
    pub fn get_page(&self, page: usize, page_size: usize) -> Result<&[Record]> {
        validate_request(page, page_size)?;

        let data = self.dataset()?;
        let window = PageWindow::of(page, page_size);

        if window.is_beyond(data.len()) {
            return Ok(&[]);
        }

        Ok(&data[window.start..window.end.min(data.len())])
    }

    /// A page wrapped in its hypermedia envelope.
    ///
    /// `next_page` and `prev_page` derive from `total_pages` and the
    /// requested page number, not from whether `data` is empty.
    pub fn get_hyper(&self, page: usize, page_size: usize) -> Result<HyperPage<'_>> {
        let data = self.get_page(page, page_size)?;
        let total = total_pages(self.dataset()?.len(), page_size);

        tracing::debug!(page, page_size, returned = data.len(), total, "serving page");
        Ok(HyperPage::new(page, data, total))
    }
}

fn validate_request(page: usize, page_size: usize) -> Result<()> {
    if page == 0 {
        return Err(Error::invalid_argument("page must be a positive integer"));
    }
    validate_page_size(page_size)
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::invalid_argument(
            "page_size must be a positive integer",
        ));
    }
    Ok(())
}
