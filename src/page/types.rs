//! Page types
//!
//! Offset-window arithmetic and the hypermedia envelope.

use crate::types::Record;
use serde::Serialize;

// ============================================================================
// Offset Windows
// ============================================================================

/// Compute the offset window for a 1-indexed page.
///
/// `start = (page - 1) * page_size`, `end = page * page_size`. No bounds
/// are applied here; callers clamp against the dataset length. Only
/// defined for positive inputs — callers validate before calling.
pub fn index_range(page: usize, page_size: usize) -> (usize, usize) {
    ((page - 1) * page_size, page * page_size)
}

/// Total number of pages for a dataset length and page size.
///
/// `ceil(len / page_size)`. A zero-length dataset has zero pages.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// The offset window delimiting a page within the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Inclusive start index
    pub start: usize,
    /// Exclusive end index
    pub end: usize,
}

impl PageWindow {
    /// Compute the window for a 1-indexed page
    pub fn of(page: usize, page_size: usize) -> Self {
        let (start, end) = index_range(page, page_size);
        Self { start, end }
    }

    /// Check if the window starts at or past the given dataset length
    pub fn is_beyond(&self, len: usize) -> bool {
        self.start >= len
    }
}

// ============================================================================
// Hypermedia Envelope
// ============================================================================

/// A page of records bundled with navigation metadata
///
/// Navigation is a projection of `total_pages` and `page` alone: a page
/// requested past the end still reports its previous neighbour even
/// though `data` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperPage<'a> {
    /// Number of records actually returned (may be less than requested)
    pub page_size: usize,
    /// The requested 1-indexed page number
    pub page: usize,
    /// Records in this page
    pub data: &'a [Record],
    /// Next page number, absent on or past the last page
    pub next_page: Option<usize>,
    /// Previous page number, absent on the first page
    pub prev_page: Option<usize>,
    /// Total number of pages in the dataset
    pub total_pages: usize,
}

impl<'a> HyperPage<'a> {
    /// Build an envelope from a page of data and the total page count
    pub fn new(page: usize, data: &'a [Record], total_pages: usize) -> Self {
        Self {
            page_size: data.len(),
            page,
            data,
            next_page: if page < total_pages {
                Some(page + 1)
            } else {
                None
            },
            prev_page: if page > 1 { Some(page - 1) } else { None },
            total_pages,
        }
    }

    /// Check if there is a page after this one
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Check if there is a page before this one
    pub fn has_prev(&self) -> bool {
        self.prev_page.is_some()
    }
}
