//! Tests for page module

use super::*;
use crate::dataset::SourceConfig;
use pretty_assertions::assert_eq;
use std::io::Write;
use test_case::test_case;

// ============================================================================
// Offset Window Tests
// ============================================================================

#[test_case(1, 7, (0, 7); "first page")]
#[test_case(3, 15, (30, 45); "third page")]
#[test_case(5, 5, (20, 25); "square")]
#[test_case(1, 1, (0, 1); "single record pages")]
#[test_case(100, 10, (990, 1000); "far page")]
fn test_index_range(page: usize, page_size: usize, expected: (usize, usize)) {
    assert_eq!(index_range(page, page_size), expected);
}

#[test]
fn test_index_range_identity() {
    for page in 1..20 {
        for page_size in 1..20 {
            let (start, end) = index_range(page, page_size);
            assert_eq!(start, (page - 1) * page_size);
            assert_eq!(end, page * page_size);
        }
    }
}

#[test]
fn test_page_window_matches_index_range() {
    let window = PageWindow::of(4, 10);
    assert_eq!((window.start, window.end), index_range(4, 10));
}

#[test]
fn test_page_window_is_beyond() {
    let window = PageWindow::of(3, 10); // 20..30
    assert!(window.is_beyond(20));
    assert!(window.is_beyond(15));
    assert!(!window.is_beyond(21));
}

#[test_case(25, 10, 3)]
#[test_case(30, 10, 3)]
#[test_case(31, 10, 4)]
#[test_case(0, 10, 0)]
#[test_case(1, 10, 1)]
fn test_total_pages(len: usize, page_size: usize, expected: usize) {
    assert_eq!(total_pages(len, page_size), expected);
}

// ============================================================================
// HyperPage Tests
// ============================================================================

#[test]
fn test_hyper_page_middle() {
    let data = vec![vec!["a".to_string()], vec!["b".to_string()]];
    let hyper = HyperPage::new(2, &data, 4);

    assert_eq!(hyper.page, 2);
    assert_eq!(hyper.page_size, 2);
    assert_eq!(hyper.next_page, Some(3));
    assert_eq!(hyper.prev_page, Some(1));
    assert!(hyper.has_next());
    assert!(hyper.has_prev());
}

#[test]
fn test_hyper_page_first_has_no_prev() {
    let data = vec![vec!["a".to_string()]];
    let hyper = HyperPage::new(1, &data, 4);
    assert_eq!(hyper.prev_page, None);
    assert_eq!(hyper.next_page, Some(2));
}

#[test]
fn test_hyper_page_last_has_no_next() {
    let data = vec![vec!["a".to_string()]];
    let hyper = HyperPage::new(4, &data, 4);
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(3));
}

#[test]
fn test_hyper_page_beyond_end_keeps_prev() {
    // Navigation is a projection of total_pages, not of data presence.
    let hyper = HyperPage::new(7, &[], 3);
    assert_eq!(hyper.page_size, 0);
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(6));
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn test_hyper_page_serializes_with_nulls() {
    let hyper = HyperPage::new(1, &[], 1);
    let json = serde_json::to_value(&hyper).unwrap();

    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 0);
    assert!(json["next_page"].is_null());
    assert!(json["prev_page"].is_null());
    assert_eq!(json["total_pages"], 1);
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ============================================================================
// PageServer Tests
// ============================================================================

/// Write a header plus `rows` numbered records and return the server.
fn server_with_rows(dir: &tempfile::TempDir, rows: usize) -> PageServer {
    let path = dir.path().join("dataset.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "id,name").unwrap();
    for i in 0..rows {
        writeln!(file, "{i},row_{i}").unwrap();
    }
    drop(file);
    PageServer::new(SourceConfig::new(path))
}

#[test]
fn test_get_page_lengths() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 25);

    // min(page_size, max(0, len - (page-1)*page_size))
    assert_eq!(server.get_page(1, 10).unwrap().len(), 10);
    assert_eq!(server.get_page(2, 10).unwrap().len(), 10);
    assert_eq!(server.get_page(3, 10).unwrap().len(), 5);
    assert_eq!(server.get_page(4, 10).unwrap().len(), 0);
}

#[test]
fn test_get_page_contents_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 25);

    let page = server.get_page(2, 10).unwrap();
    assert_eq!(page[0], vec!["10".to_string(), "row_10".to_string()]);
    assert_eq!(page[9], vec!["19".to_string(), "row_19".to_string()]);
}

#[test]
fn test_get_page_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 25);

    let first = server.get_page(2, 7).unwrap().to_vec();
    let second = server.get_page(2, 7).unwrap().to_vec();
    assert_eq!(first, second);
}

#[test]
fn test_pages_concatenate_to_full_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 25);

    let mut collected = Vec::new();
    for page in 1..=server.total_pages(7).unwrap() {
        collected.extend(server.get_page(page, 7).unwrap().to_vec());
    }
    assert_eq!(collected.as_slice(), server.dataset().unwrap());
}

#[test]
fn test_get_page_rejects_zero_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 5);

    assert!(server.get_page(0, 10).unwrap_err().is_invalid_argument());
    assert!(server.get_page(1, 0).unwrap_err().is_invalid_argument());
    assert!(server.get_hyper(0, 0).unwrap_err().is_invalid_argument());
}

#[test]
fn test_dataset_is_memoized() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 5);
    assert!(!server.is_loaded());

    assert_eq!(server.len().unwrap(), 5);
    assert!(server.is_loaded());

    // Removing the backing file must not matter once loaded.
    std::fs::remove_file(server.source().path()).unwrap();
    assert_eq!(server.len().unwrap(), 5);
    assert_eq!(server.get_page(1, 2).unwrap().len(), 2);
}

#[test]
fn test_missing_source_is_data_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let server = PageServer::from_path(dir.path().join("absent.csv"));

    let err = server.get_page(1, 10).unwrap_err();
    assert!(err.is_data_source());
}

#[test]
fn test_get_hyper_worked_example() {
    // 25 records, page_size 10 -> 3 pages
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 25);

    let hyper = server.get_hyper(2, 10).unwrap();
    assert_eq!(hyper.page_size, 10);
    assert_eq!(hyper.page, 2);
    assert_eq!(hyper.next_page, Some(3));
    assert_eq!(hyper.prev_page, Some(1));
    assert_eq!(hyper.total_pages, 3);

    let hyper = server.get_hyper(3, 10).unwrap();
    assert_eq!(hyper.page_size, 5);
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(2));

    let hyper = server.get_hyper(4, 10).unwrap();
    assert_eq!(hyper.page_size, 0);
    assert!(hyper.data.is_empty());
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(3));
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn test_get_hyper_on_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 0);

    assert_eq!(server.total_pages(10).unwrap(), 0);

    let hyper = server.get_hyper(1, 10).unwrap();
    assert_eq!(hyper.page_size, 0);
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, None);
    assert_eq!(hyper.total_pages, 0);
}

#[test]
fn test_total_pages_rejects_zero_page_size() {
    let dir = tempfile::tempdir().unwrap();
    let server = server_with_rows(&dir, 5);
    assert!(server.total_pages(0).unwrap_err().is_invalid_argument());
}
