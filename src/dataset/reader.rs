//! Delimited-text reader
//!
//! Reads a backing file fully into memory and splits it into records of
//! string fields. Fields are kept verbatim: no trimming, no type coercion.

use super::types::SourceConfig;
use crate::error::{Error, Result};
use crate::types::{Dataset, Record};
use std::fs;
use std::io::ErrorKind;

/// Read all records from the backing source.
///
/// The file is opened, fully read, and closed before this returns. The
/// header row is discarded when the config says there is one.
pub fn read_records(config: &SourceConfig) -> Result<Dataset> {
    let raw = fs::read_to_string(&config.path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::file_not_found(config.path.display().to_string())
        } else {
            Error::data_source(format!(
                "failed to read '{}': {e}",
                config.path.display()
            ))
        }
    })?;

    let records = parse_records(&raw, config)?;
    tracing::debug!(
        records = records.len(),
        source = %config.path.display(),
        "dataset loaded"
    );
    Ok(records)
}

/// Parse in-memory delimited text into records.
///
/// Blank lines are skipped. When `has_header` is set, the first parsed
/// row is dropped.
pub fn parse_records(raw: &str, config: &SourceConfig) -> Result<Dataset> {
    let mut records = Vec::new();
    let mut header_seen = !config.has_header;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_delimited_line(line, config.delimiter)
            .map_err(|message| Error::malformed_row(line_no + 1, message))?;

        if !header_seen {
            header_seen = true;
            continue;
        }

        records.push(fields);
    }

    Ok(records)
}

/// Split one line into fields, honoring double-quoted sections
fn parse_delimited_line(line: &str, delimiter: char) -> std::result::Result<Record, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes {
                // Check for escaped quote
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                in_quotes = true;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    fields.push(current);
    Ok(fields)
}
