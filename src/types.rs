//! Common types used throughout hyperpage
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// A single dataset record: one row of string fields.
///
/// Fields are kept verbatim from the source with no type coercion.
pub type Record = Vec<String>;

/// An ordered, in-memory dataset of records.
pub type Dataset = Vec<Record>;
