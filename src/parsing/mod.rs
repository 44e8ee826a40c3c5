//! Parsers that turn exported files into record lists.
//!
//! The engine itself consumes in-memory [`RawRecord`] lists and is total over
//! them; these parsers exist so the CLI can ingest the formats the upstream
//! tools actually emit:
//!
//! - **CSV/TSV**: a header row naming the fields, one record per data row
//! - **JSON**: a bare array of record objects, or the export envelope that
//!   wraps the list under a `data` or `preview` key
//!
//! [`RawRecord`]: crate::core::record::RawRecord

use thiserror::Error;

pub mod csv;
pub mod json;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record list: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}
