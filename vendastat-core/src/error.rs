//! Errors surfaced by the report pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the load → extract stages.
///
/// Every variant is fatal: the caller prints the diagnostic and exits
/// without rendering any part of the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input file could not be opened for reading.
    #[error("cannot open sales file '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer failed mid-file (I/O error, invalid UTF-8).
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A data row does not carry exactly six fields.
    #[error("row {row}: expected 6 fields, found {found}")]
    MalformedRow { row: usize, found: usize },

    /// A field's text does not match its expected date or numeric format.
    #[error("row {row}, column '{column}': cannot parse '{value}' as {expected}")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}
