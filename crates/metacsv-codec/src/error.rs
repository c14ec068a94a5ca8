//! Error types for `metacsv-codec`.
//!
//! Cell encoding and decoding never fail. Errors only come from assembling or
//! parsing whole documents.

use thiserror::Error;

/// Primary error type for codec operations.
#[derive(Error, Debug)]
pub enum CodecError {
    // === Document Shape Errors ===
    /// A row does not have one cell per header.
    #[error("Row {row} has {found} cells, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    // === Top-level CSV Errors ===
    /// The top-level CSV reader or writer failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the document writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The formatted document was not valid UTF-8.
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl CodecError {
    #[must_use]
    pub const fn shape_mismatch(row: usize, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            row,
            expected,
            found,
        }
    }
}

/// Result type using `CodecError`.
pub type Result<T> = std::result::Result<T, CodecError>;
