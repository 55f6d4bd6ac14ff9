//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors that can occur while loading, validating or exporting listings.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader or writer failed (malformed quoting, bad UTF-8, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row in a listing file couldn't be parsed
    ///
    /// `line` is the 1-based line number in the file, header included.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Listing set failed an integrity check
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
