//! Error module
//!
//! Defines custom error types using `thiserror` for name-keyed CSV reading
//! and writing. This module provides a unified error type that wraps the
//! underlying CSV and I/O error sources and implements the `From` trait for
//! automatic conversion from them.

use thiserror::Error;

/// The main error type for mapped CSV reading and writing.
///
/// This enum represents all possible errors that can occur while turning
/// positional CSV records into name-keyed ones and back, including parse
/// errors from the underlying CSV reader, file I/O errors, and records
/// that do not line up with the header row.
///
/// # Error Categories
///
/// - **Source errors**: CSV parse failures and general I/O failures,
///   passed through unchanged
/// - **Header errors**: sources that end before a header row can be read
/// - **Record errors**: data records too short for the header row
///
/// # Example
///
/// ```rust,ignore
/// use rowmap::error::RowMapError;
///
/// fn example() -> Result<(), RowMapError> {
///     // Errors from underlying types are automatically converted
///     let mut reader = rowmap::MapReader::from_path("input.csv")?;
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum RowMapError {
    /// CSV parse or read error.
    ///
    /// This error occurs when the underlying CSV reader or writer fails,
    /// including malformed quoting and I/O failures detected mid-parse.
    /// The source error is reported unchanged.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// General I/O error.
    ///
    /// This error occurs for file system operations outside of parsing,
    /// like opening a file or flushing a writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source ended before a header row could be read.
    ///
    /// This error occurs when a reader is constructed over an empty
    /// source. Without a header row there are no column names, so the
    /// reader cannot be built at all.
    #[error("Missing header row: input ended before any record could be read")]
    MissingHeader,

    /// A data record has fewer fields than the header row.
    ///
    /// This error occurs when a record cannot supply a value for every
    /// column name. `line` is 1-indexed and counts the header row as
    /// line 1.
    #[error("Line {line}: record has {found} fields but the header defines {expected}")]
    RowLengthMismatch {
        /// 1-indexed line of the offending record.
        line: u64,
        /// Number of fields the header row defines.
        expected: usize,
        /// Number of fields the record actually has.
        found: usize,
    },
}
