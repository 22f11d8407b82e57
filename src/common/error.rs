//! Error types for tabledb.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in tabledb.
///
/// The index itself never fails: a missing key is an empty result, not an
/// error. Everything here comes from the table layer.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a table file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The table file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The table file has no header line.
    #[error("File has no header: {}", .0.display())]
    MissingHeader(PathBuf),

    /// A row has a different number of fields than the header.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    RowArity {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// An operation needs a loaded table.
    #[error("No table loaded")]
    NoTableLoaded,

    /// The loaded table has no column with this name.
    #[error("Column '{0}' does not exist")]
    ColumnNotFound(String),

    /// The column is already indexed.
    #[error("Index already exists on column '{0}'")]
    IndexExists(String),

    /// The column has no index to drop.
    #[error("No index exists on column '{0}'")]
    IndexNotFound(String),

    /// Index order below the minimum.
    #[error("Invalid index order {0}: must be at least 2")]
    InvalidOrder(usize),
}
