//! Delimited file loader.
//!
//! Reads a header line followed by one row per line. Values are split on a
//! single delimiter character; there are no quoting or escaping rules.
//!
//! # File Layout
//! ```text
//! name,id,grade        <- header
//! Alice,a1234,HD       <- row 0
//! Bob,a7654,D          <- row 1
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::common::{Error, Result};
use crate::table::Row;

/// Read a delimited file into its header and rows.
///
/// Trailing whitespace is stripped from every line, and blank lines are
/// skipped.
///
/// # Errors
/// - `Error::FileNotFound` if `path` does not exist
/// - `Error::MissingHeader` if the file has no non-blank first line
/// - `Error::RowArity` if a row's field count differs from the header's
/// - `Error::Io` for any other read failure
pub fn read_delimited<P: AsRef<Path>>(path: P, delimiter: char) -> Result<(Row, Vec<Row>)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() {
                return Err(Error::MissingHeader(path.to_path_buf()));
            }
            split_fields(line, delimiter)
        }
        None => return Err(Error::MissingHeader(path.to_path_buf())),
    };

    let mut rows = Vec::new();
    for (index, line) in lines {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let row = split_fields(line, delimiter);
        if row.len() != header.len() {
            return Err(Error::RowArity {
                line: index + 1,
                expected: header.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }

    Ok((header, rows))
}

fn split_fields(line: &str, delimiter: char) -> Row {
    line.split(delimiter).map(str::to_string).collect()
}
