//! The loaded table: name, header, column mapping and rows.

use std::collections::HashMap;

use crate::common::RowId;
use crate::table::Row;

/// A table held entirely in memory.
///
/// Rows are addressed by [`RowId`], their position in load order.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    header: Row,
    /// Column name → position in the header.
    columns: HashMap<String, usize>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table from an already-parsed header and rows.
    ///
    /// If the header repeats a column name, the last occurrence wins.
    pub fn new(name: impl Into<String>, header: Row, rows: Vec<Row>) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .map(|(i, column)| (column.clone(), i))
            .collect();

        Self {
            name: name.into(),
            header,
            columns,
            rows,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of `column` in the header.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    /// The row at `row_id`, if in range.
    pub fn row(&self, row_id: RowId) -> Option<&Row> {
        self.rows.get(row_id.0)
    }

    /// Every `(value, row id)` pair for one column, in row order.
    ///
    /// Rows too short to have `column` are skipped.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = (&str, RowId)> + '_ {
        self.rows.iter().enumerate().filter_map(move |(i, row)| {
            row.get(column)
                .map(|value| (value.as_str(), RowId::new(i)))
        })
    }

    /// Linear scan for rows whose `column` equals `value`.
    pub fn scan(&self, column: usize, value: &str) -> Vec<RowId> {
        self.column_values(column)
            .filter(|(v, _)| *v == value)
            .map(|(_, row_id)| row_id)
            .collect()
    }
}
