//! Database - the single loaded table and its column indexes.
//!
//! The [`Database`] provides:
//! - Loading a delimited file as the current table
//! - Creating and dropping a B-tree index per column
//! - Exact-match row selection, through the index when one exists

use std::collections::HashMap;
use std::path::Path;

use crate::common::{DatabaseConfig, Error, Result, RowId};
use crate::index::BTree;
use crate::table::{loader, Row, Table};

/// Index on one column: column value → ids of the rows holding it.
type ColumnIndex = BTree<String, RowId>;

/// Result of [`Database::select_rows`].
///
/// `header` is empty when the requested table is not the loaded one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub header: Row,
    pub rows: Vec<Row>,
}

/// Holds at most one table at a time, plus any indexes built on it.
///
/// Loading a new table discards the old table and all of its indexes.
/// Indexes are snapshots: they reflect the rows present when they were
/// created.
///
/// # Usage
/// ```no_run
/// use tabledb::Database;
///
/// let mut db = Database::new();
/// db.load_table("students", "students.csv")?;
/// db.create_index("grade")?;
///
/// let selection = db.select_rows("students", "grade", "HD");
/// for row in &selection.rows {
///     println!("{:?}", row);
/// }
/// # Ok::<(), tabledb::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Database {
    config: DatabaseConfig,

    /// The loaded table, if any.
    table: Option<Table>,

    /// Column position → index on that column.
    indexes: HashMap<usize, ColumnIndex>,
}

impl Database {
    /// Create an empty database with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty database with the given configuration.
    pub fn with_config(config: DatabaseConfig) -> Self {
        Self {
            config,
            table: None,
            indexes: HashMap::new(),
        }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Name of the loaded table.
    pub fn table_name(&self) -> Option<&str> {
        self.table.as_ref().map(Table::name)
    }

    /// Header of the loaded table.
    pub fn header(&self) -> Option<&[String]> {
        self.table.as_ref().map(Table::header)
    }

    /// The loaded table.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    // ========================================================================
    // Public API: Tables
    // ========================================================================

    /// Load `path` as the current table under `name`.
    ///
    /// Replaces any previously loaded table and drops all indexes.
    ///
    /// # Errors
    /// Any loader error. On error the previous table and its indexes are
    /// left untouched.
    pub fn load_table<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        tracing::info!(table = name, path = %path.display(), "loading table");

        let (header, rows) = match loader::read_delimited(path, self.config.delimiter) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(table = name, error = %e, "load failed, keeping current table");
                return Err(e);
            }
        };

        let table = Table::new(name, header, rows);
        tracing::info!(
            table = name,
            columns = table.header().len(),
            rows = table.row_count(),
            "table loaded"
        );

        self.table = Some(table);
        self.indexes.clear();
        Ok(())
    }

    // ========================================================================
    // Public API: Indexes
    // ========================================================================

    /// Build a B-tree index on `column`.
    ///
    /// Every loaded row is inserted in row order, so rows sharing a value
    /// come back from the index in table order.
    ///
    /// # Errors
    /// - `Error::NoTableLoaded`
    /// - `Error::ColumnNotFound` if the table has no such column
    /// - `Error::IndexExists` if the column is already indexed
    pub fn create_index(&mut self, column: &str) -> Result<()> {
        let table = self.table.as_ref().ok_or(Error::NoTableLoaded)?;
        let col_id = table
            .column_index(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))?;
        if self.indexes.contains_key(&col_id) {
            return Err(Error::IndexExists(column.to_string()));
        }

        let mut index = BTree::new(self.config.index_order);
        for (value, row_id) in table.column_values(col_id) {
            index.insert(value.to_string(), row_id);
        }

        tracing::info!(
            column,
            keys = index.key_count(),
            height = index.height(),
            "index created"
        );
        self.indexes.insert(col_id, index);
        Ok(())
    }

    /// Drop the index on `column`.
    ///
    /// # Errors
    /// - `Error::NoTableLoaded`
    /// - `Error::ColumnNotFound` if the table has no such column
    /// - `Error::IndexNotFound` if the column is not indexed
    pub fn drop_index(&mut self, column: &str) -> Result<()> {
        let col_id = self.resolve_column(column)?;
        if self.indexes.remove(&col_id).is_none() {
            return Err(Error::IndexNotFound(column.to_string()));
        }

        tracing::info!(column, "index dropped");
        Ok(())
    }

    /// True if `column` of the loaded table is indexed.
    pub fn has_index(&self, column: &str) -> bool {
        self.resolve_column(column)
            .map(|col_id| self.indexes.contains_key(&col_id))
            .unwrap_or(false)
    }

    // ========================================================================
    // Public API: Queries
    // ========================================================================

    /// Rows of `table_name` whose `column` equals `value`, in table order.
    ///
    /// - Unknown table: empty header, no rows.
    /// - Unknown column: the header, no rows.
    /// - Indexed column: looked up through the B-tree.
    /// - Otherwise: linear scan.
    pub fn select_rows(&self, table_name: &str, column: &str, value: &str) -> Selection {
        let table = match &self.table {
            Some(table) if table.name() == table_name => table,
            _ => return Selection::default(),
        };

        let header = table.header().to_vec();
        let Some(col_id) = table.column_index(column) else {
            return Selection {
                header,
                rows: Vec::new(),
            };
        };

        let row_ids = match self.indexes.get(&col_id) {
            Some(index) => {
                tracing::debug!(column, value, "select via index");
                index.search(value).to_vec()
            }
            None => {
                tracing::debug!(column, value, "select via scan");
                table.scan(col_id, value)
            }
        };

        let rows = row_ids
            .into_iter()
            .filter_map(|row_id| table.row(row_id).cloned())
            .collect();

        Selection { header, rows }
    }

    fn resolve_column(&self, column: &str) -> Result<usize> {
        let table = self.table.as_ref().ok_or(Error::NoTableLoaded)?;
        table
            .column_index(column)
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }
}
