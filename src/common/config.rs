//! Configuration for tabledb.

use crate::common::{Error, Result};

/// Default B-tree order for column indexes.
///
/// A node holds at most `2 * order - 1` keys before it is split.
/// With order 16 a node carries up to 31 keys, which keeps trees
/// shallow for tables of a few million rows.
pub const DEFAULT_INDEX_ORDER: usize = 16;

/// Smallest order a B-tree accepts.
///
/// Order 1 would allow a single key per node, and a split would leave
/// an empty sibling.
pub const MIN_INDEX_ORDER: usize = 2;

/// Field delimiter used when loading tables.
pub const DEFAULT_DELIMITER: char = ',';

/// Settings for a [`Database`](crate::table::Database).
///
/// # Example
/// ```
/// use tabledb::DatabaseConfig;
///
/// let config = DatabaseConfig::default().with_delimiter('|');
/// assert_eq!(config.delimiter, '|');
/// assert_eq!(config.index_order, tabledb::DEFAULT_INDEX_ORDER);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Order of every index created by the database.
    pub index_order: usize,

    /// Separator between fields in a loaded file.
    pub delimiter: char,
}

impl DatabaseConfig {
    /// Create a config with the given index order and the default delimiter.
    ///
    /// # Errors
    /// Returns `Error::InvalidOrder` if `index_order < MIN_INDEX_ORDER`.
    pub fn new(index_order: usize) -> Result<Self> {
        if index_order < MIN_INDEX_ORDER {
            return Err(Error::InvalidOrder(index_order));
        }
        Ok(Self {
            index_order,
            delimiter: DEFAULT_DELIMITER,
        })
    }

    /// Use a different field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            index_order: DEFAULT_INDEX_ORDER,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.index_order, DEFAULT_INDEX_ORDER);
        assert_eq!(config.delimiter, ',');
    }

    #[test]
    fn test_new_rejects_small_order() {
        assert!(matches!(DatabaseConfig::new(1), Err(Error::InvalidOrder(1))));
        assert!(matches!(DatabaseConfig::new(0), Err(Error::InvalidOrder(0))));
    }

    #[test]
    fn test_new_accepts_min_order() {
        let config = DatabaseConfig::new(MIN_INDEX_ORDER).unwrap();
        assert_eq!(config.index_order, 2);
    }

    #[test]
    fn test_with_delimiter() {
        let config = DatabaseConfig::new(4).unwrap().with_delimiter('\t');
        assert_eq!(config.index_order, 4);
        assert_eq!(config.delimiter, '\t');
    }
}
