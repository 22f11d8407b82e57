//! Thread-safe handle to a [`Database`].

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::common::{DatabaseConfig, Result};
use crate::table::{Database, Selection};

/// A cloneable, lock-protected [`Database`].
///
/// The index and table types assume one writer and no overlapping readers.
/// This handle provides that guarantee for callers on several threads:
///
/// # Thread Safety
/// - `load_table`, `create_index`, `drop_index`: write lock
/// - `select_rows`, `table_name`, `has_index`: read lock
///
/// # Example
/// ```
/// use tabledb::SharedDatabase;
///
/// let db = SharedDatabase::new();
/// let handle = db.clone();
/// std::thread::spawn(move || {
///     assert!(handle.table_name().is_none());
/// })
/// .join()
/// .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedDatabase {
    inner: Arc<RwLock<Database>>,
}

impl SharedDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DatabaseConfig) -> Self {
        Self::from(Database::with_config(config))
    }

    pub fn load_table<P: AsRef<Path>>(&self, name: &str, path: P) -> Result<()> {
        self.inner.write().load_table(name, path)
    }

    pub fn create_index(&self, column: &str) -> Result<()> {
        self.inner.write().create_index(column)
    }

    pub fn drop_index(&self, column: &str) -> Result<()> {
        self.inner.write().drop_index(column)
    }

    pub fn has_index(&self, column: &str) -> bool {
        self.inner.read().has_index(column)
    }

    pub fn table_name(&self) -> Option<String> {
        self.inner.read().table_name().map(str::to_string)
    }

    pub fn select_rows(&self, table_name: &str, column: &str, value: &str) -> Selection {
        self.inner.read().select_rows(table_name, column, value)
    }
}

impl From<Database> for SharedDatabase {
    fn from(db: Database) -> Self {
        Self {
            inner: Arc::new(RwLock::new(db)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::thread;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_concurrent_selects() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "k,v").unwrap();
        for i in 0..100 {
            writeln!(file, "{},{}", i % 10, i).unwrap();
        }

        let db = SharedDatabase::with_config(DatabaseConfig::new(3).unwrap());
        db.load_table("t", file.path()).unwrap();
        db.create_index("k").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let db = db.clone();
                thread::spawn(move || {
                    let key = (t % 10).to_string();
                    let selection = db.select_rows("t", "k", &key);
                    assert_eq!(selection.rows.len(), 10);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_clones_share_state() {
        let db = SharedDatabase::new();
        let other = db.clone();

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "a,b\n1,2").unwrap();
        db.load_table("t", file.path()).unwrap();

        assert_eq!(other.table_name().as_deref(), Some("t"));
        other.create_index("a").unwrap();
        assert!(db.has_index("a"));
    }
}
