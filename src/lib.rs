//! tabledb - A single-table in-memory store with B-tree secondary indexes.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            tabledb                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Table Layer (table/)                        │   │
//! │  │   Database: load_table / create_index / select_rows      │   │
//! │  │   SharedDatabase: RwLock-serialized handle               │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                   ↓ insert(value, RowId) / search(value)        │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/)                        │   │
//! │  │   BTree<K, V>: in-memory, exact-match, duplicate keys    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (RowId, Error, config)
//! - [`index`] - Index structures (B-tree)
//! - [`table`] - Table loading and row selection
//!
//! # Quick Start
//! ```no_run
//! use tabledb::Database;
//!
//! let mut db = Database::new();
//! db.load_table("students", "students.csv").unwrap();
//! db.create_index("grade").unwrap();
//!
//! let selection = db.select_rows("students", "grade", "HD");
//! println!("{} rows", selection.rows.len());
//! ```

pub mod common;
pub mod index;
pub mod table;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_INDEX_ORDER, MIN_INDEX_ORDER};
pub use common::{DatabaseConfig, Error, Result, RowId};

pub use index::BTree;
pub use table::{Database, Row, Selection, SharedDatabase, Table};
