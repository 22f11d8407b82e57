//! Table layer - the single loaded table and the queries against it.
//!
//! # Components
//! - [`Database`] - Loads a table, manages its column indexes, selects rows
//! - [`SharedDatabase`] - Lock-protected handle for use across threads
//! - [`Table`] - Header, column mapping and rows of the loaded table
//! - [`loader`] - Delimited file reader

mod data;
mod database;
pub mod loader;
mod shared;

pub use data::Table;
pub use database::{Database, Selection};
pub use shared::SharedDatabase;

/// One row of a table: a value per column, all kept as text.
pub type Row = Vec<String>;
