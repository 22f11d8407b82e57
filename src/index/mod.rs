//! Index structures.
//!
//! Currently implements:
//! - [`BTree`] - In-memory B-tree mapping a column value to its rows

pub mod btree;

pub use btree::BTree;
