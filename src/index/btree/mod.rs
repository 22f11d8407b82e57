//! B-tree index implementation.
//!
//! An in-memory B-tree for exact-match lookups on one column:
//! - `node` - Node layout, key location and splitting
//! - [`BTree`] - The index engine (insert, search)

mod node;
mod tree;

pub use tree::BTree;
