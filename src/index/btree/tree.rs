//! The B-tree index engine.

use std::borrow::Borrow;
use std::fmt;

use crate::common::config::{DEFAULT_INDEX_ORDER, MIN_INDEX_ORDER};
use crate::index::btree::node::{locate, route, Node};

/// An in-memory B-tree mapping each key to every value inserted under it.
///
/// Built for exact-match lookups on a single column: one tree per indexed
/// column, populated once by replaying the table's rows, then queried.
///
/// # Structure
/// - Each node holds at most `2 * order - 1` keys.
/// - Values are stored only in leaves, grouped per key in insertion order.
/// - Full nodes are split on the way down, so an insert never has to walk
///   back up the tree. The tree only grows taller when the root splits.
///
/// # Thread Safety
/// `BTree` has no internal locking. It assumes one writer at a time and no
/// reads that overlap a write; `&mut self` on [`insert`](Self::insert)
/// enforces this within safe Rust. Callers sharing a tree across threads
/// must serialize access themselves (see
/// [`SharedDatabase`](crate::table::SharedDatabase)).
///
/// # Example
/// ```
/// use tabledb::BTree;
///
/// let mut index = BTree::new(2);
/// index.insert("HD", 'A');
/// index.insert("D", 'C');
/// index.insert("HD", 'B');
///
/// assert_eq!(index.search("HD"), &['A', 'B']);
/// assert!(index.search("P").is_empty());
/// ```
pub struct BTree<K, V> {
    order: usize,
    root: Node<K, V>,
    /// Number of values stored.
    len: usize,
    /// Number of distinct keys.
    key_count: usize,
}

impl<K: Ord + Clone, V> BTree<K, V> {
    /// Create an empty tree.
    ///
    /// # Panics
    /// Panics if `order < 2`.
    pub fn new(order: usize) -> Self {
        assert!(
            order >= MIN_INDEX_ORDER,
            "order must be >= {}",
            MIN_INDEX_ORDER
        );

        Self {
            order,
            root: Node::new_leaf(),
            len: 0,
            key_count: 0,
        }
    }

    /// Insert `value` under `key`.
    ///
    /// If `key` is already present, `value` is appended after the values
    /// inserted before it; nothing is overwritten.
    pub fn insert(&mut self, key: K, value: V) {
        if self.root.is_full(self.order) {
            let old_root = std::mem::replace(&mut self.root, Node::new_leaf());
            self.root = Node::Internal {
                keys: Vec::new(),
                children: vec![old_root],
            };
            self.root.split_child(0, self.order);
        }

        if self.root.insert_non_full(key, value, self.order) {
            self.key_count += 1;
        }
        self.len += 1;
    }
}

impl<K, V> BTree<K, V> {
    /// Every value stored under `key`, oldest first.
    ///
    /// Returns an empty slice if `key` was never inserted.
    pub fn search<Q>(&self, key: &Q) -> &[V]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = &self.root;
        loop {
            match node {
                Node::Internal { keys, children } => node = &children[route(keys, key)],
                Node::Leaf { keys, entries } => {
                    return match locate(keys, key) {
                        (pos, true) => &entries[pos],
                        (_, false) => &[],
                    };
                }
            }
        }
    }

    /// True if at least one value is stored under `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.search(key).is_empty()
    }

    /// The order this tree was created with.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of values stored, counting duplicates under one key.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct keys.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    /// Number of levels, counting the root. An empty tree has height 1.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut node = &self.root;
        while let Some(first) = node.children().first() {
            node = first;
            height += 1;
        }
        height
    }
}

impl<K: Ord + Clone, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_ORDER)
    }
}

impl<K, V> fmt::Debug for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BTree")
            .field("order", &self.order)
            .field("len", &self.len)
            .field("key_count", &self.key_count)
            .field("height", &self.height())
            .finish()
    }
}
