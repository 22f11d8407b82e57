//! B-tree node layout and the structural primitives insertion relies on.
//!
//! A node is either a leaf or an internal node:
//! ```text
//!            Internal { keys: [12, 20] }
//!           /              |             \
//!   Leaf [5, 6, 10]   Leaf [12, 15]   Leaf [20, 30]
//!   entries: rows     entries: rows   entries: rows
//! ```
//! Values live only in leaves. Internal keys are routing separators, each a
//! copy of the smallest key in the subtree to its right, so
//! `children[i] < keys[i] <= children[i + 1]`.

use std::borrow::Borrow;

/// One level of a [`BTree`](super::BTree).
#[derive(Debug, Clone)]
pub(crate) enum Node<K, V> {
    Leaf {
        /// Strictly increasing keys.
        keys: Vec<K>,
        /// `entries[i]` holds every value inserted under `keys[i]`, oldest first.
        entries: Vec<Vec<V>>,
    },
    Internal {
        /// Routing separators.
        keys: Vec<K>,
        /// Always `keys.len() + 1` children.
        children: Vec<Node<K, V>>,
    },
}

/// Maximum number of keys a node may hold for the given order.
#[inline]
pub(crate) fn max_keys(order: usize) -> usize {
    2 * order - 1
}

/// Binary search for `key` in a sorted key slice.
///
/// Returns `(position, found)`. When `found` is true, `keys[position]` equals
/// `key`; otherwise `position` is where `key` would be inserted.
pub(crate) fn locate<K, Q>(keys: &[K], key: &Q) -> (usize, bool)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match keys.binary_search_by(|probe| probe.borrow().cmp(key)) {
        Ok(pos) => (pos, true),
        Err(pos) => (pos, false),
    }
}

/// Index of the child whose key range contains `key`.
///
/// An exact match on a separator goes right, since the separator is the
/// smallest key of the right subtree.
#[inline]
pub(crate) fn route<K, Q>(keys: &[K], key: &Q) -> usize
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match locate(keys, key) {
        (pos, true) => pos + 1,
        (pos, false) => pos,
    }
}

impl<K, V> Node<K, V> {
    /// An empty leaf. This is the root of an empty tree.
    pub(crate) fn new_leaf() -> Self {
        Node::Leaf {
            keys: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn keys(&self) -> &[K] {
        match self {
            Node::Leaf { keys, .. } | Node::Internal { keys, .. } => keys,
        }
    }

    /// Children of an internal node; empty for a leaf.
    pub(crate) fn children(&self) -> &[Node<K, V>] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Internal { children, .. } => children,
        }
    }

    /// True when the node holds exactly `2 * order - 1` keys.
    #[inline]
    pub(crate) fn is_full(&self, order: usize) -> bool {
        self.keys().len() == max_keys(order)
    }
}

impl<K: Ord + Clone, V> Node<K, V> {
    /// Split this full node in place.
    ///
    /// `self` keeps the lower half. Returns the separator for the parent and
    /// the new right sibling.
    ///
    /// - Leaf: the right sibling starts at the median key, and the separator
    ///   is a copy of it. The median's values move with it unchanged.
    /// - Internal: the median key moves up; keys and children above it go to
    ///   the right sibling.
    fn split(&mut self, order: usize) -> (K, Node<K, V>) {
        debug_assert!(self.is_full(order), "only full nodes are split");
        match self {
            Node::Leaf { keys, entries } => {
                let right_keys = keys.split_off(order - 1);
                let right_entries = entries.split_off(order - 1);
                let separator = right_keys[0].clone();
                (
                    separator,
                    Node::Leaf {
                        keys: right_keys,
                        entries: right_entries,
                    },
                )
            }
            Node::Internal { keys, children } => {
                let right_keys = keys.split_off(order);
                let right_children = children.split_off(order);
                let median = keys.remove(order - 1);
                (
                    median,
                    Node::Internal {
                        keys: right_keys,
                        children: right_children,
                    },
                )
            }
        }
    }

    /// Split the full child at `index` and hook the new sibling in beside it.
    ///
    /// # Panics
    /// Panics if `self` is a leaf.
    pub(crate) fn split_child(&mut self, index: usize, order: usize) {
        let Node::Internal { keys, children } = self else {
            panic!("split_child called on a leaf");
        };
        split_child_of(keys, children, index, order);
    }

    /// Insert into a subtree whose root is known not to be full.
    ///
    /// Returns true when `key` was new to the tree.
    pub(crate) fn insert_non_full(&mut self, key: K, value: V, order: usize) -> bool {
        match self {
            Node::Leaf { keys, entries } => match locate(keys, &key) {
                (pos, true) => {
                    entries[pos].push(value);
                    false
                }
                (pos, false) => {
                    keys.insert(pos, key);
                    entries.insert(pos, vec![value]);
                    true
                }
            },
            Node::Internal { keys, children } => {
                let mut index = route(keys, &key);
                if children[index].is_full(order) {
                    split_child_of(keys, children, index, order);
                    if key >= keys[index] {
                        index += 1;
                    }
                }
                children[index].insert_non_full(key, value, order)
            }
        }
    }
}

fn split_child_of<K: Ord + Clone, V>(
    keys: &mut Vec<K>,
    children: &mut Vec<Node<K, V>>,
    index: usize,
    order: usize,
) {
    let (separator, sibling) = children[index].split(order);
    keys.insert(index, separator);
    children.insert(index + 1, sibling);
}
