//! B-tree index tests against the public API.

use tabledb::BTree;

/// Keys inserted out of order into a small tree all come back.
#[test]
fn test_mixed_insertion_order() {
    let mut index = BTree::new(2);
    let keys = [10, 20, 5, 6, 12, 30, 7];
    for (row, key) in keys.iter().enumerate() {
        index.insert(*key, row);
    }

    assert_eq!(index.search(&6), &[3]);
    assert!(index.search(&99).is_empty());
    for (row, key) in keys.iter().enumerate() {
        assert_eq!(index.search(key), &[row], "key {}", key);
    }
    assert!(index.height() >= 2);
}

/// Duplicate keys keep every row, oldest first.
#[test]
fn test_duplicate_rows_in_insertion_order() {
    let mut index = BTree::new(2);
    index.insert("HD".to_string(), "A");
    index.insert("D".to_string(), "X");
    index.insert("HD".to_string(), "B");

    assert_eq!(index.search("HD"), &["A", "B"]);
    assert_eq!(index.len(), 3);
    assert_eq!(index.key_count(), 2);
}

/// `2 * order` distinct keys force exactly one root split.
#[test]
fn test_split_at_two_order_keys() {
    let order = 3;
    let mut index = BTree::new(order);

    for key in 0..(2 * order - 1) {
        index.insert(key, key);
    }
    assert_eq!(index.height(), 1);

    index.insert(2 * order - 1, 2 * order - 1);
    assert_eq!(index.height(), 2);
    for key in 0..2 * order {
        assert_eq!(index.search(&key), &[key]);
    }
}

/// Descending inserts exercise the left edge of every split.
#[test]
fn test_descending_inserts() {
    let mut index = BTree::new(2);
    for key in (0..500).rev() {
        index.insert(key, key * 2);
    }

    assert_eq!(index.key_count(), 500);
    for key in 0..500 {
        assert_eq!(index.search(&key), &[key * 2]);
    }
    assert!(index.search(&500).is_empty());
    assert!(index.search(&-1).is_empty());
}

/// String keys order lexicographically, not numerically.
#[test]
fn test_string_keys_lexicographic() {
    let mut index = BTree::new(2);
    for value in ["9", "10", "100", "2", "20"] {
        index.insert(value.to_string(), value.len());
    }

    assert_eq!(index.search("10"), &[2]);
    assert_eq!(index.search("9"), &[1]);
    assert!(index.search("1").is_empty());
}
