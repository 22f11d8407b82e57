//! Row identifier type.

use std::fmt;

/// Identifies a row in the loaded table.
///
/// Using `usize` because:
/// 1. Rows are stored in `Vec<Row>`
/// 2. Direct indexing without casting: `rows[row_id.0]`
///
/// Indexes store `RowId`s rather than copies of the rows.
///
/// # Example
/// ```
/// use tabledb::RowId;
///
/// let row_id = RowId::new(5);
/// assert_eq!(row_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl RowId {
    /// Create a new RowId.
    #[inline]
    pub fn new(id: usize) -> Self {
        RowId(id)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_id_equality() {
        assert_eq!(RowId::new(5), RowId::new(5));
        assert_ne!(RowId::new(5), RowId::new(6));
    }

    #[test]
    fn test_row_id_ordering() {
        assert!(RowId::new(1) < RowId::new(2));
    }

    #[test]
    fn test_row_id_display() {
        assert_eq!(format!("{}", RowId::new(42)), "Row(42)");
    }
}
