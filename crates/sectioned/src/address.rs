//! Positional addressing of rows.
//!
//! An [`Address`] names a row by where it sits rather than by what it is:
//! the index of its section in the sequence and its index within that
//! section's rows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The `(section, row)` position of a row in a
/// [`GroupedSequence`](crate::GroupedSequence).
///
/// Addresses are plain values. They are not updated when the sequence
/// changes, so an address obtained before a mutation may point somewhere
/// else (or nowhere) afterwards.
///
/// Addresses order by section first, then by row, which matches the order
/// in which a list view displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    /// Position of the section within the sequence.
    pub section: usize,
    /// Position of the row within its section.
    pub row: usize,
}

impl Address {
    /// Creates an address.
    #[inline]
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// Returns the section index.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// Returns the row index.
    #[inline]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Creates an address in the same section at a different row.
    #[inline]
    pub const fn sibling_at_row(&self, row: usize) -> Self {
        Self::new(self.section, row)
    }

    /// Returns the address of the previous row in the same section, if any.
    pub fn previous_row(&self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| self.sibling_at_row(row))
    }
}

impl From<(usize, usize)> for Address {
    fn from((section, row): (usize, usize)) -> Self {
        Self::new(section, row)
    }
}

impl From<Address> for (usize, usize) {
    fn from(address: Address) -> Self {
        (address.section, address.row)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let address = Address::new(2, 5);
        assert_eq!(address.section(), 2);
        assert_eq!(address.row(), 5);
        assert_eq!(address.to_string(), "(2, 5)");
    }

    #[test]
    fn test_tuple_conversion() {
        let address: Address = (1, 3).into();
        assert_eq!(address, Address::new(1, 3));
        let (section, row): (usize, usize) = address.into();
        assert_eq!((section, row), (1, 3));
    }

    #[test]
    fn test_siblings() {
        let address = Address::new(1, 0);
        assert_eq!(address.sibling_at_row(4), Address::new(1, 4));
        assert_eq!(address.previous_row(), None);
        assert_eq!(Address::new(1, 2).previous_row(), Some(Address::new(1, 1)));
    }

    #[test]
    fn test_ordering() {
        let a = Address::new(0, 5);
        let b = Address::new(1, 0);
        let c = Address::new(1, 1);

        assert!(a < b); // Section 0 < Section 1
        assert!(b < c); // Same section, Row 0 < Row 1
    }
}
