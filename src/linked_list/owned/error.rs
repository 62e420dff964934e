//! Error types for positional list operations.

use core::fmt;

/// Index falls outside the bound of the attempted operation.
///
/// Insertion accepts indices in `0..=len`, removal in `0..len`. The list is
/// left unmodified by the failing call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was supplied.
    pub index: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of bounds for length {}",
            self.index, self.len
        )
    }
}

impl core::error::Error for IndexOutOfBounds {}

/// Removal was attempted on an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSuchElement;

impl fmt::Display for NoSuchElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("list is empty")
    }
}

impl core::error::Error for NoSuchElement {}
