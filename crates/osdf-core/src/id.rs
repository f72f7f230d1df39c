//! Strongly-typed row identifiers and the view-synchronisation [`Generation`].

use std::fmt;

/// Identifies a row within one table.
///
/// Assigned at row creation as `max existing id + 1` and never renumbered:
/// removing a row leaves the ids of every other row untouched. Uniqueness
/// within a table matters, density does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub i64);

impl RowId {
    /// The id preceding the first row of an empty table.
    pub const ZERO: RowId = RowId(0);

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Number of characters needed to print this id.
    pub fn display_width(self) -> usize {
        self.0.to_string().len()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for RowId {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

/// Structural revision of a table.
///
/// Bumped by every mutation that can move, add or drop rows or columns
/// (append, remove, sort, reconfigure, clear). Views record the generation
/// they were synchronised at and resynchronise when the owner's differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_next_increments() {
        assert_eq!(RowId::ZERO.next(), RowId(1));
        assert_eq!(RowId(41).next(), RowId(42));
    }

    #[test]
    fn row_id_display_width_counts_sign() {
        assert_eq!(RowId(7).display_width(), 1);
        assert_eq!(RowId(1234).display_width(), 4);
        assert_eq!(RowId(-12).display_width(), 3);
    }

    #[test]
    fn row_id_display_honours_width() {
        assert_eq!(format!("{:<4}|", RowId(12)), "12  |");
    }

    #[test]
    fn generation_wraps_instead_of_overflowing() {
        assert_eq!(Generation(u64::MAX).next(), Generation(0));
        assert!(Generation(1) > Generation(0));
    }
}
