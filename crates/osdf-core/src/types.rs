//! Column type tags, permissions, comparison kinds and sort directions.

use std::cmp::Ordering;
use std::fmt;

/// The scalar type stored in a column.
///
/// The set is closed: every [`Datum`](crate::Datum) and every
/// [`Column`](crate::Column) carries exactly one of these tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataType {
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// UTF-8 string.
    String,
}

impl DataType {
    /// All tags in declaration order.
    pub const ALL: [DataType; 7] = [
        DataType::Int8,
        DataType::Int16,
        DataType::Int32,
        DataType::Int64,
        DataType::Float,
        DataType::Double,
        DataType::String,
    ];

    /// Short lowercase name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a column accepts writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Values may be appended and overwritten.
    #[default]
    ReadWrite,
    /// Values may only be read. Row appends into a table holding a
    /// read-only column are rejected as a whole.
    ReadOnly,
}

/// Relation evaluated between a column value and a threshold when slicing.
///
/// Reads as `value <op> threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `value == threshold`
    Equal,
    /// `value != threshold`
    NotEqual,
    /// `value < threshold`
    LessThan,
    /// `value <= threshold`
    LessThanOrEqual,
    /// `value > threshold`
    GreaterThan,
    /// `value >= threshold`
    GreaterThanOrEqual,
}

impl Comparison {
    /// Evaluate the relation given how `value` orders against `threshold`.
    ///
    /// `None` means the pair is unordered (a NaN is involved); only
    /// [`Comparison::NotEqual`] holds in that case.
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        let Some(ordering) = ordering else {
            return self == Self::NotEqual;
        };
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
            Self::LessThan => ordering == Ordering::Less,
            Self::LessThanOrEqual => ordering != Ordering::Greater,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

/// Direction of a column sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest value first.
    #[default]
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortOrder {
    /// Orient an ascending comparison result for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}
