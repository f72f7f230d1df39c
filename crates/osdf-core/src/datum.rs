//! The type-tagged table cell and the [`DatumValue`] bridge to scalars.

use std::cmp::Ordering;
use std::fmt;

use crate::column::Column;
use crate::error::FrameError;
use crate::types::DataType;

/// A single table cell holding exactly one scalar of a fixed type.
///
/// The variant is chosen at construction and never changes: typed writes
/// through [`Datum::set`] must match it.
#[derive(Clone, Debug, PartialEq)]
pub enum Datum {
    /// Signed 8-bit integer.
    Int8(i8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// 32-bit float.
    Float(f32),
    /// 64-bit float.
    Double(f64),
    /// UTF-8 string.
    String(String),
}

impl Datum {
    /// The type tag of the stored value.
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Int8(_) => DataType::Int8,
            Self::Int16(_) => DataType::Int16,
            Self::Int32(_) => DataType::Int32,
            Self::Int64(_) => DataType::Int64,
            Self::Float(_) => DataType::Float,
            Self::Double(_) => DataType::Double,
            Self::String(_) => DataType::String,
        }
    }

    /// Borrow the value as `T`, or `None` if the datum holds another type.
    pub fn get<T: DatumValue>(&self) -> Option<&T> {
        T::from_datum(self)
    }

    /// Overwrite the value, keeping the type tag.
    pub fn set<T: DatumValue>(&mut self, value: T) -> Result<(), FrameError> {
        let expected = self.data_type();
        match T::from_datum_mut(self) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FrameError::DatumTypeMismatch {
                expected,
                found: T::DATA_TYPE,
            }),
        }
    }

    /// Three-way comparison defining a total order over all datums.
    ///
    /// Values of one type compare by value (floats by IEEE total order,
    /// strings lexicographically); values of different types order by
    /// their [`DataType`] tag.
    pub fn compare(&self, other: &Datum) -> Ordering {
        match (self, other) {
            (Self::Int8(a), Self::Int8(b)) => a.cmp(b),
            (Self::Int16(a), Self::Int16(b)) => a.cmp(b),
            (Self::Int32(a), Self::Int32(b)) => a.cmp(b),
            (Self::Int64(a), Self::Int64(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Double(a), Self::Double(b)) => a.total_cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            _ => self.data_type().cmp(&other.data_type()),
        }
    }

    /// Number of characters the value occupies when printed.
    pub fn display_width(&self) -> usize {
        match self {
            Self::String(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int8(v) => f.pad(&v.to_string()),
            Self::Int16(v) => f.pad(&v.to_string()),
            Self::Int32(v) => f.pad(&v.to_string()),
            Self::Int64(v) => f.pad(&v.to_string()),
            Self::Float(v) => f.pad(&format!("{v:?}")),
            Self::Double(v) => f.pad(&format!("{v:?}")),
            Self::String(v) => f.pad(v),
        }
    }
}

impl From<&str> for Datum {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A scalar type that can be stored in a [`Datum`] and a [`Column`].
///
/// Implemented for exactly `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and
/// `String`; the trait is sealed so the set of column types stays closed.
pub trait DatumValue: Clone + PartialOrd + fmt::Debug + 'static + sealed::Sealed {
    /// The tag of columns holding this type.
    const DATA_TYPE: DataType;

    /// Wrap the value in a datum.
    fn into_datum(self) -> Datum;

    /// Unwrap a datum of this type, handing the datum back on mismatch.
    fn try_from_datum(datum: Datum) -> Result<Self, Datum>;

    /// Borrow the value if the datum holds this type.
    fn from_datum(datum: &Datum) -> Option<&Self>;

    /// Mutably borrow the value if the datum holds this type.
    fn from_datum_mut(datum: &mut Datum) -> Option<&mut Self>;

    /// Build a column from a vector of values without copying them.
    fn into_column(values: Vec<Self>) -> Column;

    /// Borrow the values if the column holds this type.
    fn from_column(column: &Column) -> Option<&Vec<Self>>;

    /// Mutably borrow the values if the column holds this type.
    fn from_column_mut(column: &mut Column) -> Option<&mut Vec<Self>>;

    /// Total three-way comparison, consistent with [`Datum::compare`].
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_datum_value {
    ($ty:ty, $variant:ident, $cmp:path) => {
        impl sealed::Sealed for $ty {}

        impl DatumValue for $ty {
            const DATA_TYPE: DataType = DataType::$variant;

            fn into_datum(self) -> Datum {
                Datum::$variant(self)
            }

            fn try_from_datum(datum: Datum) -> Result<Self, Datum> {
                match datum {
                    Datum::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }

            fn from_datum(datum: &Datum) -> Option<&Self> {
                match datum {
                    Datum::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_datum_mut(datum: &mut Datum) -> Option<&mut Self> {
                match datum {
                    Datum::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_column(values: Vec<Self>) -> Column {
                Column::$variant(values)
            }

            fn from_column(column: &Column) -> Option<&Vec<Self>> {
                match column {
                    Column::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn from_column_mut(column: &mut Column) -> Option<&mut Vec<Self>> {
                match column {
                    Column::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn compare(&self, other: &Self) -> Ordering {
                $cmp(self, other)
            }
        }

        impl From<$ty> for Datum {
            fn from(v: $ty) -> Self {
                Datum::$variant(v)
            }
        }
    };
}

impl_datum_value!(i8, Int8, Ord::cmp);
impl_datum_value!(i16, Int16, Ord::cmp);
impl_datum_value!(i32, Int32, Ord::cmp);
impl_datum_value!(i64, Int64, Ord::cmp);
impl_datum_value!(f32, Float, f32::total_cmp);
impl_datum_value!(f64, Double, f64::total_cmp);
impl_datum_value!(String, String, Ord::cmp);
