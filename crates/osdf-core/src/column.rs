//! Typed column storage for the column-major layout.
//!
//! A [`Column`] is one homogeneous vector per schema entry. Column-major
//! tables hand their columns out as [`ColumnHandle`]s so views can alias
//! the storage instead of copying it; the last holder frees it.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use crate::datum::{Datum, DatumValue};
use crate::error::FrameError;
use crate::types::DataType;

/// Shared, reference-counted handle to a column.
pub type ColumnHandle = Rc<RefCell<Column>>;

/// A homogeneous sequence of values of one [`DataType`].
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// Signed 8-bit integers.
    Int8(Vec<i8>),
    /// Signed 16-bit integers.
    Int16(Vec<i16>),
    /// Signed 32-bit integers.
    Int32(Vec<i32>),
    /// Signed 64-bit integers.
    Int64(Vec<i64>),
    /// 32-bit floats.
    Float(Vec<f32>),
    /// 64-bit floats.
    Double(Vec<f64>),
    /// UTF-8 strings.
    String(Vec<String>),
}

/// Run `$body` with `$values` bound to the inner vector, whatever the variant.
macro_rules! each_variant {
    ($column:expr, $values:ident => $body:expr) => {
        match $column {
            Column::Int8($values) => $body,
            Column::Int16($values) => $body,
            Column::Int32($values) => $body,
            Column::Int64($values) => $body,
            Column::Float($values) => $body,
            Column::Double($values) => $body,
            Column::String($values) => $body,
        }
    };
}

impl Column {
    /// An empty column of the given type.
    pub fn new(data_type: DataType) -> Self {
        match data_type {
            DataType::Int8 => Self::Int8(Vec::new()),
            DataType::Int16 => Self::Int16(Vec::new()),
            DataType::Int32 => Self::Int32(Vec::new()),
            DataType::Int64 => Self::Int64(Vec::new()),
            DataType::Float => Self::Float(Vec::new()),
            DataType::Double => Self::Double(Vec::new()),
            DataType::String => Self::String(Vec::new()),
        }
    }

    /// Wrap this column in a fresh shared handle.
    pub fn into_handle(self) -> ColumnHandle {
        Rc::new(RefCell::new(self))
    }

    /// The type of every value in the column.
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

    /// Number of values.
    pub fn len(&self) -> usize {
        each_variant!(self, values => values.len())
    }

    /// Whether the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the value at `position` out as a [`Datum`].
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn datum(&self, position: usize) -> Datum {
        each_variant!(self, values => values[position].clone().into_datum())
    }

    /// Borrow the values as `T`, or `None` if the column holds another type.
    pub fn values<T: DatumValue>(&self) -> Option<&[T]> {
        T::from_column(self).map(Vec::as_slice)
    }

    /// Mutably borrow the value vector as `T`.
    pub fn values_mut<T: DatumValue>(&mut self) -> Option<&mut Vec<T>> {
        T::from_column_mut(self)
    }

    /// Append a value at a new trailing position.
    pub fn push(&mut self, datum: Datum) -> Result<(), FrameError> {
        each_variant!(self, values => push_typed(values, datum))
    }

    /// Remove the value at `position`, shifting later values down.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn remove(&mut self, position: usize) {
        each_variant!(self, values => {
            values.remove(position);
        })
    }

    /// Exchange the values at two positions.
    pub fn swap(&mut self, a: usize, b: usize) {
        each_variant!(self, values => values.swap(a, b))
    }

    /// Three-way comparison of the values at two positions.
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        each_variant!(self, values => values[a].compare(&values[b]))
    }

    /// A new column holding the values at `positions`, in that order.
    pub fn select(&self, positions: &[usize]) -> Column {
        each_variant!(self, values => select_typed(values, positions))
    }

    /// Drop every value, keeping the type.
    pub fn clear(&mut self) {
        each_variant!(self, values => values.clear())
    }

    /// Widest printed value, or 0 for an empty column.
    pub fn max_display_width(&self) -> usize {
        (0..self.len())
            .map(|i| self.datum(i).display_width())
            .max()
            .unwrap_or(0)
    }
}

impl Column {
    /// Collect `datums` into a new column of `data_type`.
    ///
    /// Datums of any other type are skipped, so callers pass cells that
    /// were already checked against the schema.
    pub fn from_datums(data_type: DataType, datums: impl IntoIterator<Item = Datum>) -> Self {
        let mut column = Self::new(data_type);
        each_variant!(&mut column, values => extend_typed(values, datums));
        column
    }
}

impl<T: DatumValue> From<Vec<T>> for Column {
    fn from(values: Vec<T>) -> Self {
        T::into_column(values)
    }
}

fn push_typed<T: DatumValue>(values: &mut Vec<T>, datum: Datum) -> Result<(), FrameError> {
    let found = datum.data_type();
    let value = T::try_from_datum(datum).map_err(|_| FrameError::DatumTypeMismatch {
        expected: T::DATA_TYPE,
        found,
    })?;
    values.push(value);
    Ok(())
}

fn extend_typed<T: DatumValue>(values: &mut Vec<T>, datums: impl IntoIterator<Item = Datum>) {
    values.extend(datums.into_iter().filter_map(|d| T::try_from_datum(d).ok()));
}

fn select_typed<T: DatumValue>(values: &[T], positions: &[usize]) -> Column {
    T::into_column(positions.iter().map(|&p| values[p].clone()).collect())
}
