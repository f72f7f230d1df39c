//! Row storage for the row-major layout and the row-append builder.

use smallvec::SmallVec;

use crate::datum::Datum;
use crate::id::RowId;

/// Inline capacity for row cells before spilling to the heap.
const INLINE_CELLS: usize = 8;

/// An ordered sequence of cells plus the row's immutable id.
///
/// Cell access is positional. Indices at or past [`DataRow::size_cols`]
/// are a caller defect and panic.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    id: RowId,
    cells: SmallVec<[Datum; INLINE_CELLS]>,
}

impl DataRow {
    /// An empty row with the given id.
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            cells: SmallVec::new(),
        }
    }

    /// A row with the given id and cells.
    pub fn with_columns(id: RowId, cells: impl IntoIterator<Item = Datum>) -> Self {
        Self {
            id,
            cells: cells.into_iter().collect(),
        }
    }

    /// Append a cell at the end of the row.
    pub fn push(&mut self, datum: Datum) {
        self.cells.push(datum);
    }

    /// The cell at `index`.
    pub fn column(&self, index: usize) -> &Datum {
        &self.cells[index]
    }

    /// Mutable access to the cell at `index`.
    pub fn column_mut(&mut self, index: usize) -> &mut Datum {
        &mut self.cells[index]
    }

    /// Number of cells.
    pub fn size_cols(&self) -> usize {
        self.cells.len()
    }

    /// The row's id.
    pub fn id(&self) -> RowId {
        self.id
    }

    /// All cells in column order.
    pub fn columns(&self) -> &[Datum] {
        &self.cells
    }

    /// Remove the cell at `index`, shifting later cells down.
    pub fn remove_column(&mut self, index: usize) -> Datum {
        self.cells.remove(index)
    }
}

/// Values for one row append, in column order.
///
/// Built with [`NewRow::with`] or the [`row!`](crate::row!) macro and
/// consumed by `append_new_row`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewRow {
    values: Vec<Datum>,
}

impl NewRow {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value.
    pub fn with(mut self, value: impl Into<Datum>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no value has been added.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in order.
    pub fn values(&self) -> &[Datum] {
        &self.values
    }

    /// Take the values out.
    pub fn into_values(self) -> Vec<Datum> {
        self.values
    }
}

/// Build a [`NewRow`] from a list of values convertible into
/// [`Datum`].
///
/// ```
/// use osdf_core::{row, Datum};
///
/// let r = row![-73.0, "00010", 66];
/// assert_eq!(r.values(), &[Datum::Double(-73.0), Datum::from("00010"), Datum::Int32(66)]);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::row::NewRow::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::row::NewRow::new()$(.with($value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_positional() {
        let mut row = DataRow::new(RowId(3));
        row.push(Datum::Int32(1));
        row.push(Datum::from("x"));
        assert_eq!(row.size_cols(), 2);
        assert_eq!(row.column(1), &Datum::from("x"));
        assert_eq!(row.id(), RowId(3));

        *row.column_mut(0) = Datum::Int32(2);
        assert_eq!(row.columns()[0], Datum::Int32(2));
    }

    #[test]
    fn remove_column_shifts_later_cells() {
        let mut row = DataRow::with_columns(
            RowId(1),
            [Datum::Int8(1), Datum::Int8(2), Datum::Int8(3)],
        );
        assert_eq!(row.remove_column(1), Datum::Int8(2));
        assert_eq!(row.columns(), &[Datum::Int8(1), Datum::Int8(3)]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_cell_panics() {
        let row = DataRow::new(RowId(1));
        let _ = row.column(0);
    }

    #[test]
    fn swapping_rows_keeps_ids_with_content() {
        let mut rows = vec![
            DataRow::with_columns(RowId(1), [Datum::Int64(10)]),
            DataRow::with_columns(RowId(2), [Datum::Int64(20)]),
        ];
        rows.swap(0, 1);
        assert_eq!(rows[0].id(), RowId(2));
        assert_eq!(rows[0].column(0), &Datum::Int64(20));
    }

    #[test]
    fn row_macro_converts_each_value() {
        let r = crate::row![-73.0, 128.0f32, "00010", 66, 1710460300i64];
        assert_eq!(
            r.values(),
            &[
                Datum::Double(-73.0),
                Datum::Float(128.0),
                Datum::from("00010"),
                Datum::Int32(66),
                Datum::Int64(1710460300),
            ]
        );
        assert!(crate::row![].is_empty());
    }
}
