//! Capability traits shared by tables and views of both layouts.
//!
//! Layout-specific storage implements [`HasColumns`] and [`HasRows`]; the
//! schema checks, column extraction, slicing and rendering in
//! [`functions`](crate::functions) and in `osdf-frame` are written once
//! against these traits.

use std::borrow::Cow;

use crate::datum::Datum;
use crate::error::FrameError;
use crate::id::RowId;
use crate::metadata::ColumnMetadata;
use crate::types::DataType;

/// Read access to a schema.
pub trait HasColumns {
    /// The column descriptors.
    fn column_metadata(&self) -> &ColumnMetadata;

    /// Number of columns.
    fn column_count(&self) -> usize {
        self.column_metadata().len()
    }

    /// Whether a column with this name exists.
    fn has_column(&self, name: &str) -> bool {
        self.column_metadata().index_of(name).is_some()
    }

    /// Declared type of the named column.
    fn column_type(&self, name: &str) -> Option<DataType> {
        let meta = self.column_metadata();
        meta.index_of(name).map(|i| meta.data_type(i))
    }

    /// Position of the named column, or [`FrameError::ColumnNotFound`].
    fn column_index(&self, name: &str) -> Result<usize, FrameError> {
        self.column_metadata()
            .index_of(name)
            .ok_or_else(|| FrameError::column_not_found(name))
    }
}

/// Positional read access to rows.
///
/// Positions run from 0 to `row_count() - 1` in the container's current
/// order. Out-of-range positions panic.
pub trait HasRows {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Id of the row at `position`.
    fn row_id(&self, position: usize) -> RowId;

    /// The cell at (`position`, `column`). Row-major storage lends it,
    /// column-major storage copies it out.
    fn datum(&self, position: usize, column: usize) -> Cow<'_, Datum>;
}
