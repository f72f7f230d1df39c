//! The [`Frame`] and [`View`] contracts implemented by both layouts.

use std::cmp::Ordering;
use std::fmt;

use osdf_core::{
    ColumnMetadatum, Comparison, DataRow, DataType, Datum, DatumValue, FrameError, NewRow,
    Permission, RowId, SortOrder,
};

/// An owning, mutable table.
///
/// Every fallible operation validates fully before touching the table: an
/// `Err` means nothing changed. Operations that move, add or drop rows or
/// columns advance the table's generation so existing views resynchronise
/// on their next read.
pub trait Frame: fmt::Display + Sized {
    /// The view type handed out by [`Frame::make_view`].
    type View: View;

    /// Replace the schema. Only allowed while the table holds no rows.
    fn config_columns(&mut self, columns: Vec<ColumnMetadatum>) -> Result<(), FrameError>;

    /// Append a column holding `values`.
    ///
    /// On a table without columns this also creates one row per value,
    /// with ids `1..=values.len()`. Otherwise `values.len()` must equal
    /// the row count.
    fn append_new_column<T: DatumValue>(
        &mut self,
        name: &str,
        values: Vec<T>,
    ) -> Result<(), FrameError>;

    /// Append one row, giving it the next free id.
    fn append_new_row(&mut self, row: NewRow) -> Result<(), FrameError>;

    /// Copy the named column out in row order.
    fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError>;

    /// Overwrite every value of the named column.
    ///
    /// Does not advance the generation: views keep their rows and read the
    /// new values, and pick up the new column widths on their next read.
    fn set_column<T: DatumValue>(&mut self, name: &str, values: Vec<T>) -> Result<(), FrameError>;

    /// Mark the named column read-write or read-only. Views see the new
    /// permission on their next read.
    fn set_column_permission(
        &mut self,
        name: &str,
        permission: Permission,
    ) -> Result<(), FrameError>;

    /// Whether a column with this name exists.
    fn has_column(&self, name: &str) -> bool;

    /// Declared type of the named column.
    fn column_type(&self, name: &str) -> Option<DataType>;

    /// Remove the named column and its values.
    fn remove_column(&mut self, name: &str) -> Result<(), FrameError>;

    /// Remove the column at `index`.
    fn remove_column_at(&mut self, index: usize) -> Result<(), FrameError>;

    /// Remove the row at position `index`. Other rows keep their ids.
    fn remove_row(&mut self, index: usize) -> Result<(), FrameError>;

    /// Stably sort rows by the named column.
    fn sort_rows(&mut self, name: &str, order: SortOrder) -> Result<(), FrameError> {
        self.sort_rows_by(name, move |a, b| order.apply(a.compare(b)))
    }

    /// Stably sort rows by the named column under a custom comparator.
    fn sort_rows_by<F>(&mut self, name: &str, cmp: F) -> Result<(), FrameError>
    where
        F: FnMut(&Datum, &Datum) -> Ordering;

    /// A new, independent table holding the rows whose value in `name`
    /// satisfies `value <comparison> threshold`.
    fn slice_rows<T: DatumValue>(
        &self,
        name: &str,
        comparison: Comparison,
        threshold: T,
    ) -> Result<Self, FrameError>;

    /// A new, independent table holding the rows accepted by `predicate`.
    fn slice_rows_where<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&DataRow) -> bool;

    /// Drop every row and column. Ids restart from 1.
    fn clear(&mut self);

    /// A live view over every row, in table order.
    fn make_view(&self) -> Self::View;

    /// Row ids in table order.
    fn ids(&self) -> Vec<RowId>;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Write the table to stdout.
    fn print(&self) {
        print!("{self}");
    }
}

/// A read-only window over a table's rows.
///
/// Reads first resynchronise with the owner when it has changed
/// structurally since the view last looked; resynchronising restores the
/// owner's full row set in owner order and discards the view's own slice
/// and sort.
pub trait View: fmt::Display + Sized {
    /// Copy the named column out in view order.
    fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError>;

    /// Whether a column with this name exists.
    fn has_column(&self, name: &str) -> bool;

    /// Declared type of the named column.
    fn column_type(&self, name: &str) -> Option<DataType>;

    /// Number of rows visible through the view.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Row ids in view order.
    fn ids(&self) -> Vec<RowId>;

    /// A new view over the same owner holding the rows whose value in
    /// `name` satisfies `value <comparison> threshold`.
    fn slice_rows<T: DatumValue>(
        &self,
        name: &str,
        comparison: Comparison,
        threshold: T,
    ) -> Result<Self, FrameError>;

    /// A new view over the same owner holding the rows accepted by
    /// `predicate`.
    ///
    /// The predicate sees copies of the view's rows and may touch the
    /// owner. If it changes the owner structurally the result holds the
    /// owner's full row set, as any stale view would.
    fn slice_rows_where<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&DataRow) -> bool;

    /// Stably reorder the view's rows by the named column. The owner is
    /// untouched.
    fn sort_rows(&mut self, name: &str, order: SortOrder) -> Result<(), FrameError> {
        self.sort_rows_by(name, move |a, b| order.apply(a.compare(b)))
    }

    /// Stably reorder the view's rows under a custom comparator.
    ///
    /// The comparator runs on a copy of the column, so it may touch the
    /// owner. A structural change made that way resets the view on its
    /// next read.
    fn sort_rows_by<F>(&mut self, name: &str, cmp: F) -> Result<(), FrameError>
    where
        F: FnMut(&Datum, &Datum) -> Ordering;

    /// Whether the owning table is still alive.
    fn is_attached(&self) -> bool;

    /// Write the view to stdout.
    fn print(&self) {
        print!("{self}");
    }
}
