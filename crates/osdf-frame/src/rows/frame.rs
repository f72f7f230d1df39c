//! The row-major table.

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use osdf_core::{
    ColumnMetadata, ColumnMetadatum, Comparison, DataRow, DataType, Datum, DatumValue,
    FrameError, Generation, HasColumns, HasRows, NewRow, Permission, RowId,
};

use super::data::RowsData;
use super::view::ViewRows;
use crate::config::{ConfigError, PrintConfig};
use crate::print::render;
use crate::report::report;
use crate::traits::Frame;

/// A table stored as one [`DataRow`] per row.
///
/// New rows take `max existing id + 1`, so removing the last row frees
/// its id for the next append.
///
/// ```
/// use osdf_core::row;
/// use osdf_frame::{Frame, FrameRows};
///
/// let mut frame = FrameRows::new();
/// frame.append_new_column("lat", vec![-65.0, -70.9]).unwrap();
/// frame.append_new_column("id", vec!["A".to_string(), "B".to_string()]).unwrap();
/// frame.append_new_row(row![-73.0, "C"]).unwrap();
/// assert_eq!(frame.row_count(), 3);
/// assert_eq!(frame.to_string(), "ID  lat    id\n1   -65.0  A\n2   -70.9  B\n3   -73.0  C\n");
/// ```
#[derive(Debug)]
pub struct FrameRows {
    pub(crate) data: Rc<RefCell<RowsData>>,
}

impl FrameRows {
    /// An empty table with the default [`PrintConfig`].
    pub fn new() -> Self {
        Self::from_data(RowsData::default())
    }

    /// An empty table with a validated print configuration.
    pub fn with_config(config: PrintConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_data(RowsData::with_config(config)))
    }

    pub(crate) fn from_data(data: RowsData) -> Self {
        Self {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// The print configuration.
    pub fn config(&self) -> PrintConfig {
        self.data.borrow().config.clone()
    }

    /// The column schema.
    pub fn column_metadata(&self) -> Ref<'_, ColumnMetadata> {
        Ref::map(self.data.borrow(), |d| &d.meta)
    }

    /// Number of views currently attached to this table.
    pub fn live_views(&self) -> usize {
        Rc::weak_count(&self.data)
    }

    /// The structural revision views synchronise against.
    pub fn generation(&self) -> Generation {
        self.data.borrow().generation
    }

    /// A copy of the row at `position`.
    pub fn row(&self, position: usize) -> Option<DataRow> {
        self.data.borrow().rows.get(position).cloned()
    }
}

impl Default for FrameRows {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame for FrameRows {
    type View = ViewRows;

    fn config_columns(&mut self, columns: Vec<ColumnMetadatum>) -> Result<(), FrameError> {
        report("config_columns", self.data.borrow_mut().config_columns(columns))
    }

    fn append_new_column<T: DatumValue>(
        &mut self,
        name: &str,
        values: Vec<T>,
    ) -> Result<(), FrameError> {
        report("append_new_column", self.data.borrow_mut().append_new_column(name, values))
    }

    fn append_new_row(&mut self, row: NewRow) -> Result<(), FrameError> {
        report("append_new_row", self.data.borrow_mut().append_new_row(row))
    }

    fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError> {
        report("get_column", self.data.borrow().get_column(name))
    }

    fn set_column<T: DatumValue>(&mut self, name: &str, values: Vec<T>) -> Result<(), FrameError> {
        report("set_column", self.data.borrow_mut().set_column(name, values))
    }

    fn set_column_permission(
        &mut self,
        name: &str,
        permission: Permission,
    ) -> Result<(), FrameError> {
        report(
            "set_column_permission",
            self.data.borrow_mut().set_column_permission(name, permission),
        )
    }

    fn has_column(&self, name: &str) -> bool {
        self.data.borrow().has_column(name)
    }

    fn column_type(&self, name: &str) -> Option<DataType> {
        self.data.borrow().column_type(name)
    }

    fn remove_column(&mut self, name: &str) -> Result<(), FrameError> {
        let mut data = self.data.borrow_mut();
        let result = data
            .column_index(name)
            .and_then(|index| data.remove_column_at(index));
        report("remove_column", result)
    }

    fn remove_column_at(&mut self, index: usize) -> Result<(), FrameError> {
        report("remove_column_at", self.data.borrow_mut().remove_column_at(index))
    }

    fn remove_row(&mut self, index: usize) -> Result<(), FrameError> {
        report("remove_row", self.data.borrow_mut().remove_row(index))
    }

    fn sort_rows_by<F>(&mut self, name: &str, cmp: F) -> Result<(), FrameError>
    where
        F: FnMut(&Datum, &Datum) -> Ordering,
    {
        report("sort_rows", self.data.borrow_mut().sort_rows_by(name, cmp))
    }

    fn slice_rows<T: DatumValue>(
        &self,
        name: &str,
        comparison: Comparison,
        threshold: T,
    ) -> Result<Self, FrameError> {
        let sliced = self.data.borrow().slice_rows(name, comparison, &threshold);
        report("slice_rows", sliced.map(Self::from_data))
    }

    fn slice_rows_where<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&DataRow) -> bool,
    {
        Self::from_data(self.data.borrow().slice_rows_where(predicate))
    }

    fn clear(&mut self) {
        self.data.borrow_mut().clear();
    }

    fn make_view(&self) -> ViewRows {
        ViewRows::new(&self.data)
    }

    fn ids(&self) -> Vec<RowId> {
        self.data.borrow().ids()
    }

    fn row_count(&self) -> usize {
        self.data.borrow().row_count()
    }

    fn column_count(&self) -> usize {
        self.data.borrow().column_count()
    }
}

impl fmt::Display for FrameRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        render(&*data, &data.config, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use osdf_core::{row, SortOrder};

    fn sample() -> FrameRows {
        let mut frame = FrameRows::new();
        frame.append_new_column("lat", vec![-65.0, -70.9]).unwrap();
        frame
            .append_new_column("id", vec!["A".to_string(), "B".to_string()])
            .unwrap();
        frame
    }

    #[test]
    fn first_column_creates_rows() {
        let frame = sample();
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column_count(), 2);
        assert_eq!(frame.ids(), [RowId(1), RowId(2)]);
        assert_eq!(frame.column_metadata().max_id(), RowId(2));
    }

    #[test]
    fn slice_by_threshold() {
        let frame = sample();
        let sliced = frame.slice_rows("lat", Comparison::LessThan, -68.0).unwrap();
        assert_eq!(sliced.get_column::<f64>("lat").unwrap(), [-70.9]);
        assert_eq!(
            sliced.get_column::<String>("id").unwrap(),
            ["B".to_string()]
        );
        assert_eq!(sliced.ids(), [RowId(2)]);
        assert_eq!(frame.row_count(), 2);
    }

    #[test]
    fn arity_mismatch_changes_nothing() {
        let mut frame = sample();
        frame.append_new_column("n", vec![1i32, 2]).unwrap();
        let before = frame.to_string();
        let err = frame.append_new_row(row![-1.0, "Z"]).unwrap_err();
        assert_eq!(
            err,
            FrameError::RowArityMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.to_string(), before);
    }

    #[test]
    fn next_id_follows_largest_remaining() {
        let mut frame = sample();
        frame.remove_row(1).unwrap();
        frame.append_new_row(row![-73.0, "C"]).unwrap();
        assert_eq!(frame.ids(), [RowId(1), RowId(2)]);
        frame.remove_row(0).unwrap();
        frame.append_new_row(row![-74.0, "D"]).unwrap();
        assert_eq!(frame.ids(), [RowId(2), RowId(3)]);
    }

    #[test]
    fn sort_keeps_ids_with_rows() {
        let mut frame = sample();
        frame.sort_rows("lat", SortOrder::Ascending).unwrap();
        assert_eq!(frame.ids(), [RowId(2), RowId(1)]);
        assert_eq!(frame.get_column::<f64>("lat").unwrap(), [-70.9, -65.0]);
        let row = frame.row(0).unwrap();
        assert_eq!(row.column(1), &Datum::from("B"));
    }

    #[test]
    fn config_columns_requires_empty_table() {
        let mut frame = sample();
        let err = frame
            .config_columns(vec![ColumnMetadatum::new("x", DataType::Int8)])
            .unwrap_err();
        assert_eq!(err, FrameError::SchemaConflict { rows: 2 });
        assert!(frame.has_column("lat"));
    }

    #[test]
    fn config_columns_then_rows() {
        let mut frame = FrameRows::new();
        frame
            .config_columns(vec![
                ColumnMetadatum::new("channel", DataType::Int32),
                ColumnMetadatum::new("statId", DataType::String),
            ])
            .unwrap();
        frame.append_new_row(row![11, "00001"]).unwrap();
        assert_eq!(frame.column_type("channel"), Some(DataType::Int32));
        assert_eq!(frame.get_column::<i32>("channel").unwrap(), [11]);
    }

    #[test]
    fn removed_column_does_not_come_back() {
        let mut frame = sample();
        frame.remove_column("lat").unwrap();
        assert!(!frame.has_column("lat"));
        frame.append_new_column("lat", vec![1.0, 2.0]).unwrap();
        assert_eq!(frame.get_column::<f64>("lat").unwrap(), [1.0, 2.0]);
        assert_eq!(frame.column_metadata().name(1), "lat");
    }

    #[test]
    fn with_config_validates() {
        let bad = PrintConfig {
            column_padding: 0,
            ..PrintConfig::default()
        };
        assert!(FrameRows::with_config(bad).is_err());
        let frame = FrameRows::with_config(PrintConfig::default().with_max_rows(3)).unwrap();
        assert_eq!(frame.config().max_rows, Some(3));
    }

    #[test]
    fn live_views_counts_attached_views() {
        let frame = sample();
        assert_eq!(frame.live_views(), 0);
        let view = frame.make_view();
        assert_eq!(frame.live_views(), 1);
        drop(view);
        assert_eq!(frame.live_views(), 0);
    }
}
