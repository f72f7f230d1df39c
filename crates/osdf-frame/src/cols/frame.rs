//! The column-major table.

use std::cell::{Ref, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use osdf_core::{
    ColumnMetadata, ColumnMetadatum, Comparison, DataRow, DataType, Datum, DatumValue,
    FrameError, Generation, HasColumns, HasRows, NewRow, Permission, RowId, SortOrder,
};

use super::data::ColsData;
use super::view::ViewCols;
use crate::config::{ConfigError, PrintConfig};
use crate::print::render;
use crate::report::report;
use crate::traits::Frame;

/// A table stored as one typed column per schema entry.
///
/// Appending a column moves the caller's vector into storage without
/// copying its elements. Ids come from an explicit counter that never
/// goes backwards until [`Frame::clear`].
///
/// ```
/// use osdf_core::{Comparison, SortOrder};
/// use osdf_frame::{Frame, FrameCols};
///
/// let mut frame = FrameCols::new();
/// frame.append_new_column("channel", vec![11, 10, 12]).unwrap();
/// frame.sort_rows("channel", SortOrder::Descending).unwrap();
/// assert_eq!(frame.get_column::<i32>("channel").unwrap(), [12, 11, 10]);
///
/// let high = frame.slice_rows("channel", Comparison::GreaterThan, 10).unwrap();
/// assert_eq!(high.row_count(), 2);
/// ```
#[derive(Debug)]
pub struct FrameCols {
    pub(crate) data: Rc<RefCell<ColsData>>,
}

impl FrameCols {
    /// An empty table with the default [`PrintConfig`].
    pub fn new() -> Self {
        Self::from_data(ColsData::default())
    }

    /// An empty table with a validated print configuration.
    pub fn with_config(config: PrintConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_data(ColsData::with_config(config)))
    }

    pub(crate) fn from_data(data: ColsData) -> Self {
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
        self.data.borrow().generation()
    }

    /// Largest id handed out since creation or the last clear.
    pub fn max_id(&self) -> RowId {
        self.data.borrow().max_id
    }
}

impl Default for FrameCols {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame for FrameCols {
    type View = ViewCols;

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

    fn sort_rows(&mut self, name: &str, order: SortOrder) -> Result<(), FrameError> {
        report("sort_rows", self.data.borrow_mut().sort_rows(name, order))
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

    fn make_view(&self) -> ViewCols {
        ViewCols::new(&self.data)
    }

    fn ids(&self) -> Vec<RowId> {
        self.data.borrow().ids.clone()
    }

    fn row_count(&self) -> usize {
        self.data.borrow().row_count()
    }

    fn column_count(&self) -> usize {
        self.data.borrow().column_count()
    }
}

impl fmt::Display for FrameCols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.borrow();
        render(&*data, &data.config, f)
    }
}
