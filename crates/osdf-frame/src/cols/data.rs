//! Storage and mutation logic of the column-major table.

use std::borrow::Cow;
use std::cell::{Cell, RefMut};
use std::cmp::Ordering;
use std::rc::Rc;

use osdf_core::functions::{
    apply_permutation, build_row, matching_positions, materialize_row, sort_order_by,
    sorted_positions, typed_column_index,
};
use osdf_core::{
    Column, ColumnHandle, ColumnMetadata, ColumnMetadatum, Comparison, DataRow, Datum, DatumValue,
    FrameError, Generation, HasColumns, HasRows, NewRow, Permission, RowId, SortOrder,
};

use crate::config::PrintConfig;

/// Everything a [`FrameCols`](super::FrameCols) owns.
///
/// The generation lives in a shared cell so that views which co-own the
/// column handles can still tell, after the table is gone, whether the
/// columns moved under them.
#[derive(Debug, Default)]
pub(crate) struct ColsData {
    pub(crate) meta: ColumnMetadata,
    pub(crate) ids: Vec<RowId>,
    pub(crate) columns: Vec<ColumnHandle>,
    /// Id allocator. Never decreases until the table is cleared.
    pub(crate) max_id: RowId,
    pub(crate) generation: Rc<Cell<Generation>>,
    /// Bumped when widths or permissions change without a structural
    /// change. Views refresh their schema copy on mismatch.
    pub(crate) meta_revision: Generation,
    pub(crate) config: PrintConfig,
}

impl ColsData {
    pub(crate) fn with_config(config: PrintConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub(crate) fn generation(&self) -> Generation {
        self.generation.get()
    }

    fn advance(&mut self) {
        let next = self.generation.get().next();
        self.generation.set(next);
        tracing::trace!(generation = %next, "column-major table changed");
    }

    fn touch_meta(&mut self) {
        self.meta_revision = self.meta_revision.next();
        tracing::trace!(revision = %self.meta_revision, "column-major schema changed");
    }

    fn check_writable(&self, index: usize, name: &str) -> Result<(), FrameError> {
        if self.meta.permission(index) == Permission::ReadOnly {
            return Err(FrameError::ReadOnlyColumn {
                name: name.to_owned(),
            });
        }
        Ok(())
    }

    fn check_length(&self, name: &str, found: usize) -> Result<(), FrameError> {
        if found != self.ids.len() {
            return Err(FrameError::ColumnLengthMismatch {
                name: name.to_owned(),
                expected: self.ids.len(),
                found,
            });
        }
        Ok(())
    }

    pub(crate) fn config_columns(
        &mut self,
        columns: Vec<ColumnMetadatum>,
    ) -> Result<(), FrameError> {
        if !self.ids.is_empty() {
            return Err(FrameError::SchemaConflict {
                rows: self.ids.len(),
            });
        }
        let mut meta = ColumnMetadata::new();
        for column in columns {
            meta.add(column)?;
        }
        self.columns = meta
            .iter()
            .map(|c| Column::new(c.data_type()).into_handle())
            .collect();
        self.meta = meta;
        self.advance();
        Ok(())
    }

    pub(crate) fn append_new_column<T: DatumValue>(
        &mut self,
        name: &str,
        values: Vec<T>,
    ) -> Result<(), FrameError> {
        let creates_rows = self.meta.is_empty() && self.ids.is_empty();
        if !creates_rows {
            self.check_length(name, values.len())?;
        }
        self.meta.add(ColumnMetadatum::new(name, T::DATA_TYPE))?;
        if creates_rows {
            for _ in 0..values.len() {
                self.max_id = self.max_id.next();
                self.ids.push(self.max_id);
                self.meta.update_max_id(self.max_id);
            }
        }
        let column = Column::from(values);
        let index = self.meta.len() - 1;
        self.meta.update_width(index, column.max_display_width());
        self.columns.push(column.into_handle());
        self.advance();
        Ok(())
    }

    pub(crate) fn append_new_row(&mut self, values: NewRow) -> Result<(), FrameError> {
        let id = self.max_id.next();
        let row = build_row(&self.meta, id, values)?;
        for (index, (handle, datum)) in self.columns.iter().zip(row.columns()).enumerate() {
            self.meta.update_width(index, datum.display_width());
            handle.borrow_mut().push(datum.clone())?;
        }
        self.ids.push(id);
        self.max_id = id;
        self.meta.update_max_id(id);
        self.advance();
        Ok(())
    }

    pub(crate) fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError> {
        let index = typed_column_index::<T, _>(self, name)?;
        let column = self.columns[index].borrow();
        column
            .values::<T>()
            .map(<[T]>::to_vec)
            .ok_or_else(|| FrameError::TypeMismatch {
                column: name.to_owned(),
                expected: column.data_type(),
                found: T::DATA_TYPE,
            })
    }

    pub(crate) fn set_column<T: DatumValue>(
        &mut self,
        name: &str,
        values: Vec<T>,
    ) -> Result<(), FrameError> {
        let index = typed_column_index::<T, _>(&*self, name)?;
        self.check_writable(index, name)?;
        self.check_length(name, values.len())?;
        let column = Column::from(values);
        self.meta.update_width(index, column.max_display_width());
        *self.columns[index].borrow_mut() = column;
        self.touch_meta();
        Ok(())
    }

    pub(crate) fn set_column_permission(
        &mut self,
        name: &str,
        permission: Permission,
    ) -> Result<(), FrameError> {
        let index = self.column_index(name)?;
        self.meta.set_permission(index, permission);
        self.touch_meta();
        Ok(())
    }

    pub(crate) fn remove_column_at(&mut self, index: usize) -> Result<(), FrameError> {
        if index >= self.meta.len() {
            return Err(FrameError::ColumnIndexOutOfRange {
                index,
                len: self.meta.len(),
            });
        }
        self.meta.remove(index);
        self.columns.remove(index);
        self.advance();
        Ok(())
    }

    pub(crate) fn remove_row(&mut self, index: usize) -> Result<(), FrameError> {
        if index >= self.ids.len() {
            return Err(FrameError::RowIndexOutOfRange {
                index,
                len: self.ids.len(),
            });
        }
        self.ids.remove(index);
        for handle in &self.columns {
            handle.borrow_mut().remove(index);
        }
        self.advance();
        Ok(())
    }

    pub(crate) fn sort_rows(&mut self, name: &str, order: SortOrder) -> Result<(), FrameError> {
        let index = self.column_index(name)?;
        let permutation = {
            let column = self.columns[index].borrow();
            sorted_positions(self.ids.len(), |a, b| order.apply(column.compare(a, b)))
        };
        self.permute(&permutation);
        Ok(())
    }

    pub(crate) fn sort_rows_by<F>(&mut self, name: &str, cmp: F) -> Result<(), FrameError>
    where
        F: FnMut(&Datum, &Datum) -> Ordering,
    {
        let permutation = sort_order_by(&*self, name, cmp)?;
        self.permute(&permutation);
        Ok(())
    }

    /// Reorder ids and every column in lockstep.
    fn permute(&mut self, order: &[usize]) {
        let ids = &mut self.ids;
        let mut columns: Vec<RefMut<'_, Column>> =
            self.columns.iter().map(|c| c.borrow_mut()).collect();
        apply_permutation(order, |a, b| {
            ids.swap(a, b);
            for column in &mut columns {
                column.swap(a, b);
            }
        });
        drop(columns);
        self.advance();
    }

    pub(crate) fn slice_rows<T: DatumValue>(
        &self,
        name: &str,
        comparison: Comparison,
        threshold: &T,
    ) -> Result<Self, FrameError> {
        let positions = matching_positions(self, name, comparison, threshold)?;
        Ok(self.select(&positions))
    }

    pub(crate) fn slice_rows_where<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&DataRow) -> bool,
    {
        let positions: Vec<usize> = (0..self.ids.len())
            .filter(|&p| predicate(&materialize_row(self, p)))
            .collect();
        self.select(&positions)
    }

    /// Deep copy of the rows at `positions`. The copy allocates ids after
    /// the largest one it retains.
    fn select(&self, positions: &[usize]) -> Self {
        let ids: Vec<RowId> = positions.iter().map(|&p| self.ids[p]).collect();
        let max_id = ids.iter().copied().max().unwrap_or(RowId::ZERO);
        let mut meta = self.meta.clone();
        meta.reset_max_id();
        meta.update_max_id(max_id);
        Self {
            meta,
            ids,
            columns: self
                .columns
                .iter()
                .map(|c| c.borrow().select(positions).into_handle())
                .collect(),
            max_id,
            generation: Rc::default(),
            meta_revision: Generation::default(),
            config: self.config.clone(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.meta.clear();
        self.ids.clear();
        self.columns.clear();
        self.max_id = RowId::ZERO;
        self.advance();
    }
}

impl HasColumns for ColsData {
    fn column_metadata(&self) -> &ColumnMetadata {
        &self.meta
    }
}

impl HasRows for ColsData {
    fn row_count(&self) -> usize {
        self.ids.len()
    }

    fn row_id(&self, position: usize) -> RowId {
        self.ids[position]
    }

    fn datum(&self, position: usize, column: usize) -> Cow<'_, Datum> {
        Cow::Owned(self.columns[column].borrow().datum(position))
    }
}
