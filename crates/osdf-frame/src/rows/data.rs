//! Storage and mutation logic of the row-major table.

use std::borrow::Cow;

use osdf_core::functions::{
    apply_permutation, build_row, extract_column, matching_positions, set_datum_value,
    sort_order_by, typed_column_index,
};
use osdf_core::{
    ColumnMetadata, ColumnMetadatum, Comparison, DataRow, Datum, DatumValue, FrameError,
    Generation, HasColumns, HasRows, NewRow, Permission, RowId,
};

use crate::config::PrintConfig;

/// Everything a [`FrameRows`](super::FrameRows) owns. Views read it
/// through a weak reference.
#[derive(Debug, Default)]
pub(crate) struct RowsData {
    pub(crate) meta: ColumnMetadata,
    pub(crate) rows: Vec<DataRow>,
    pub(crate) generation: Generation,
    /// Bumped when widths or permissions change without a structural
    /// change. Views refresh their schema copy on mismatch.
    pub(crate) meta_revision: Generation,
    pub(crate) config: PrintConfig,
}

impl RowsData {
    pub(crate) fn with_config(config: PrintConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// `max existing id + 1`, or 1 for an empty table.
    fn next_id(&self) -> RowId {
        self.rows
            .iter()
            .map(DataRow::id)
            .max()
            .unwrap_or(RowId::ZERO)
            .next()
    }

    fn advance(&mut self) {
        self.generation = self.generation.next();
        tracing::trace!(generation = %self.generation, "row-major table changed");
    }

    fn touch_meta(&mut self) {
        self.meta_revision = self.meta_revision.next();
        tracing::trace!(revision = %self.meta_revision, "row-major schema changed");
    }

    pub(crate) fn config_columns(
        &mut self,
        columns: Vec<ColumnMetadatum>,
    ) -> Result<(), FrameError> {
        if !self.rows.is_empty() {
            return Err(FrameError::SchemaConflict {
                rows: self.rows.len(),
            });
        }
        let mut meta = ColumnMetadata::new();
        for column in columns {
            meta.add(column)?;
        }
        self.meta = meta;
        self.advance();
        Ok(())
    }

    pub(crate) fn append_new_column<T: DatumValue>(
        &mut self,
        name: &str,
        values: Vec<T>,
    ) -> Result<(), FrameError> {
        let creates_rows = self.meta.is_empty() && self.rows.is_empty();
        if !creates_rows && values.len() != self.rows.len() {
            return Err(FrameError::ColumnLengthMismatch {
                name: name.to_owned(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        self.meta.add(ColumnMetadatum::new(name, T::DATA_TYPE))?;
        if creates_rows {
            let mut id = RowId::ZERO;
            for _ in 0..values.len() {
                id = id.next();
                self.rows.push(DataRow::new(id));
                self.meta.update_max_id(id);
            }
        }
        let index = self.meta.len() - 1;
        for (row, value) in self.rows.iter_mut().zip(values) {
            let datum = value.into_datum();
            self.meta.update_width(index, datum.display_width());
            row.push(datum);
        }
        self.advance();
        Ok(())
    }

    pub(crate) fn append_new_row(&mut self, values: NewRow) -> Result<(), FrameError> {
        let row = build_row(&self.meta, self.next_id(), values)?;
        for (index, datum) in row.columns().iter().enumerate() {
            self.meta.update_width(index, datum.display_width());
        }
        self.meta.update_max_id(row.id());
        self.rows.push(row);
        self.advance();
        Ok(())
    }

    pub(crate) fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError> {
        extract_column(self, name)
    }

    pub(crate) fn set_column<T: DatumValue>(
        &mut self,
        name: &str,
        values: Vec<T>,
    ) -> Result<(), FrameError> {
        let index = typed_column_index::<T, _>(&*self, name)?;
        if self.meta.permission(index) == Permission::ReadOnly {
            return Err(FrameError::ReadOnlyColumn {
                name: name.to_owned(),
            });
        }
        if values.len() != self.rows.len() {
            return Err(FrameError::ColumnLengthMismatch {
                name: name.to_owned(),
                expected: self.rows.len(),
                found: values.len(),
            });
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            let cell = row.column_mut(index);
            set_datum_value(cell, value, name)?;
            self.meta.update_width(index, cell.display_width());
        }
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
        for row in &mut self.rows {
            row.remove_column(index);
        }
        self.advance();
        Ok(())
    }

    pub(crate) fn remove_row(&mut self, index: usize) -> Result<(), FrameError> {
        if index >= self.rows.len() {
            return Err(FrameError::RowIndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        self.rows.remove(index);
        self.advance();
        Ok(())
    }

    pub(crate) fn sort_rows_by<F>(&mut self, name: &str, cmp: F) -> Result<(), FrameError>
    where
        F: FnMut(&Datum, &Datum) -> std::cmp::Ordering,
    {
        let order = sort_order_by(&*self, name, cmp)?;
        apply_permutation(&order, |a, b| self.rows.swap(a, b));
        self.advance();
        Ok(())
    }

    pub(crate) fn slice_rows<T: DatumValue>(
        &self,
        name: &str,
        comparison: Comparison,
        threshold: &T,
    ) -> Result<Self, FrameError> {
        let positions = matching_positions(self, name, comparison, threshold)?;
        Ok(self.select(positions))
    }

    pub(crate) fn slice_rows_where<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&DataRow) -> bool,
    {
        let positions = (0..self.rows.len())
            .filter(|&p| predicate(&self.rows[p]))
            .collect();
        self.select(positions)
    }

    /// Deep copy of the rows at `positions`, with the display max id
    /// recomputed from the retained rows.
    fn select(&self, positions: Vec<usize>) -> Self {
        let mut meta = self.meta.clone();
        meta.reset_max_id();
        let rows: Vec<DataRow> = positions.into_iter().map(|p| self.rows[p].clone()).collect();
        for row in &rows {
            meta.update_max_id(row.id());
        }
        Self {
            meta,
            rows,
            generation: Generation::default(),
            meta_revision: Generation::default(),
            config: self.config.clone(),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.meta.clear();
        self.rows.clear();
        self.advance();
    }

    pub(crate) fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(DataRow::id).collect()
    }
}

impl HasColumns for RowsData {
    fn column_metadata(&self) -> &ColumnMetadata {
        &self.meta
    }
}

impl HasRows for RowsData {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_id(&self, position: usize) -> RowId {
        self.rows[position].id()
    }

    fn datum(&self, position: usize, column: usize) -> Cow<'_, Datum> {
        Cow::Borrowed(self.rows[position].column(column))
    }
}
