//! Live, read-only view over a column-major table.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

use osdf_core::functions::{
    apply_permutation, column_datums, matching_positions, materialize_row, sorted_positions,
    typed_column_index,
};
use osdf_core::{
    ColumnHandle, ColumnMetadata, Comparison, DataRow, DataType, Datum, DatumValue, FrameError,
    Generation, HasColumns, HasRows, RowId,
};

use super::data::ColsData;
use crate::config::PrintConfig;
use crate::print::render;
use crate::report::report;
use crate::traits::View;

/// A window onto the rows of a [`FrameCols`](super::FrameCols).
///
/// Shares the owner's column storage through cloned handles and keeps
/// its own ids and positions. Structural changes to the owner reset the
/// view to the owner's full row set on the next read. If the owner is
/// dropped the view keeps the contents it last synchronised, unless the
/// owner changed structurally in between, in which case it is empty.
#[derive(Debug)]
pub struct ViewCols {
    owner: Weak<RefCell<ColsData>>,
    revision: Rc<Cell<Generation>>,
    state: RefCell<ViewState>,
}

#[derive(Debug)]
struct ViewState {
    meta: ColumnMetadata,
    ids: Vec<RowId>,
    positions: Vec<usize>,
    columns: Vec<ColumnHandle>,
    synced: Generation,
    meta_synced: Generation,
    config: PrintConfig,
}

impl ViewState {
    fn full(data: &ColsData) -> Self {
        Self {
            meta: data.meta.clone(),
            ids: data.ids.clone(),
            positions: (0..data.ids.len()).collect(),
            columns: data.columns.clone(),
            synced: data.generation(),
            meta_synced: data.meta_revision,
            config: data.config.clone(),
        }
    }

    /// Take the owner's widths and permissions, keeping the view's rows
    /// and display max id.
    fn refresh_meta(&mut self, meta: &ColumnMetadata, revision: Generation) {
        let max_id = self.meta.max_id();
        self.meta = meta.clone();
        self.meta.reset_max_id();
        self.meta.update_max_id(max_id);
        self.meta_synced = revision;
    }
}

struct Window<'a> {
    meta: &'a ColumnMetadata,
    ids: &'a [RowId],
    positions: &'a [usize],
    columns: &'a [ColumnHandle],
    config: &'a PrintConfig,
}

impl HasColumns for Window<'_> {
    fn column_metadata(&self) -> &ColumnMetadata {
        self.meta
    }
}

impl HasRows for Window<'_> {
    fn row_count(&self) -> usize {
        self.positions.len()
    }

    fn row_id(&self, position: usize) -> RowId {
        self.ids[position]
    }

    fn datum(&self, position: usize, column: usize) -> Cow<'_, Datum> {
        Cow::Owned(self.columns[column].borrow().datum(self.positions[position]))
    }
}

impl ViewCols {
    pub(crate) fn new(owner: &Rc<RefCell<ColsData>>) -> Self {
        let data = owner.borrow();
        Self {
            owner: Rc::downgrade(owner),
            revision: Rc::clone(&data.generation),
            state: RefCell::new(ViewState::full(&data)),
        }
    }

    /// The schema as of the last synchronisation.
    pub fn column_metadata(&self) -> ColumnMetadata {
        self.sync();
        self.state.borrow().meta.clone()
    }

    /// The owner generation this view reflects.
    pub fn synced_generation(&self) -> Generation {
        self.sync();
        self.state.borrow().synced
    }

    fn sync(&self) {
        let current = self.revision.get();
        let mut state = self.state.borrow_mut();
        if state.synced == current {
            let owner = self.owner.upgrade();
            if let Some(data) = owner.as_ref().and_then(|o| o.try_borrow().ok()) {
                if state.meta_synced != data.meta_revision {
                    tracing::debug!(to = %data.meta_revision, "refreshing column view schema");
                    state.refresh_meta(&data.meta, data.meta_revision);
                }
            }
            return;
        }
        match self.owner.upgrade() {
            Some(owner) => {
                tracing::debug!(from = %state.synced, to = %current, "resynchronising column view");
                *state = ViewState::full(&owner.borrow());
            }
            None => {
                tracing::debug!(
                    rows = state.positions.len(),
                    "column view owner dropped after a structural change, releasing rows"
                );
                state.ids.clear();
                state.positions.clear();
                state.synced = current;
            }
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Window<'_>) -> R) -> R {
        self.sync();
        let state = self.state.borrow();
        f(&Window {
            meta: &state.meta,
            ids: &state.ids,
            positions: &state.positions,
            columns: &state.columns,
            config: &state.config,
        })
    }

    fn derive(&self, window: &Window<'_>, picked: Vec<usize>) -> Self {
        let state = self.state.borrow();
        let ids: Vec<RowId> = picked.iter().map(|&p| window.ids[p]).collect();
        let mut meta = window.meta.clone();
        meta.reset_max_id();
        for &id in &ids {
            meta.update_max_id(id);
        }
        Self {
            owner: self.owner.clone(),
            revision: Rc::clone(&self.revision),
            state: RefCell::new(ViewState {
                meta,
                ids,
                positions: picked.iter().map(|&p| window.positions[p]).collect(),
                columns: window.columns.to_vec(),
                synced: state.synced,
                meta_synced: state.meta_synced,
                config: window.config.clone(),
            }),
        }
    }
}

impl View for ViewCols {
    fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError> {
        let result = self.read(|w| -> Result<Vec<T>, FrameError> {
            let index = typed_column_index::<T, _>(w, name)?;
            let column = w.columns[index].borrow();
            let values = column.values::<T>().ok_or_else(|| FrameError::TypeMismatch {
                column: name.to_owned(),
                expected: column.data_type(),
                found: T::DATA_TYPE,
            })?;
            let picked: Vec<T> = w.positions.iter().map(|&p| values[p].clone()).collect();
            Ok(picked)
        });
        report("get_column", result)
    }

    fn has_column(&self, name: &str) -> bool {
        self.read(|w| w.has_column(name))
    }

    fn column_type(&self, name: &str) -> Option<DataType> {
        self.read(|w| w.column_type(name))
    }

    fn row_count(&self) -> usize {
        self.read(|w| w.row_count())
    }

    fn column_count(&self) -> usize {
        self.read(|w| w.column_count())
    }

    fn ids(&self) -> Vec<RowId> {
        self.read(|w| w.ids.to_vec())
    }

    fn slice_rows<T: DatumValue>(
        &self,
        name: &str,
        comparison: Comparison,
        threshold: T,
    ) -> Result<Self, FrameError> {
        report(
            "slice_rows",
            self.read(|w| -> Result<Self, FrameError> {
                let picked = matching_positions(w, name, comparison, &threshold)?;
                Ok(self.derive(w, picked))
            }),
        )
    }

    fn slice_rows_where<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&DataRow) -> bool,
    {
        let rows: Vec<DataRow> =
            self.read(|w| (0..w.row_count()).map(|p| materialize_row(w, p)).collect());
        let synced = self.state.borrow().synced;
        let picked: Vec<usize> = (0..rows.len()).filter(|&p| predicate(&rows[p])).collect();
        self.read(|w| {
            if self.state.borrow().synced == synced && w.row_count() == rows.len() {
                self.derive(w, picked)
            } else {
                self.derive(w, (0..w.row_count()).collect())
            }
        })
    }

    fn sort_rows_by<F>(&mut self, name: &str, mut cmp: F) -> Result<(), FrameError>
    where
        F: FnMut(&Datum, &Datum) -> Ordering,
    {
        let keys = report("sort_rows", self.read(|w| column_datums(w, name)))?;
        let order = sorted_positions(keys.len(), |a, b| cmp(&keys[a], &keys[b]));
        let state = self.state.get_mut();
        let (ids, positions) = (&mut state.ids, &mut state.positions);
        apply_permutation(&order, |a, b| {
            ids.swap(a, b);
            positions.swap(a, b);
        });
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.owner.strong_count() > 0
    }
}

impl fmt::Display for ViewCols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|w| render(w, w.config, f))
    }
}
