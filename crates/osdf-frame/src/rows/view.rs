//! Live, read-only view over a row-major table.

use std::borrow::Cow;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::{Rc, Weak};

use osdf_core::functions::{
    apply_permutation, column_datums, extract_column, matching_positions, materialize_row,
    sorted_positions,
};
use osdf_core::{
    ColumnMetadata, Comparison, DataRow, DataType, Datum, DatumValue, FrameError, Generation,
    HasColumns, HasRows, RowId,
};

use super::data::RowsData;
use crate::config::PrintConfig;
use crate::print::render;
use crate::report::report;
use crate::traits::View;

/// A window onto the rows of a [`FrameRows`](super::FrameRows).
///
/// Holds positions into the owner's row storage, never copies of rows,
/// so value updates made through `set_column` show through immediately.
/// Structural changes to the owner reset the view to the owner's full row
/// set on the next read. Once the owner is dropped the view is empty.
#[derive(Debug)]
pub struct ViewRows {
    owner: Weak<RefCell<RowsData>>,
    state: RefCell<ViewState>,
}

#[derive(Debug)]
struct ViewState {
    meta: ColumnMetadata,
    positions: Vec<usize>,
    synced: Generation,
    meta_synced: Generation,
    config: PrintConfig,
}

impl ViewState {
    fn full(data: &RowsData) -> Self {
        Self {
            meta: data.meta.clone(),
            positions: (0..data.rows.len()).collect(),
            synced: data.generation,
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

/// The view's rows resolved against the owner's storage for one read.
struct Window<'a> {
    meta: &'a ColumnMetadata,
    rows: &'a [DataRow],
    positions: &'a [usize],
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
        self.rows[self.positions[position]].id()
    }

    fn datum(&self, position: usize, column: usize) -> Cow<'_, Datum> {
        Cow::Borrowed(self.rows[self.positions[position]].column(column))
    }
}

impl ViewRows {
    pub(crate) fn new(owner: &Rc<RefCell<RowsData>>) -> Self {
        let state = ViewState::full(&owner.borrow());
        Self {
            owner: Rc::downgrade(owner),
            state: RefCell::new(state),
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
        let mut state = self.state.borrow_mut();
        let Some(owner) = self.owner.upgrade() else {
            if !state.positions.is_empty() {
                tracing::debug!(
                    rows = state.positions.len(),
                    "row view owner dropped, releasing rows"
                );
                state.positions.clear();
            }
            return;
        };
        let data = owner.borrow();
        if state.synced != data.generation {
            tracing::debug!(
                from = %state.synced,
                to = %data.generation,
                "resynchronising row view"
            );
            *state = ViewState::full(&data);
        } else if state.meta_synced != data.meta_revision {
            tracing::debug!(to = %data.meta_revision, "refreshing row view schema");
            state.refresh_meta(&data.meta, data.meta_revision);
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Window<'_>) -> R) -> R {
        self.sync();
        let owner = self.owner.upgrade();
        let data = owner.as_ref().map(|o| o.borrow());
        let state = self.state.borrow();
        let window = Window {
            meta: &state.meta,
            rows: data.as_ref().map_or(&[][..], |d| d.rows.as_slice()),
            positions: &state.positions,
            config: &state.config,
        };
        f(&window)
    }

    /// A view over the same owner showing `positions` of `window`.
    fn derive(&self, window: &Window<'_>, positions: Vec<usize>) -> Self {
        let state = self.state.borrow();
        let mut meta = window.meta.clone();
        meta.reset_max_id();
        let positions: Vec<usize> = positions.into_iter().map(|p| window.positions[p]).collect();
        for &p in &positions {
            meta.update_max_id(window.rows[p].id());
        }
        Self {
            owner: self.owner.clone(),
            state: RefCell::new(ViewState {
                meta,
                positions,
                synced: state.synced,
                meta_synced: state.meta_synced,
                config: window.config.clone(),
            }),
        }
    }
}

impl View for ViewRows {
    fn get_column<T: DatumValue>(&self, name: &str) -> Result<Vec<T>, FrameError> {
        report("get_column", self.read(|w| extract_column(w, name)))
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
        self.read(|w| (0..w.row_count()).map(|p| w.row_id(p)).collect())
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
                let positions = matching_positions(w, name, comparison, &threshold)?;
                Ok(self.derive(w, positions))
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
        apply_permutation(&order, |a, b| state.positions.swap(a, b));
        Ok(())
    }

    fn is_attached(&self) -> bool {
        self.owner.strong_count() > 0
    }
}

impl fmt::Display for ViewRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|w| render(w, w.config, f))
    }
}
