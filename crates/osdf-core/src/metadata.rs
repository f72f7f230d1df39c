//! Column schema: names, types, permissions and print widths.

use indexmap::IndexMap;

use crate::error::FrameError;
use crate::id::RowId;
use crate::types::{DataType, Permission};

/// Descriptor of one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMetadatum {
    name: String,
    data_type: DataType,
    permission: Permission,
    width: usize,
}

impl ColumnMetadatum {
    /// A read-write column. The print width starts at the name's length.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        let name = name.into();
        let width = name.chars().count();
        Self {
            name,
            data_type,
            permission: Permission::ReadWrite,
            width,
        }
    }

    /// Replace the permission.
    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }

    /// Mark the column read-only.
    pub fn read_only(self) -> Self {
        self.with_permission(Permission::ReadOnly)
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared value type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Write permission.
    pub fn permission(&self) -> Permission {
        self.permission
    }

    /// Print width in characters.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether writes are rejected.
    pub fn is_read_only(&self) -> bool {
        self.permission == Permission::ReadOnly
    }
}

/// Ordered, name-unique list of column descriptors.
///
/// Also tracks the largest row id seen, which only sizes the printed id
/// column. It is not the id allocator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnMetadata {
    columns: IndexMap<String, ColumnMetadatum>,
    max_id: RowId,
}

impl ColumnMetadata {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column descriptor at the end.
    pub fn add(&mut self, column: ColumnMetadatum) -> Result<(), FrameError> {
        if self.columns.contains_key(column.name()) {
            return Err(FrameError::DuplicateColumn {
                name: column.name,
            });
        }
        self.columns.insert(column.name.clone(), column);
        Ok(())
    }

    /// Remove the column at `index`, keeping the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<ColumnMetadatum> {
        self.columns.shift_remove_index(index).map(|(_, c)| c)
    }

    /// Position of the named column.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    /// Descriptor at `index`.
    pub fn get(&self, index: usize) -> Option<&ColumnMetadatum> {
        self.columns.get_index(index).map(|(_, c)| c)
    }

    /// Name of the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn name(&self, index: usize) -> &str {
        self.at(index).name()
    }

    /// Type of the column at `index`.
    pub fn data_type(&self, index: usize) -> DataType {
        self.at(index).data_type
    }

    /// Permission of the column at `index`.
    pub fn permission(&self, index: usize) -> Permission {
        self.at(index).permission
    }

    /// Print width of the column at `index`.
    pub fn width(&self, index: usize) -> usize {
        self.at(index).width
    }

    /// Grow the print width of the column at `index` to at least `width`.
    pub fn update_width(&mut self, index: usize, width: usize) {
        if let Some((_, column)) = self.columns.get_index_mut(index) {
            column.width = column.width.max(width);
        }
    }

    /// Set the permission of the column at `index`.
    pub fn set_permission(&mut self, index: usize, permission: Permission) {
        if let Some((_, column)) = self.columns.get_index_mut(index) {
            column.permission = permission;
        }
    }

    /// Whether any column is read-only. Returns the first such name.
    pub fn first_read_only(&self) -> Option<&str> {
        self.columns
            .values()
            .find(|c| c.is_read_only())
            .map(ColumnMetadatum::name)
    }

    /// Largest row id recorded for display.
    pub fn max_id(&self) -> RowId {
        self.max_id
    }

    /// Record a row id, keeping the larger of it and the current maximum.
    pub fn update_max_id(&mut self, id: RowId) {
        self.max_id = self.max_id.max(id);
    }

    /// Forget the recorded maximum row id.
    pub fn reset_max_id(&mut self) {
        self.max_id = RowId::ZERO;
    }

    /// Drop every column and the recorded maximum id.
    pub fn clear(&mut self) {
        self.columns.clear();
        self.max_id = RowId::ZERO;
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is configured.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Descriptors in column order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ColumnMetadatum> + '_ {
        self.columns.values()
    }

    fn at(&self, index: usize) -> &ColumnMetadatum {
        match self.columns.get_index(index) {
            Some((_, column)) => column,
            None => panic!(
                "column index {index} out of range for {} columns",
                self.columns.len()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ColumnMetadata {
        let mut meta = ColumnMetadata::new();
        meta.add(ColumnMetadatum::new("lat", DataType::Double)).unwrap();
        meta.add(ColumnMetadatum::new("statId", DataType::String)).unwrap();
        meta.add(ColumnMetadatum::new("time", DataType::Int64).read_only())
            .unwrap();
        meta
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut meta = schema();
        let err = meta
            .add(ColumnMetadatum::new("lat", DataType::Float))
            .unwrap_err();
        assert_eq!(err, FrameError::DuplicateColumn { name: "lat".into() });
        assert_eq!(meta.len(), 3);
        assert_eq!(meta.data_type(0), DataType::Double);
    }

    #[test]
    fn index_of_and_accessors() {
        let meta = schema();
        assert_eq!(meta.index_of("statId"), Some(1));
        assert_eq!(meta.index_of("missing"), None);
        assert_eq!(meta.name(2), "time");
        assert_eq!(meta.permission(2), Permission::ReadOnly);
        assert_eq!(meta.width(1), 6);
        assert_eq!(meta.first_read_only(), Some("time"));
    }

    #[test]
    fn remove_preserves_order() {
        let mut meta = schema();
        let removed = meta.remove(0).unwrap();
        assert_eq!(removed.name(), "lat");
        let names: Vec<_> = meta.iter().map(ColumnMetadatum::name).collect();
        assert_eq!(names, ["statId", "time"]);
        assert_eq!(meta.index_of("time"), Some(1));
        assert!(meta.remove(5).is_none());
    }

    #[test]
    fn width_only_grows() {
        let mut meta = schema();
        meta.update_width(0, 7);
        assert_eq!(meta.width(0), 7);
        meta.update_width(0, 2);
        assert_eq!(meta.width(0), 7);
    }

    #[test]
    fn max_id_tracks_largest() {
        let mut meta = schema();
        meta.update_max_id(RowId(4));
        meta.update_max_id(RowId(2));
        assert_eq!(meta.max_id(), RowId(4));
        meta.reset_max_id();
        assert_eq!(meta.max_id(), RowId::ZERO);
    }

    #[test]
    fn clear_drops_everything() {
        let mut meta = schema();
        meta.update_max_id(RowId(9));
        meta.clear();
        assert!(meta.is_empty());
        assert_eq!(meta.max_id(), RowId::ZERO);
    }

    #[test]
    fn permission_toggles() {
        let mut meta = schema();
        meta.set_permission(2, Permission::ReadWrite);
        assert_eq!(meta.first_read_only(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn positional_access_past_end_panics() {
        let _ = schema().name(3);
    }
}
