//! Error types for table and view operations.
//!
//! Every rejection is raised before the table is touched, so a caller that
//! receives an error still holds the table in its last-known-good state.

use thiserror::Error;

use crate::types::DataType;

/// Errors from schema-checked table and view operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FrameError {
    /// A row was appended before any column was configured.
    #[error("cannot insert a new row without first setting column headings")]
    NoColumnsConfigured,
    /// The named column does not exist.
    #[error("column named \"{name}\" not found in current data frame")]
    ColumnNotFound {
        /// The requested column name.
        name: String,
    },
    /// A column with this name already exists.
    #[error("column named \"{name}\" already exists in current data frame")]
    DuplicateColumn {
        /// The conflicting column name.
        name: String,
    },
    /// The value type does not match the column's declared type.
    #[error("data type for column \"{column}\" is {expected}, got {found}")]
    TypeMismatch {
        /// Name of the column whose type was violated.
        column: String,
        /// The column's declared type.
        expected: DataType,
        /// The type supplied by the caller.
        found: DataType,
    },
    /// Typed access to a single cell with the wrong type.
    #[error("datum holds {expected}, accessed as {found}")]
    DatumTypeMismatch {
        /// The type stored in the datum.
        expected: DataType,
        /// The type requested by the caller.
        found: DataType,
    },
    /// A new row has a different number of values than the table has columns.
    #[error(
        "number of values in new row ({found}) is incompatible with this data frame \
         ({expected} columns)"
    )]
    RowArityMismatch {
        /// Column count of the table.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// Attempted write into a read-only column.
    #[error("column named \"{name}\" is set to read-only")]
    ReadOnlyColumn {
        /// Name of the read-only column.
        name: String,
    },
    /// A column vector does not match the table's row count.
    #[error("column \"{name}\" has {found} values, data frame has {expected} rows")]
    ColumnLengthMismatch {
        /// Name of the column being written.
        name: String,
        /// Row count of the table.
        expected: usize,
        /// Length of the supplied vector.
        found: usize,
    },
    /// A row position past the end of the table.
    #[error("row index {index} out of range for {len} rows")]
    RowIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Current row count.
        len: usize,
    },
    /// A column position past the end of the schema.
    #[error("column index {index} out of range for {len} columns")]
    ColumnIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Current column count.
        len: usize,
    },
    /// The schema cannot be replaced while rows exist.
    #[error("cannot configure columns of a data frame holding {rows} rows")]
    SchemaConflict {
        /// Current row count.
        rows: usize,
    },
}

impl FrameError {
    /// Shorthand for [`FrameError::ColumnNotFound`].
    pub fn column_not_found(name: &str) -> Self {
        Self::ColumnNotFound {
            name: name.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_column() {
        let err = FrameError::TypeMismatch {
            column: "lat".into(),
            expected: DataType::Double,
            found: DataType::Int32,
        };
        assert_eq!(
            err.to_string(),
            "data type for column \"lat\" is double, got int32"
        );
        assert_eq!(
            FrameError::column_not_found("lon").to_string(),
            "column named \"lon\" not found in current data frame"
        );
    }

    #[test]
    fn arity_message_reports_both_counts() {
        let err = FrameError::RowArityMismatch {
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("(2)"));
        assert!(msg.contains("3 columns"));
    }
}
