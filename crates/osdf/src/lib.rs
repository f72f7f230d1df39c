//! osdf: dual-layout tabular data frames for scientific observation data.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! osdf sub-crates. One logical table comes in two physical layouts,
//! row-major [`frame::FrameRows`] and column-major [`frame::FrameCols`],
//! each able to hand out live read-only views that follow the table as it
//! changes.
//!
//! # Quick start
//!
//! ```rust
//! use osdf::prelude::*;
//!
//! let mut frame = FrameCols::new();
//! frame.append_new_column("lat", vec![-65.0, -66.6, -67.2]).unwrap();
//! let stations = vec!["00001".to_string(), "00001".into(), "00002".into()];
//! frame.append_new_column("StatId", stations).unwrap();
//! frame.append_new_row(row![-68.6, "00001"]).unwrap();
//!
//! let mut view = frame.make_view();
//! view.sort_rows("lat", SortOrder::Ascending).unwrap();
//! assert_eq!(view.ids(), [RowId(4), RowId(3), RowId(2), RowId(1)]);
//!
//! // Structural changes to the owner reset its views.
//! frame.remove_row(0).unwrap();
//! assert_eq!(view.ids(), [RowId(2), RowId(3), RowId(4)]);
//!
//! let north = frame.slice_rows("lat", Comparison::GreaterThan, -67.0).unwrap();
//! assert_eq!(north.get_column::<f64>("lat").unwrap(), [-66.6]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `osdf-core` | Ids, type tags, `Datum`, `DataRow`, schema, errors, functions |
//! | [`frame`] | `osdf-frame` | Tables, views, the `Frame`/`View` contracts, printing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value and schema types (`osdf-core`).
///
/// Contains [`types::Datum`], [`types::DataRow`], [`types::ColumnMetadata`],
/// [`types::FrameError`] and the shared algorithms in
/// [`types::functions`].
pub use osdf_core as types;

/// Tables and views (`osdf-frame`).
///
/// [`frame::FrameRows`] and [`frame::FrameCols`] own data;
/// [`frame::ViewRows`] and [`frame::ViewCols`] are windows onto them.
pub use osdf_frame as frame;

/// Common imports for typical osdf usage.
///
/// ```rust
/// use osdf::prelude::*;
/// ```
pub mod prelude {
    // Values and schema
    pub use osdf_core::{
        row, ColumnMetadatum, Comparison, DataRow, DataType, Datum, DatumValue, NewRow,
        Permission, RowId, SortOrder,
    };

    // Errors
    pub use osdf_core::FrameError;

    // Tables and views
    pub use osdf_frame::{Frame, FrameCols, FrameRows, PrintConfig, View, ViewCols, ViewRows};
}
