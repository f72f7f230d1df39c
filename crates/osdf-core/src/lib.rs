//! Core types and shared table functions for the osdf data frames.
//!
//! This is the leaf crate of the workspace. It defines the value model
//! shared by the row-major and column-major tables: row identifiers and
//! generation counters, the closed [`Datum`] cell type, [`DataRow`] and
//! [`Column`] storage units, the [`ColumnMetadata`] schema, the error
//! taxonomy, the [`HasColumns`]/[`HasRows`] capability traits and the
//! layout-independent algorithms in [`functions`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod column;
pub mod datum;
pub mod error;
pub mod functions;
pub mod id;
pub mod metadata;
pub mod row;
pub mod traits;
pub mod types;

pub use column::{Column, ColumnHandle};
pub use datum::{Datum, DatumValue};
pub use error::FrameError;
pub use id::{Generation, RowId};
pub use metadata::{ColumnMetadata, ColumnMetadatum};
pub use row::{DataRow, NewRow};
pub use traits::{HasColumns, HasRows};
pub use types::{Comparison, DataType, Permission, SortOrder};
