//! Row-major and column-major data frames with live, read-only views.
//!
//! Two table layouts hold the same logical content:
//!
//! - [`FrameRows`] stores one [`DataRow`](osdf_core::DataRow) per row and
//!   suits row-at-a-time filtering and appends.
//! - [`FrameCols`] stores one typed [`Column`](osdf_core::Column) per
//!   schema entry and suits whole-column reads and writes.
//!
//! Both implement the [`Frame`] contract. A table hands out views through
//! [`Frame::make_view`]; a view ([`ViewRows`], [`ViewCols`]) implements
//! [`View`], can be sliced and sorted on its own, and resynchronises with
//! its owner whenever the owner's [`Generation`](osdf_core::Generation)
//! moves on. Views never keep their owner alive.
//!
//! Every rejected operation returns a [`FrameError`](osdf_core::FrameError)
//! and leaves the table unchanged; rejections are also logged through
//! `tracing` at `error` level.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cols;
pub mod config;
mod convert;
pub mod print;
mod report;
pub mod rows;
pub mod traits;

pub use cols::{FrameCols, ViewCols};
pub use config::{ConfigError, PrintConfig};
pub use rows::{FrameRows, ViewRows};
pub use traits::{Frame, View};
