//! Row-major layout: [`FrameRows`] and its [`ViewRows`].

mod data;
mod frame;
mod view;

pub(crate) use data::RowsData;
pub use frame::FrameRows;
pub use view::ViewRows;
