//! Column-major layout: [`FrameCols`] and its [`ViewCols`].

mod data;
mod frame;
mod view;

pub(crate) use data::ColsData;
pub use frame::FrameCols;
pub use view::ViewCols;
