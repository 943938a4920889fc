//! Export contents of `geometry` folder
mod arrow;
mod cross;
mod intersection;
mod rect;

pub use self::{arrow::*, cross::*, intersection::*, rect::*};
