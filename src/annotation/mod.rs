//! Export contents of `annotation` folder
mod fields;
mod markers;

pub use self::{fields::*, markers::*};
