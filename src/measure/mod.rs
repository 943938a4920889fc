//! Export contents of `measure` folder
mod difference;
mod velocity;

pub use self::{difference::*, velocity::*};
