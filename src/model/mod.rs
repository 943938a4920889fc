//! Export contents of `model` folder
mod config;
mod project;
mod results;

pub use self::{config::*, project::*, results::*};
