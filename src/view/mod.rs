//! Export contents of `view` folder
mod regions_lines_frames;

pub use self::regions_lines_frames::*;
