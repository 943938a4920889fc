//! Geometry and measurement core for tracking crystal growth in X-ray video.
//!
//! Annotations (points and lines tied to a frame and a region) are read from
//! flat field records, turned into scene geometry and measured: measurement
//! arrows between a crystal face and its clone, perpendicular distances, and
//! growth velocities from pixel differences.
//!
//! ```
//! use cgt_rs::geometry::cgt_intersection;
//! use cgt_rs::utils::{LineSegment, Point};
//!
//! let normal = LineSegment::from_coords(0.0, 0.0, 0.0, 10.0);
//! let clone = LineSegment::from_coords(-5.0, 5.0, 5.0, 5.0);
//! let (intersection, extension) = cgt_intersection(&normal, &clone).unwrap();
//! assert_eq!(intersection, Point::new(0.0, 5.0));
//! assert!(extension.is_none());
//! ```
pub mod annotation;
pub mod cgt_errors;
pub mod geometry;
pub mod measure;
pub mod model;
pub mod utils;
pub mod view;
