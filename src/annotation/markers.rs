use serde::{Deserialize, Serialize};

use crate::geometry::make_cross_path;
use crate::utils::{LineSegment, Path, Point};

/// Point marker placed on a frame.
///
/// `centre` is the marker's anchor in its own drawing frame and `position`
/// the scene translation applied on top of it. The two are kept apart so the
/// marker shape can be rebuilt exactly as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPoint {
    centre: Point,
    position: Point,
    frame: usize,
    region: usize,
}

impl AnnotationPoint {
    pub fn new(centre: Point, position: Point, frame: usize, region: usize) -> Self {
        AnnotationPoint {
            centre,
            position,
            frame,
            region,
        }
    }
    pub fn get_centre(&self) -> Point {
        self.centre
    }
    pub fn get_position(&self) -> Point {
        self.position
    }
    pub fn set_position(&mut self, position: Point) {
        self.position = position
    }
    pub fn get_frame(&self) -> usize {
        self.frame
    }
    pub fn get_region(&self) -> usize {
        self.region
    }
    /// Where the marker is drawn in the scene
    pub fn scene_point(&self) -> Point {
        self.centre + self.position
    }
    /// Cross-shaped outline in local coordinates (translate by `position` to draw)
    pub fn marker_path(&self) -> Path {
        make_cross_path(&self.centre)
    }
    /// Compares scene locations only, ignoring frame and region
    pub fn same_point(&self, other: &AnnotationPoint) -> bool {
        self.scene_point() == other.scene_point()
    }
}

/// Line marker placed on a frame. Local endpoints and scene `position` are kept apart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLine {
    line: LineSegment,
    position: Point,
    frame: usize,
    region: usize,
}

impl AnnotationLine {
    pub fn new(line: LineSegment, position: Point, frame: usize, region: usize) -> Self {
        AnnotationLine {
            line,
            position,
            frame,
            region,
        }
    }
    pub fn get_line(&self) -> LineSegment {
        self.line
    }
    pub fn get_position(&self) -> Point {
        self.position
    }
    pub fn set_position(&mut self, position: Point) {
        self.position = position
    }
    pub fn get_frame(&self) -> usize {
        self.frame
    }
    pub fn get_region(&self) -> usize {
        self.region
    }
    pub fn scene_line(&self) -> LineSegment {
        self.line.translated(self.position)
    }
    /// Compares local endpoints only, ignoring position, frame and region
    pub fn same_line(&self, other: &AnnotationLine) -> bool {
        self.line == other.line
    }
}

/// Any annotation a region can hold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Marker {
    Point(AnnotationPoint),
    Line(AnnotationLine),
}

impl Marker {
    pub fn frame(&self) -> usize {
        match self {
            Marker::Point(p) => p.get_frame(),
            Marker::Line(l) => l.get_frame(),
        }
    }
    pub fn region(&self) -> usize {
        match self {
            Marker::Point(p) => p.get_region(),
            Marker::Line(l) => l.get_region(),
        }
    }
}

impl From<AnnotationPoint> for Marker {
    fn from(p: AnnotationPoint) -> Self {
        Marker::Point(p)
    }
}

impl From<AnnotationLine> for Marker {
    fn from(l: AnnotationLine) -> Self {
        Marker::Line(l)
    }
}
