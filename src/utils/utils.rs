use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

/// Location in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(_x: f64, _y: f64) -> Self {
        Point { x: _x, y: _y }
    }
    /// Rounds both coordinates to the nearest integer, halves towards positive infinity
    /// (-3.5 becomes -3). `None` when a coordinate is off the `i32` grid
    pub fn to_grid(&self) -> Option<(i32, i32)> {
        let snap = |v: f64| {
            let rounded = (v + 0.5).floor();
            if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
                Some(rounded as i32)
            } else {
                None
            }
        };
        Some((snap(self.x)?, snap(self.y)?))
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Directed line segment. Direction matters for normals and arrows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        LineSegment { p1, p2 }
    }
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        LineSegment::new(Point::new(x1, y1), Point::new(x2, y2))
    }
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }
    pub fn length(&self) -> f64 {
        f64::hypot(self.dx(), self.dy())
    }
    pub fn center(&self) -> Point {
        (self.p1 + self.p2) / 2.0
    }
    /// Point at parameter `t`, where 0 is `p1` and 1 is `p2`. Values outside [0, 1] extrapolate
    pub fn point_at(&self, t: f64) -> Point {
        self.p1 + (self.p2 - self.p1) * t
    }
    /// Line of the same length starting at `p1`, rotated a quarter turn
    pub fn normal_vector(&self) -> LineSegment {
        LineSegment::new(self.p1, self.p1 + Point::new(self.dy(), -self.dx()))
    }
    /// Line of length 1 starting at `p1` with the same direction.
    /// Zero-length lines come back unchanged
    pub fn unit_vector(&self) -> LineSegment {
        self.with_length(1.0)
    }
    /// Keeps `p1` and the direction, moves `p2` so the line has the given length.
    /// Zero-length lines have no direction and come back unchanged
    pub fn with_length(&self, len: f64) -> LineSegment {
        let current = self.length();
        if current == 0.0 {
            return *self;
        }
        LineSegment::new(self.p1, self.p1 + (self.p2 - self.p1) * (len / current))
    }
    pub fn translated(&self, offset: Point) -> LineSegment {
        LineSegment::new(self.p1 + offset, self.p2 + offset)
    }
}

/// Floating point rectangle. Width and height are non-negative once normalized
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(_left: f64, _top: f64, _width: f64, _height: f64) -> Self {
        Rect {
            left: _left,
            top: _top,
            width: _width,
            height: _height,
        }
    }
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top)
    }
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom())
    }
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }
    /// Same area with non-negative width and height
    pub fn normalized(&self) -> Rect {
        let (left, width) = if self.width < 0.0 {
            (self.left + self.width, -self.width)
        } else {
            (self.left, self.width)
        };
        let (top, height) = if self.height < 0.0 {
            (self.top + self.height, -self.height)
        } else {
            (self.top, self.height)
        };
        Rect::new(left, top, width, height)
    }
    pub fn translated(&self, offset: Point) -> Rect {
        Rect::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
    /// `[left, top, width, height]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.top, self.width, self.height]
    }
}

/// Integer pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RectI {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl RectI {
    pub fn new(_left: i32, _top: i32, _width: i32, _height: i32) -> Self {
        RectI {
            left: _left,
            top: _top,
            width: _width,
            height: _height,
        }
    }
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.left as f64,
            self.top as f64,
            self.width as f64,
            self.height as f64,
        )
    }
    pub fn to_array(&self) -> [i32; 4] {
        [self.left, self.top, self.width, self.height]
    }
}

/// Closed polygon given by its vertices in order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
}

/// Sequence of pen movements, enough to describe stroke-only markers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Path {
            commands: Vec::new(),
        }
    }
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }
    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }
    /// Straight strokes making up the path
    pub fn segments(&self) -> Vec<LineSegment> {
        let mut segments = Vec::new();
        let mut pen: Option<Point> = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => pen = Some(p),
                PathCommand::LineTo(p) => {
                    if let Some(start) = pen {
                        segments.push(LineSegment::new(start, p));
                    }
                    pen = Some(p);
                }
            }
        }
        segments
    }
}

/// Square of the distance between two points. Take the square root for the actual distance
pub fn squared_distance(a: &Point, b: &Point) -> f64 {
    let difference = *a - *b;
    difference.x * difference.x + difference.y * difference.y
}

/// Square of the distance of a point from the origin
pub fn squared_length(p: &Point) -> f64 {
    p.x * p.x + p.y * p.y
}

pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    f64::sqrt(squared_distance(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_euclidean_distance() {
        let p1 = Point::new(341.0, 264.0);
        let p2 = Point::new(421.0, 427.0);
        let ans = euclidean_distance(&p1, &p2);
        approx::assert_abs_diff_eq!(ans, 181.573676, epsilon = 1e-6);
        assert_eq!(squared_distance(&p1, &p2), 32969.0);
    }
    #[test]
    fn test_squared_length() {
        assert_eq!(squared_length(&Point::new(3.0, -4.0)), 25.0);
        assert_eq!(squared_length(&Point::default()), 0.0);
    }
    #[test]
    fn test_to_grid_halves_up() {
        assert_eq!(Point::new(-3.5, 2.5).to_grid(), Some((-3, 3)));
        assert_eq!(Point::new(-3.6, 10.4).to_grid(), Some((-4, 10)));
        assert_eq!(Point::new(0.49, -0.5).to_grid(), Some((0, 0)));
        assert_eq!(Point::new(3.0e9, 0.0).to_grid(), None);
        assert_eq!(Point::new(f64::NAN, 0.0).to_grid(), None);
    }
    #[test]
    fn test_normal_vector() {
        let line = LineSegment::from_coords(1.0, 1.0, 4.0, 1.0);
        let normal = line.normal_vector();
        assert_eq!(normal.p1, Point::new(1.0, 1.0));
        assert_eq!(normal.p2, Point::new(1.0, -2.0));
        assert_eq!(normal.length(), line.length());
    }
    #[test]
    fn test_with_length() {
        let line = LineSegment::from_coords(0.0, 0.0, 3.0, 4.0);
        let short = line.with_length(10.0);
        approx::assert_abs_diff_eq!(short.p2.x, 6.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(short.p2.y, 8.0, epsilon = 1e-12);
        let unit = line.unit_vector();
        approx::assert_abs_diff_eq!(unit.length(), 1.0, epsilon = 1e-12);
        let degenerate = LineSegment::from_coords(2.0, 2.0, 2.0, 2.0);
        assert_eq!(degenerate.with_length(5.0), degenerate);
    }
    #[test]
    fn test_point_at_extrapolates() {
        let line = LineSegment::from_coords(0.0, 0.0, 2.0, 0.0);
        assert_eq!(line.point_at(0.5), Point::new(1.0, 0.0));
        assert_eq!(line.point_at(-1.0), Point::new(-2.0, 0.0));
        assert_eq!(line.center(), Point::new(1.0, 0.0));
    }
    #[test]
    fn test_rect_normalized() {
        let rect = Rect::new(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(rect, Rect::new(6.0, 4.0, 4.0, 6.0));
        assert_eq!(rect.to_array(), [6.0, 4.0, 4.0, 6.0]);
    }
    #[test]
    fn test_path_segments() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0));
        path.line_to(Point::new(1.0, 0.0));
        path.line_to(Point::new(1.0, 1.0));
        path.move_to(Point::new(5.0, 5.0));
        path.line_to(Point::new(6.0, 5.0));
        let segments = path.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], LineSegment::from_coords(5.0, 5.0, 6.0, 5.0));
    }
}
