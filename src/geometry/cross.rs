use crate::utils::{Path, Point};

/// Offset of each arm end of the point marker cross
pub const CROSS_ARM: f64 = 10.0;

/// Diagonal cross centred on `point`, drawn as four strokes out from the centre
pub fn make_cross_path(point: &Point) -> Path {
    let up_right = Point::new(CROSS_ARM, CROSS_ARM);
    let up_left = Point::new(-CROSS_ARM, CROSS_ARM);

    let mut path = Path::new();
    for arm in [up_right, up_left, -up_right, -up_left] {
        path.move_to(*point);
        path.line_to(*point + arm);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::PathCommand;

    #[test]
    fn test_cross_path() {
        let centre = Point::new(3.0, 4.0);
        let path = make_cross_path(&centre);
        assert_eq!(path.commands().len(), 8);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(centre));
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(13.0, 14.0)));
        assert_eq!(path.commands()[7], PathCommand::LineTo(Point::new(13.0, -6.0)));
        assert!(path.segments().iter().all(|s| s.p1 == centre));
    }
}
