use crate::cgt_errors::ParallelLinesError;
use crate::utils::{LineSegment, Point};

/// Intersection of a probe (normal) line with a clone line.
///
/// Based on the "Faster Line Segment Intersection" parametrization from Graphics Gems III.
/// Both lines are treated as infinite for the intersection itself; the second
/// value is the extension of `clone` needed to reach the intersection, `None`
/// when the intersection already lies on the clone segment.
pub fn cgt_intersection(
    normal: &LineSegment,
    clone: &LineSegment,
) -> Result<(Point, Option<LineSegment>), ParallelLinesError> {
    let a = normal.p2 - normal.p1;
    let b = clone.p1 - clone.p2;
    let c = normal.p1 - clone.p1;

    let denominator = a.y * b.x - a.x * b.y;
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(ParallelLinesError { denominator });
    }

    let reciprocal = 1.0 / denominator;
    let na = (b.y * c.x - b.x * c.y) * reciprocal;
    let intersection = normal.p1 + a * na;

    // Position along the clone: below 0 is before p1, above 1 is past p2
    let nb = (a.x * c.y - a.y * c.x) * reciprocal;
    let extension = if nb < 0.0 {
        Some(LineSegment::new(clone.p1, intersection))
    } else if nb > 1.0 {
        Some(LineSegment::new(clone.p2, intersection))
    } else {
        None
    };

    Ok((intersection, extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_inside_clone() {
        let normal = LineSegment::from_coords(0.0, 0.0, 0.0, 10.0);
        let clone = LineSegment::from_coords(-5.0, 5.0, 5.0, 5.0);
        let (intersection, extension) = cgt_intersection(&normal, &clone).unwrap();
        assert_eq!(intersection, Point::new(0.0, 5.0));
        assert!(extension.is_none());
    }

    #[test]
    fn test_parallel_lines() {
        let normal = LineSegment::from_coords(0.0, 0.0, 0.0, 10.0);
        let clone = LineSegment::from_coords(1.0, 0.0, 1.0, 10.0);
        let err = cgt_intersection(&normal, &clone).unwrap_err();
        assert_eq!(err.denominator, 0.0);
    }

    #[test]
    fn test_non_finite_denominator() {
        let normal = LineSegment::from_coords(0.0, 0.0, f64::NAN, 10.0);
        let clone = LineSegment::from_coords(-5.0, 5.0, 5.0, 5.0);
        assert!(cgt_intersection(&normal, &clone).is_err());
    }

    #[test]
    fn test_extension_beyond_p2() {
        let normal = LineSegment::from_coords(8.0, 0.0, 8.0, 10.0);
        let clone = LineSegment::from_coords(-5.0, 5.0, 5.0, 5.0);
        let (intersection, extension) = cgt_intersection(&normal, &clone).unwrap();
        assert_eq!(intersection, Point::new(8.0, 5.0));
        let extension = extension.expect("intersection lies past p2");
        assert_eq!(extension.p1, clone.p2);
        assert_eq!(extension.p2, intersection);
    }

    #[test]
    fn test_extension_before_p1() {
        let normal = LineSegment::from_coords(-9.0, 0.0, -9.0, 10.0);
        let clone = LineSegment::from_coords(-5.0, 5.0, 5.0, 5.0);
        let (intersection, extension) = cgt_intersection(&normal, &clone).unwrap();
        assert_eq!(intersection, Point::new(-9.0, 5.0));
        let extension = extension.expect("intersection lies before p1");
        assert_eq!(extension, LineSegment::new(clone.p1, intersection));
    }
}
