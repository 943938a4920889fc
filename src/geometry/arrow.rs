use serde::{Deserialize, Serialize};

use crate::cgt_errors::ParallelLinesError;
use crate::geometry::cgt_intersection;
use crate::utils::{LineSegment, Polygon};

/// Distance from the arrow tip back to the base of the head
pub const ARROW_HEAD_LENGTH: f64 = 10.0;
/// Length of each perpendicular offshoot forming the head's base
pub const ARROW_HEAD_HALF_WIDTH: f64 = 5.0;
/// Arrows shorter than this get no head
pub const DEFAULT_ARROW_LENGTH_CUTOFF: f64 = 10.0;

/// Visual tuning of measurement arrow heads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    pub head_length: f64,
    pub half_width: f64,
    pub length_cutoff: f64,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        ArrowStyle {
            head_length: ARROW_HEAD_LENGTH,
            half_width: ARROW_HEAD_HALF_WIDTH,
            length_cutoff: DEFAULT_ARROW_LENGTH_CUTOFF,
        }
    }
}

/// Arrow from the centre of `line` to the parallel `clone`, along the normal of `line`.
///
/// Returns the arrow and, when the arrow lands outside the clone segment,
/// the extension of the clone that reaches the arrow's tip.
pub fn make_arrow(
    line: &LineSegment,
    clone: &LineSegment,
) -> Result<(LineSegment, Option<LineSegment>), ParallelLinesError> {
    let centre = line.center();
    let centred_normal = line.normal_vector().translated(centre - line.p1);

    let (intersection, extension) = cgt_intersection(&centred_normal, clone)?;
    tracing::trace!(?centre, ?intersection, extended = extension.is_some(), "arrow built");

    Ok((LineSegment::new(centre, intersection), extension))
}

/// Triangular head at `line.p2`, or `None` when the line is shorter than `length_cutoff`
pub fn make_arrow_head(line: &LineSegment, length_cutoff: f64) -> Option<Polygon> {
    let style = ArrowStyle {
        length_cutoff,
        ..ArrowStyle::default()
    };
    make_arrow_head_styled(line, &style)
}

pub fn make_arrow_head_styled(line: &LineSegment, style: &ArrowStyle) -> Option<Polygon> {
    let length = line.length();
    if length < style.length_cutoff || length == 0.0 {
        return None;
    }

    // Normal moved to the base of the head
    let delta_t = (length - style.head_length) / length;
    let offset = line.point_at(delta_t) - line.p1;
    let offset_normal = line.normal_vector().translated(offset);
    let opposite_normal = LineSegment::new(offset_normal.p1, offset_normal.point_at(-1.0));

    let side = offset_normal.with_length(style.half_width);
    let other_side = opposite_normal.with_length(style.half_width);

    Some(Polygon::new(vec![line.p2, side.p2, other_side.p2]))
}
