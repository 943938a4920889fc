use itertools::Itertools;

use crate::annotation::AnnotationLine;
use crate::measure::DifferenceRecord;

/// Length of a line's position offset measured along its unit normal, in real-world units.
///
/// Each position component is weighted by the matching normal component on
/// its own, so the value is a magnitude and never negative.
pub fn perpendicular_dist_to_position(line: &AnnotationLine, scale: f64) -> f64 {
    let unit_normal = line.get_line().normal_vector().unit_vector();
    let position = line.get_position();
    let del_x = position.x * unit_normal.dx() * scale;
    let del_y = position.y * unit_normal.dy() * scale;
    f64::sqrt(del_x * del_x + del_y * del_y)
}

/// Signed displacement of `later` from `earlier`, projected on the unit normal of `earlier`
pub fn normal_displacement(earlier: &AnnotationLine, later: &AnnotationLine) -> f64 {
    let unit_normal = earlier.get_line().normal_vector().unit_vector();
    let shift = later.scene_line().center() - earlier.scene_line().center();
    shift.x * unit_normal.dx() + shift.y * unit_normal.dy()
}

/// Frame-to-frame movement of one crystal face.
///
/// `lines` are the markings of a single face; they are ordered by frame and
/// each consecutive pair becomes one [`DifferenceRecord`].
pub fn difference_series(lines: &[AnnotationLine]) -> Vec<DifferenceRecord> {
    lines
        .iter()
        .sorted_by_key(|line| line.get_frame())
        .tuple_windows()
        .map(|(earlier, later)| {
            let frame_interval = later.get_frame() as i64 - earlier.get_frame() as i64;
            DifferenceRecord::new(frame_interval, normal_displacement(earlier, later))
        })
        .collect()
}
