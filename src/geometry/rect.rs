use crate::cgt_errors::PixelRectOverflowError;
use crate::utils::{Point, Rect, RectI};

/// Corners and centre of a rectangle as
/// `(top_left, top_right, bottom_left, bottom_right, centre)`.
///
/// The centre is computed in floating point, so odd-sized pixel rectangles
/// (via [`RectI::to_rect`]) keep their half-pixel centre.
pub fn rectangle_corners_and_centre(rect: &Rect) -> (Point, Point, Point, Point, Point) {
    let top_left = rect.top_left();
    let top_right = rect.top_right();
    let bottom_left = rect.bottom_left();
    let bottom_right = rect.bottom_right();
    let centre = (top_left + bottom_right) / 2.0;
    (top_left, top_right, bottom_left, bottom_right, centre)
}

/// Rectangle with non-negative size spanned by two opposite corners given in any order
pub fn normalize_rect(corner: &Point, opposite_corner: &Point) -> Rect {
    let width = (opposite_corner.x - corner.x).abs();
    let height = (opposite_corner.y - corner.y).abs();
    let left = f64::min(opposite_corner.x, corner.x);
    let top = f64::min(opposite_corner.y, corner.y);
    Rect::new(left, top, width, height)
}

// Floor/ceil of an edge, if it lands on the i32 grid
fn grid_edge(value: f64) -> Option<i64> {
    if !value.is_finite() || value < i32::MIN as f64 || value > i32::MAX as f64 {
        return None;
    }
    Some(value as i64)
}

fn to_pixel_rect(left: i64, top: i64, width: i64, height: i64) -> Option<RectI> {
    // right and bottom edges must stay on the grid too
    i32::try_from(left + width).ok()?;
    i32::try_from(top + height).ok()?;
    Some(RectI::new(
        i32::try_from(left).ok()?,
        i32::try_from(top).ok()?,
        i32::try_from(width).ok()?,
        i32::try_from(height).ok()?,
    ))
}

// Edges as (left, top, width, height) in i64 so growing a side cannot wrap
fn aligned_edges(rect: &Rect) -> Option<(i64, i64, i64, i64)> {
    let rect = rect.normalized();
    let left = grid_edge(rect.left.floor())?;
    let top = grid_edge(rect.top.floor())?;
    let right = grid_edge(rect.right().ceil())?;
    let bottom = grid_edge(rect.bottom().ceil())?;
    Some((left, top, right - left, bottom - top))
}

/// Smallest integer rectangle containing `rect`
pub fn aligned_rect(rect: &Rect) -> Result<RectI, PixelRectOverflowError> {
    aligned_edges(rect)
        .and_then(|(left, top, width, height)| to_pixel_rect(left, top, width, height))
        .ok_or(PixelRectOverflowError { rect: *rect })
}

/// Aligns `rect` outward onto the pixel grid and, when `enforce` is set,
/// grows odd sides by one pixel so both width and height are even.
///
/// Fails when the aligned rectangle does not fit in `i32` pixel coordinates.
pub fn even_dimensions_rect(rect: &Rect, enforce: bool) -> Result<RectI, PixelRectOverflowError> {
    even_edges(rect, enforce)
        .and_then(|(left, top, width, height)| to_pixel_rect(left, top, width, height))
        .ok_or(PixelRectOverflowError { rect: *rect })
}

fn even_edges(rect: &Rect, enforce: bool) -> Option<(i64, i64, i64, i64)> {
    let (left, top, mut width, mut height) = aligned_edges(rect)?;
    if enforce {
        width += width % 2;
        height += height % 2;
    }
    Some((left, top, width, height))
}

/// Even-sized pixel rectangle of a region drawn at `position` in the scene
pub fn even_dimensions_rect_at(
    rect: &Rect,
    position: &Point,
    enforce: bool,
) -> Result<RectI, PixelRectOverflowError> {
    let overflow = PixelRectOverflowError {
        rect: rect.translated(*position),
    };
    let (left, top, width, height) = even_edges(rect, enforce).ok_or_else(|| overflow.clone())?;
    let (dx, dy) = position.to_grid().ok_or_else(|| overflow.clone())?;
    to_pixel_rect(left + dx as i64, top + dy as i64, width, height).ok_or(overflow)
}
