use super::Point2;

/// Returns the orthogonal projection of `point` onto the infinite line
/// through `line_start` and `line_end`.
///
/// When the two line points coincide the line has no direction, and the
/// projection falls back to `line_start`.
#[must_use]
pub fn project_onto_line(point: &Point2, line_start: &Point2, line_end: &Point2) -> Point2 {
    let v = line_end - line_start;
    let len_sq = v.norm_squared();

    // Exact zero only: near-coincident endpoints still define a direction.
    let t = if len_sq > 0.0 {
        (point - line_start).dot(&v) / len_sq
    } else {
        0.0
    };

    line_start + v * t
}

/// Scales the perpendicular offset of `point` from the line through
/// `line_start` and `line_end` by `lambda`.
///
/// - `lambda = 1` returns `point` unchanged
/// - `lambda = 0` collapses `point` onto the line
/// - `lambda > 1` pushes it away, `0 < lambda < 1` pulls it closer
/// - `lambda < 0` mirrors it to the other side of the line
#[must_use]
pub fn adjust_point(point: &Point2, line_start: &Point2, line_end: &Point2, lambda: f64) -> Point2 {
    let foot = project_onto_line(point, line_start, line_end);
    foot + (point - foot) * lambda
}
