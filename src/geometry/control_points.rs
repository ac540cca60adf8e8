use crate::error::{GeometryError, RopeError};
use crate::math::projection_2d::adjust_point;
use crate::math::Point2;

/// Number of free interior control points of a rope curve.
pub const INTERIOR_POINT_COUNT: usize = 6;

/// The six interior control points of a degree-7 rope curve.
///
/// Index `i` drives Bernstein term `i + 1`; the two fixed endpoints are
/// held separately. The set is read-only input: adjusting it derives a
/// new set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointSet {
    points: [Point2; INTERIOR_POINT_COUNT],
}

impl ControlPointSet {
    /// Creates a set from exactly six points.
    #[must_use]
    pub fn new(points: [Point2; INTERIOR_POINT_COUNT]) -> Self {
        Self { points }
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point2; INTERIOR_POINT_COUNT] {
        &self.points
    }

    /// Returns a new set with every point's perpendicular offset from the
    /// line `start → end` scaled by `lambda`.
    #[must_use]
    pub fn adjusted(&self, start: &Point2, end: &Point2, lambda: f64) -> Self {
        Self {
            points: self.points.map(|p| adjust_point(&p, start, end, lambda)),
        }
    }

    /// Interpolates each coordinate linearly between `self` (`f = 0`) and
    /// `other` (`f = 1`).
    #[must_use]
    pub fn lerp(&self, other: &Self, f: f64) -> Self {
        let mut points = self.points;
        for (p, q) in points.iter_mut().zip(other.points.iter()) {
            *p += (*q - *p) * f;
        }
        Self { points }
    }
}

impl TryFrom<&[Point2]> for ControlPointSet {
    type Error = RopeError;

    fn try_from(points: &[Point2]) -> Result<Self, Self::Error> {
        let array: [Point2; INTERIOR_POINT_COUNT] =
            points.try_into().map_err(|_| GeometryError::ControlPointCount {
                expected: INTERIOR_POINT_COUNT,
                actual: points.len(),
            })?;
        Ok(Self { points: array })
    }
}

impl From<[Point2; INTERIOR_POINT_COUNT]> for ControlPointSet {
    fn from(points: [Point2; INTERIOR_POINT_COUNT]) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-10;

    fn sample_points() -> Vec<Point2> {
        vec![
            Point2::new(10.0, 20.0),
            Point2::new(40.0, 70.0),
            Point2::new(60.0, 10.0),
            Point2::new(110.0, 90.0),
            Point2::new(150.0, 30.0),
            Point2::new(190.0, 50.0),
        ]
    }

    #[test]
    fn try_from_six_points() {
        let pts = sample_points();
        let set = ControlPointSet::try_from(pts.as_slice()).unwrap();
        assert_eq!(set.points().as_slice(), pts.as_slice());
    }

    #[test]
    fn try_from_rejects_wrong_counts() {
        let pts = sample_points();
        for n in [0, 5] {
            let err = ControlPointSet::try_from(&pts[..n]).unwrap_err();
            assert!(matches!(
                err,
                RopeError::Geometry(GeometryError::ControlPointCount { expected: 6, actual }) if actual == n
            ));
        }

        let mut seven = pts.clone();
        seven.push(Point2::new(0.0, 0.0));
        let err = ControlPointSet::try_from(seven.as_slice()).unwrap_err();
        assert_eq!(err.to_string(), "expected 6 control points, got 7");
    }

    #[test]
    fn adjusted_leaves_original_untouched() {
        let set = ControlPointSet::try_from(sample_points().as_slice()).unwrap();
        let start = Point2::new(0.0, 50.0);
        let end = Point2::new(200.0, 50.0);
        let adjusted = set.adjusted(&start, &end, 2.0);

        assert_eq!(set.points()[0], Point2::new(10.0, 20.0));
        assert_abs_diff_eq!(adjusted.points()[0].x, 10.0, epsilon = TOL);
        assert_abs_diff_eq!(adjusted.points()[0].y, -10.0, epsilon = TOL);
        assert_abs_diff_eq!(adjusted.points()[3].y, 130.0, epsilon = TOL);
    }

    #[test]
    fn adjusted_identity_at_one() {
        let set = ControlPointSet::try_from(sample_points().as_slice()).unwrap();
        let adjusted = set.adjusted(&Point2::new(-5.0, 3.0), &Point2::new(210.0, 80.0), 1.0);
        for (a, b) in set.points().iter().zip(adjusted.points().iter()) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = ControlPointSet::new([Point2::new(0.0, 0.0); 6]);
        let b = ControlPointSet::try_from(sample_points().as_slice()).unwrap();

        assert_eq!(a.lerp(&b, 0.0), a);
        let end = a.lerp(&b, 1.0);
        for (p, q) in end.points().iter().zip(b.points().iter()) {
            assert_abs_diff_eq!(p.x, q.x, epsilon = TOL);
            assert_abs_diff_eq!(p.y, q.y, epsilon = TOL);
        }

        let mid = a.lerp(&b, 0.5);
        assert_abs_diff_eq!(mid.points()[3].x, 55.0, epsilon = TOL);
        assert_abs_diff_eq!(mid.points()[3].y, 45.0, epsilon = TOL);
    }
}
