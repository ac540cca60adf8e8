use crate::math::{Point2, Vector2};

use super::Curve;

/// Binomial coefficients `C(7, i)`.
const BINOMIAL_7: [f64; 8] = [1.0, 7.0, 21.0, 35.0, 35.0, 21.0, 7.0, 1.0];

/// A degree-7 Bezier curve defined by 8 control points.
///
/// The parametric form is the Bernstein sum
/// `B(t) = Σ C(7,i) (1-t)^(7-i) t^i P_i` for `i` in `0..=7`.
/// The curve passes through `P0` at `t = 0` and `P7` at `t = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier7 {
    points: [Point2; 8],
}

impl Bezier7 {
    /// Creates a curve from all 8 control points.
    #[must_use]
    pub fn new(points: [Point2; 8]) -> Self {
        Self { points }
    }

    /// Creates a curve from two fixed endpoints and six interior control points.
    #[must_use]
    pub fn from_parts(start: Point2, interior: &[Point2; 6], end: Point2) -> Self {
        let mut points = [start; 8];
        points[1..7].copy_from_slice(interior);
        points[7] = end;
        Self { points }
    }

    /// Returns the control points in order.
    #[must_use]
    pub fn control_points(&self) -> &[Point2; 8] {
        &self.points
    }

    /// Returns the first control point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.points[0]
    }

    /// Returns the last control point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.points[7]
    }
}

/// Returns `[1, x, x², …, x^(N-1)]`.
///
/// Built by repeated multiplication so that `x = 0` yields exact zeros
/// past the first entry.
fn powers<const N: usize>(x: f64) -> [f64; N] {
    let mut out = [1.0; N];
    for k in 1..N {
        out[k] = out[k - 1] * x;
    }
    out
}

impl Curve for Bezier7 {
    fn evaluate(&self, t: f64) -> Point2 {
        let t_pow = powers::<8>(t);
        let s_pow = powers::<8>(1.0 - t);

        let mut acc = Vector2::zeros();
        for (i, p) in self.points.iter().enumerate() {
            let basis = BINOMIAL_7[i] * s_pow[7 - i] * t_pow[i];
            acc += p.coords * basis;
        }
        Point2::from(acc)
    }
}
