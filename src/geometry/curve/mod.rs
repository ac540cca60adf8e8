mod bezier7;

pub use bezier7::Bezier7;

use crate::math::Point2;

/// A parametric curve in the plane, sampled over `t` in `[0, 1]`.
///
/// Evaluation is total: parameters outside `[0, 1]` are not clamped and
/// simply extrapolate the defining polynomial.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 2D point.
    fn evaluate(&self, t: f64) -> Point2;
}
