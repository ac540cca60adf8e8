use tracing::{debug, trace, warn};

use crate::error::{GeometryError, Result};
use crate::geometry::curve::Bezier7;
use crate::geometry::ControlPointSet;
use crate::math::Point2;
use crate::tessellation::SampleCurve;

use super::SolverParams;

/// Relative length miss above which a solve is reported as off-target.
const MISS_WARN_RATIO: f64 = 0.01;

/// Finds the offset scale λ that gives a rope curve a target arc length.
///
/// Each interior control point is moved along the perpendicular to the
/// anchor line `start → end`, its offset scaled by λ. The curve's sampled
/// length is assumed to grow with λ, and a fixed number of bisection steps
/// narrows `[lower_bound, upper_bound]` around the target.
///
/// A target outside the reachable range is not an error: the search
/// settles next to the nearest bound and the curve length misses the
/// target.
#[derive(Debug)]
pub struct SolveLambda {
    base: ControlPointSet,
    start: Point2,
    end: Point2,
    target_length: f64,
    params: SolverParams,
}

impl SolveLambda {
    /// Creates a new `SolveLambda` operation with default solver parameters.
    #[must_use]
    pub fn new(base: ControlPointSet, start: Point2, end: Point2, target_length: f64) -> Self {
        Self {
            base,
            start,
            end,
            target_length,
            params: SolverParams::default(),
        }
    }

    /// Replaces the solver parameters.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Builds the curve whose interior points are offset-scaled by `lambda`.
    #[must_use]
    pub fn curve_at(&self, lambda: f64) -> Bezier7 {
        let adjusted = self.base.adjusted(&self.start, &self.end, lambda);
        Bezier7::from_parts(self.start, adjusted.points(), self.end)
    }

    /// Estimated arc length of the curve at `lambda`, using the solver's sampling.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if the step count is zero.
    pub fn length_at(&self, lambda: f64) -> Result<f64> {
        let curve = self.curve_at(lambda);
        let polyline = SampleCurve::new(&curve, self.params.sampling).execute()?;
        Ok(polyline.length())
    }

    /// Executes the bisection, returning the final midpoint λ.
    ///
    /// With zero iterations the identity scale `λ = 1`, clamped into the
    /// search bounds, is returned.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if the target length is NaN or infinite
    /// - `OperationError::InvalidInput` for non-finite or inverted bounds
    /// - `TessellationError::InvalidParameters` if the step count is zero
    pub fn execute(&self) -> Result<f64> {
        if !self.target_length.is_finite() {
            return Err(GeometryError::NonFinite("target length").into());
        }
        self.params.validate()?;

        let (lambda, achieved) = self.bisect()?;
        debug!(
            lambda,
            achieved,
            target = self.target_length,
            "solved rope lambda"
        );
        if (achieved - self.target_length).abs() > self.target_length.abs() * MISS_WARN_RATIO {
            warn!(
                lambda,
                achieved,
                target = self.target_length,
                "target length not reachable within lambda bounds"
            );
        }

        Ok(lambda)
    }

    /// Runs the bisection on validated parameters, returning λ and the
    /// sampled length at that λ.
    fn bisect(&self) -> Result<(f64, f64)> {
        let mut lower = self.params.lower_bound;
        let mut upper = self.params.upper_bound;
        let mut lambda = 1.0_f64.clamp(lower, upper);
        let mut achieved = None;

        for iteration in 0..self.params.iterations {
            lambda = (lower + upper) * 0.5;
            let length = self.length_at(lambda)?;
            trace!(iteration, lambda, length, "lambda bisection step");
            achieved = Some(length);

            if length < self.target_length {
                lower = lambda;
            } else {
                upper = lambda;
            }
        }

        // The last step already sampled the returned λ.
        let achieved = match achieved {
            Some(length) => length,
            None => self.length_at(lambda)?,
        };
        Ok((lambda, achieved))
    }
}
