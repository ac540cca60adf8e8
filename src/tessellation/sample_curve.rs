use crate::error::Result;
use crate::geometry::curve::Curve;

use super::{Polyline, SamplingParams};

/// Samples a curve at uniform parameter steps into a polyline.
///
/// Produces `steps + 1` points at `t = i / steps` for `i` in `0..=steps`,
/// covering the closed domain `[0, 1]`.
pub struct SampleCurve<'a, C: Curve> {
    curve: &'a C,
    params: SamplingParams,
}

impl<'a, C: Curve> SampleCurve<'a, C> {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: SamplingParams) -> Self {
        Self { curve, params }
    }

    /// Executes the sampling, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if the step count is zero.
    pub fn execute(&self) -> Result<Polyline> {
        self.params.validate()?;
        let steps = self.params.steps;
        let n = f64::from(steps);

        let points = (0..=steps)
            .map(|i| self.curve.evaluate(f64::from(i) / n))
            .collect();
        Ok(Polyline { points })
    }
}
