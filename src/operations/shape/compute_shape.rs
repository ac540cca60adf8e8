use crate::error::Result;
use crate::geometry::curve::Bezier7;
use crate::geometry::ControlPointSet;
use crate::math::Point2;
use crate::operations::solve::{SolveLambda, SolverParams};
use crate::tessellation::{Polyline, SampleCurve, SamplingParams};

/// Computes the sampled rope polyline for a set of interior control points.
///
/// # Algorithm
///
/// 1. Solve λ so the curve's sampled length matches `target_length`
/// 2. Scale each interior point's offset from the anchor line by λ
/// 3. Sample the degree-7 curve `[start, adjusted…, end]`
///
/// The solver and the final sampling share one step count, so the rendered
/// polyline has exactly the length the solver aimed for.
#[derive(Debug)]
pub struct ComputeShape {
    start: Point2,
    end: Point2,
    base_points: Vec<Point2>,
    target_length: f64,
    params: SolverParams,
}

impl ComputeShape {
    /// Creates a new shape computation with default solver parameters.
    #[must_use]
    pub fn new(start: Point2, end: Point2, base_points: Vec<Point2>, target_length: f64) -> Self {
        Self {
            start,
            end,
            base_points,
            target_length,
            params: SolverParams::default(),
        }
    }

    /// Sets the number of sampling steps for both solving and rendering.
    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.params.sampling = SamplingParams::new(steps);
        self
    }

    /// Replaces all solver parameters.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the computation, returning the adjusted curve.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ControlPointCount` if there are not exactly 6 base points
    /// - any error from [`SolveLambda::execute`]
    pub fn curve(&self) -> Result<Bezier7> {
        let base = ControlPointSet::try_from(self.base_points.as_slice())?;
        let solver = SolveLambda::new(base, self.start, self.end, self.target_length)
            .with_params(self.params);
        let lambda = solver.execute()?;
        Ok(solver.curve_at(lambda))
    }

    /// Executes the computation, returning `steps + 1` samples of the curve.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ControlPointCount` if there are not exactly 6 base points
    /// - any error from [`SolveLambda::execute`]
    pub fn execute(&self) -> Result<Polyline> {
        let curve = self.curve()?;
        SampleCurve::new(&curve, self.params.sampling).execute()
    }
}
