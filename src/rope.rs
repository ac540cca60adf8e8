use crate::error::Result;
use crate::geometry::curve::Bezier7;
use crate::geometry::ControlPointSet;
use crate::math::Point2;
use crate::operations::shape::ComputeShape;
use crate::operations::solve::{SolveLambda, SolverParams};
use crate::tessellation::Polyline;

/// Ratio of the default target length to the horizontal anchor span.
pub const DEFAULT_SLACK: f64 = 1.5;

/// A rope stretched between two fixed points.
///
/// The rope's shape follows six interior control points, but its length
/// stays fixed for the lifetime of the instance. By default the length is
/// [`DEFAULT_SLACK`] times the horizontal distance between the endpoints.
#[derive(Debug, Clone)]
pub struct Rope {
    start: Point2,
    end: Point2,
    base: ControlPointSet,
    target_length: f64,
    params: SolverParams,
}

impl Rope {
    /// Creates a rope from its endpoints and six interior control points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ControlPointCount` if `base_points` does not
    /// hold exactly six points.
    pub fn new(start: Point2, end: Point2, base_points: &[Point2]) -> Result<Self> {
        let base = ControlPointSet::try_from(base_points)?;
        Ok(Self {
            start,
            end,
            base,
            target_length: (end.x - start.x) * DEFAULT_SLACK,
            params: SolverParams::default(),
        })
    }

    /// Overrides the target length.
    #[must_use]
    pub fn with_target_length(mut self, target_length: f64) -> Self {
        self.target_length = target_length;
        self
    }

    /// Overrides the solver parameters.
    #[must_use]
    pub fn with_params(mut self, params: SolverParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the fixed start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the fixed end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the arc length the rope is held to.
    #[must_use]
    pub fn target_length(&self) -> f64 {
        self.target_length
    }

    /// Returns the current (unadjusted) interior control points.
    #[must_use]
    pub fn base_points(&self) -> &ControlPointSet {
        &self.base
    }

    /// Replaces the interior control points, e.g. for the next animation frame.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ControlPointCount` if `base_points` does not
    /// hold exactly six points. The rope is left unchanged on error.
    pub fn set_base_points(&mut self, base_points: &[Point2]) -> Result<()> {
        self.base = ControlPointSet::try_from(base_points)?;
        Ok(())
    }

    fn solver(&self) -> SolveLambda {
        SolveLambda::new(self.base, self.start, self.end, self.target_length)
            .with_params(self.params)
    }

    /// Solves the offset scale λ for the current control points.
    ///
    /// # Errors
    ///
    /// Returns an error if the target length or solver parameters are invalid.
    pub fn lambda(&self) -> Result<f64> {
        self.solver().execute()
    }

    /// Returns the six interior points after λ adjustment.
    ///
    /// # Errors
    ///
    /// Returns an error if the target length or solver parameters are invalid.
    pub fn adjusted_points(&self) -> Result<ControlPointSet> {
        let lambda = self.lambda()?;
        Ok(self.base.adjusted(&self.start, &self.end, lambda))
    }

    /// Returns the length-constrained degree-7 curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the target length or solver parameters are invalid.
    pub fn curve(&self) -> Result<Bezier7> {
        self.shape().curve()
    }

    /// Returns the sampled polyline to draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the target length or solver parameters are invalid.
    pub fn polyline(&self) -> Result<Polyline> {
        self.shape().execute()
    }

    fn shape(&self) -> ComputeShape {
        ComputeShape::new(
            self.start,
            self.end,
            self.base.points().to_vec(),
            self.target_length,
        )
        .with_params(self.params)
    }
}
