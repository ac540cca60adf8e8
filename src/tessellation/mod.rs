mod sample_curve;

pub use sample_curve::SampleCurve;

use crate::error::{Result, TessellationError};
use crate::math::Point2;
use crate::operations::query::ArcLength;

/// Parameters controlling curve sampling resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingParams {
    /// Number of uniform parameter steps; the polyline has `steps + 1` points.
    pub steps: u32,
}

impl SamplingParams {
    /// Creates sampling parameters with the given step count.
    #[must_use]
    pub fn new(steps: u32) -> Self {
        Self { steps }
    }

    /// Checks that the step count can produce a polyline.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::InvalidParameters` if `steps` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(
                TessellationError::InvalidParameters("steps must be at least 1".into()).into(),
            );
        }
        Ok(())
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { steps: 300 }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first vertex, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    /// Returns the last vertex, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Sum of the chord lengths between consecutive vertices.
    #[must_use]
    pub fn length(&self) -> f64 {
        ArcLength::new(&self.points).execute()
    }
}
