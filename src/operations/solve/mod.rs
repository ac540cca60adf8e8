mod lambda;

pub use lambda::SolveLambda;

use crate::error::{OperationError, Result};
use crate::tessellation::SamplingParams;

/// Parameters controlling the λ bisection.
///
/// The search always runs exactly `iterations` halvings of
/// `[lower_bound, upper_bound]`; there is no convergence-based early exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParams {
    /// Lower end of the λ search interval.
    pub lower_bound: f64,
    /// Upper end of the λ search interval.
    pub upper_bound: f64,
    /// Number of bisection steps.
    pub iterations: u32,
    /// Curve sampling used to estimate arc length. Must match the sampling
    /// used to render the final polyline.
    pub sampling: SamplingParams,
}

impl SolverParams {
    /// Checks bounds and sampling resolution.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if a bound is not finite or
    ///   `lower_bound > upper_bound`
    /// - `TessellationError::InvalidParameters` if the step count is zero
    pub fn validate(&self) -> Result<()> {
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err(OperationError::InvalidInput("lambda bounds must be finite".into()).into());
        }
        if self.lower_bound > self.upper_bound {
            return Err(OperationError::InvalidInput(format!(
                "lambda lower bound {} exceeds upper bound {}",
                self.lower_bound, self.upper_bound
            ))
            .into());
        }
        self.sampling.validate()
    }
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            lower_bound: 0.1,
            upper_bound: 5.0,
            iterations: 20,
            sampling: SamplingParams::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_matches_reference_values() {
        let p = SolverParams::default();
        assert_relative_eq!(p.lower_bound, 0.1);
        assert_relative_eq!(p.upper_bound, 5.0);
        assert_eq!(p.iterations, 20);
        assert_eq!(p.sampling.steps, 300);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let p = SolverParams {
            lower_bound: 3.0,
            upper_bound: 1.0,
            ..SolverParams::default()
        };
        assert!(p.validate().unwrap_err().to_string().contains("exceeds"));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let p = SolverParams {
            upper_bound: f64::INFINITY,
            ..SolverParams::default()
        };
        assert!(p.validate().is_err());
        let p = SolverParams {
            lower_bound: f64::NAN,
            ..SolverParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_steps_rejected() {
        let p = SolverParams {
            sampling: SamplingParams::new(0),
            ..SolverParams::default()
        };
        assert!(p.validate().is_err());
    }
}
