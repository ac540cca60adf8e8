use crate::math::Point2;

/// Estimates the arc length of a sampled curve.
///
/// The estimate is the sum of the chord lengths between consecutive
/// samples. For a smooth curve it never exceeds the true length, and
/// refining a sampling (adding points between existing ones) never
/// decreases it.
pub struct ArcLength<'a> {
    points: &'a [Point2],
}

impl<'a> ArcLength<'a> {
    /// Creates a new `ArcLength` query over the given samples.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query, returning the summed chord length.
    ///
    /// Fewer than two samples have length `0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}
