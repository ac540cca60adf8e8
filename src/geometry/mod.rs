pub mod control_points;
pub mod curve;

pub use control_points::{ControlPointSet, INTERIOR_POINT_COUNT};
pub use curve::{Bezier7, Curve};
