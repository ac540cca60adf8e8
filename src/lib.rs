pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod rope;
pub mod tessellation;

pub use error::{Result, RopeError};
pub use rope::Rope;
