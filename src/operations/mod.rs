pub mod query;
pub mod shape;
pub mod solve;
