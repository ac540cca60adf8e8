mod compute_shape;

pub use compute_shape::ComputeShape;
