mod length;

pub use length::ArcLength;
