pub mod render;
pub mod rng;
pub mod starfield;
pub mod tint;
