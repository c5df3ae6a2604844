pub mod geometry;
pub mod planet;
