pub mod planets;
pub mod time;
