// animation/mod.rs
//
// Camera zoom animation: easing curves plus a single-tween animator.

pub mod camera;
pub mod easing;

pub use camera::{AnimatorState, CameraAnimator, CameraSample, CameraTween, ZoomId};
pub use easing::{ease_vec3, lerp_vec3, Easing};
