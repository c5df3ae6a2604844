// animation/camera.rs
//
// Camera zoom animator: one wall-clock tween at a time.
//
// Usage:
//   let mut animator = CameraAnimator::new(2000.0, Easing::QuadInOut);
//   animator.start(camera.position, target, now_ms);
//   if let Some(sample) = animator.sample(now_ms) { camera.position = sample.position; }

use glam::Vec3;

use super::easing::{ease_vec3, Easing};

/// Handle identifying one zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoomId(pub u32);

/// A single camera interpolation from `start` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTween {
    pub id: ZoomId,
    pub start: Vec3,
    pub target: Vec3,
    /// Wall-clock timestamp the tween began at, in milliseconds.
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl CameraTween {
    /// Normalized progress `min(elapsed / duration, 1)`; timestamps before
    /// the start count as zero elapsed.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Eased position at `now_ms`. Returns `target` exactly once complete.
    pub fn position_at(&self, now_ms: f64) -> Vec3 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            self.target
        } else {
            ease_vec3(self.start, self.target, t, self.easing)
        }
    }
}

/// Animator state: `Idle -> Animating -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Animating(CameraTween),
}

/// Result of sampling an active tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSample {
    pub id: ZoomId,
    pub position: Vec3,
    /// Linear progress in [0, 1] before easing.
    pub t: f32,
    /// True on the sample that completed the tween.
    pub finished: bool,
}

/// Holds at most one active camera tween.
/// Starting a new tween replaces the previous one.
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    state: AnimatorState,
    duration_ms: f64,
    easing: Easing,
    next_id: u32,
}

impl CameraAnimator {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            state: AnimatorState::Idle,
            duration_ms,
            easing,
            next_id: 1,
        }
    }

    /// Begin a tween from `from` to `target` at `now_ms`, superseding any
    /// tween still in flight.
    pub fn start(&mut self, from: Vec3, target: Vec3, now_ms: f64) -> ZoomId {
        let id = ZoomId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        if let AnimatorState::Animating(previous) = self.state {
            log::debug!(
                "zoom {} superseded by {} (was heading to {:?})",
                previous.id.0,
                id.0,
                previous.target
            );
        }

        self.state = AnimatorState::Animating(CameraTween {
            id,
            start: from,
            target,
            start_ms: now_ms,
            duration_ms: self.duration_ms,
            easing: self.easing,
        });
        id
    }

    /// Advance the active tween to `now_ms`. Returns `None` when idle.
    /// The sample with `finished == true` carries the exact target, and the
    /// animator is idle afterwards.
    pub fn sample(&mut self, now_ms: f64) -> Option<CameraSample> {
        let tween = match self.state {
            AnimatorState::Idle => return None,
            AnimatorState::Animating(tween) => tween,
        };

        let t = tween.progress(now_ms);
        let finished = t >= 1.0;
        if finished {
            self.state = AnimatorState::Idle;
        }

        Some(CameraSample {
            id: tween.id,
            position: tween.position_at(now_ms),
            t,
            finished,
        })
    }

    /// Drop the active tween, leaving the camera wherever it is.
    pub fn cancel(&mut self) -> Option<CameraTween> {
        match std::mem::take(&mut self.state) {
            AnimatorState::Idle => None,
            AnimatorState::Animating(tween) => Some(tween),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, AnimatorState::Idle)
    }

    /// The tween in flight, if any.
    pub fn active(&self) -> Option<&CameraTween> {
        match &self.state {
            AnimatorState::Idle => None,
            AnimatorState::Animating(tween) => Some(tween),
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Vec3 = Vec3::new(0.0, 0.0, 50.0);

    #[test]
    fn idle_until_started() {
        let mut animator = CameraAnimator::new(2000.0, Easing::QuadInOut);
        assert!(animator.is_idle());
        assert!(animator.sample(123.0).is_none());
    }

    #[test]
    fn midpoint_of_two_second_zoom() {
        let mut animator = CameraAnimator::new(2000.0, Easing::QuadInOut);
        animator.start(START, Vec3::ZERO, 10_000.0);

        let sample = animator.sample(11_000.0).unwrap();
        assert!((sample.t - 0.5).abs() < 1e-6);
        assert!((sample.position - Vec3::new(0.0, 0.0, 25.0)).length() < 1e-5);
        assert!(!sample.finished);
        assert!(!animator.is_idle());
    }

    #[test]
    fn endpoints_are_exact() {
        let target = Vec3::new(-3.0, 7.5, 12.25);
        let mut animator = CameraAnimator::new(2000.0, Easing::QuadInOut);
        animator.start(START, target, 0.0);

        let first = animator.sample(0.0).unwrap();
        assert_eq!(first.position, START);

        let last = animator.sample(2000.0).unwrap();
        assert_eq!(last.position, target);
        assert!(last.finished);
        assert!(animator.is_idle());
        assert!(animator.sample(2100.0).is_none());
    }

    #[test]
    fn overshooting_timestamp_lands_on_target() {
        let mut animator = CameraAnimator::new(500.0, Easing::Linear);
        animator.start(START, Vec3::ONE, 0.0);
        let sample = animator.sample(9_999.0).unwrap();
        assert_eq!(sample.position, Vec3::ONE);
        assert_eq!(sample.t, 1.0);
    }

    #[test]
    fn timestamp_before_start_holds_start() {
        let mut animator = CameraAnimator::new(1000.0, Easing::Linear);
        animator.start(START, Vec3::ZERO, 500.0);
        let sample = animator.sample(100.0).unwrap();
        assert_eq!(sample.position, START);
        assert_eq!(sample.t, 0.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut animator = CameraAnimator::new(0.0, Easing::QuadInOut);
        animator.start(START, Vec3::ZERO, 0.0);
        let sample = animator.sample(0.0).unwrap();
        assert!(sample.finished);
        assert_eq!(sample.position, Vec3::ZERO);
    }

    #[test]
    fn new_zoom_supersedes_in_flight_one() {
        let mut animator = CameraAnimator::new(1000.0, Easing::Linear);
        let first = animator.start(START, Vec3::ZERO, 0.0);

        let halfway = animator.sample(500.0).unwrap().position;
        let second = animator.start(halfway, Vec3::new(10.0, 0.0, 0.0), 500.0);
        assert_ne!(first, second);

        let active = animator.active().unwrap();
        assert_eq!(active.id, second);
        assert_eq!(active.start, halfway);

        // Only the second tween is ever reported from here on.
        let done = animator.sample(1500.0).unwrap();
        assert_eq!(done.id, second);
        assert_eq!(done.position, Vec3::new(10.0, 0.0, 0.0));
        assert!(animator.is_idle());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut animator = CameraAnimator::new(1000.0, Easing::Linear);
        animator.start(START, Vec3::ZERO, 0.0);
        let cancelled = animator.cancel().unwrap();
        assert_eq!(cancelled.target, Vec3::ZERO);
        assert!(animator.is_idle());
        assert!(animator.cancel().is_none());
    }
}
