/// Fixed timestep accumulator.
/// Drift and spin advance at a consistent rate regardless of display refresh.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Most steps a single frame may run.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Cap so a stalled tab does not replay seconds of drift at once.
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

/// Converts host frame timestamps (milliseconds, e.g. `performance.now()`)
/// into frame deltas in seconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call. The first call, and any timestamp
    /// going backwards, yields zero.
    pub fn delta_seconds(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), FixedTimestep::MAX_STEPS);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-5.0), 0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn clock_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_seconds(1234.0), 0.0);
        assert!((clock.delta_seconds(1250.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn clock_ignores_backwards_time() {
        let mut clock = FrameClock::new();
        clock.delta_seconds(500.0);
        assert_eq!(clock.delta_seconds(400.0), 0.0);
        assert!((clock.delta_seconds(450.0) - 0.05).abs() < 1e-6);
    }
}
