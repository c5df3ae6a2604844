//! Hash-based lattice noise and fractal Brownian motion over the UV plane.
//!
//! Everything here is a pure function of its inputs. The WGSL program in
//! `planet.wgsl` mirrors these functions constant for constant.

use glam::Vec2;

/// Dot-product weights of the lattice hash.
pub const HASH_WEIGHTS: Vec2 = Vec2::new(127.1, 311.7);
pub const HASH_SCALE: f32 = 43758.5453123;

/// Number of fbm octaves.
pub const OCTAVES: usize = 5;
/// Tiling period used by the default surface styles.
pub const DEFAULT_PERIOD: Vec2 = Vec2::splat(10.0);

/// Fractional part in [0, 1), including for negative inputs.
#[inline]
pub fn fract(x: f32) -> f32 {
    let f = x - x.floor();
    // x - floor(x) rounds up to 1.0 for tiny negative x.
    if f < 1.0 {
        f
    } else {
        0.0
    }
}

/// GLSL-style smoothstep.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Deterministic pseudo-random scalar in [0, 1) for a lattice point.
/// Not cryptographic.
#[inline]
pub fn hash(p: Vec2) -> f32 {
    fract(p.dot(HASH_WEIGHTS).sin() * HASH_SCALE)
}

/// Wrap a lattice coordinate into `[0, period)` per axis.
#[inline]
fn wrap(v: Vec2, period: Vec2) -> Vec2 {
    Vec2::new(v.x.rem_euclid(period.x), v.y.rem_euclid(period.y))
}

/// Value noise whose lattice repeats every `period`, so
/// `periodic_noise(p) == periodic_noise(p + period)`.
pub fn periodic_noise(p: Vec2, period: Vec2) -> f32 {
    let cell = p.floor();
    let f = p - cell;

    let a = hash(wrap(cell, period));
    let b = hash(wrap(cell + Vec2::X, period));
    let c = hash(wrap(cell + Vec2::Y, period));
    let d = hash(wrap(cell + Vec2::ONE, period));

    let u = f * f * (Vec2::splat(3.0) - 2.0 * f);

    a + (b - a) * u.x + (c - a) * u.y * (1.0 - u.x) + (d - b) * u.x * u.y
}

/// Five octaves of [`periodic_noise`]: frequency doubles and amplitude
/// halves each octave, starting at 1.0 and 0.5.
///
/// Output lies in `[0, 0.96875]`, the sum of the octave amplitudes.
pub fn fbm(p: Vec2, period: Vec2) -> f32 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    for _ in 0..OCTAVES {
        value += amplitude * periodic_noise(p * frequency, period);
        frequency *= 2.0;
        amplitude *= 0.5;
    }
    value
}

/// Upper bound of [`fbm`].
pub const FBM_MAX: f32 = 0.5 + 0.25 + 0.125 + 0.0625 + 0.03125;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Vec2> {
        let mut points = Vec::new();
        for i in 0..40 {
            for j in 0..40 {
                points.push(Vec2::new(i as f32 * 0.37 - 5.0, j as f32 * 0.29 - 3.0));
            }
        }
        points
    }

    #[test]
    fn hash_in_unit_range() {
        for p in sample_points() {
            let h = hash(p);
            assert!((0.0..1.0).contains(&h), "hash({:?}) = {}", p, h);
        }
    }

    #[test]
    fn hash_deterministic() {
        let p = Vec2::new(3.0, 7.0);
        assert_eq!(hash(p), hash(p));
        assert_ne!(hash(Vec2::new(0.0, 1.0)), hash(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn fract_handles_negatives() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert_eq!(fract(2.0), 0.0);
        assert!(fract(-1e-9) < 1.0);
    }

    #[test]
    fn noise_matches_lattice_at_corners() {
        let period = DEFAULT_PERIOD;
        let corner = Vec2::new(4.0, 2.0);
        assert_eq!(periodic_noise(corner, period), hash(corner));
    }

    #[test]
    fn noise_tiles_with_period() {
        let period = DEFAULT_PERIOD;
        for p in sample_points() {
            let base = periodic_noise(p, period);
            for shift in [Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0), Vec2::new(-10.0, 20.0)] {
                let shifted = periodic_noise(p + shift, period);
                assert!((base - shifted).abs() < 1e-4, "p={:?} shift={:?}", p, shift);
            }
        }
    }

    #[test]
    fn noise_in_unit_range() {
        for p in sample_points() {
            let n = periodic_noise(p, DEFAULT_PERIOD);
            assert!((0.0..=1.0).contains(&n), "noise({:?}) = {}", p, n);
        }
    }

    #[test]
    fn fbm_is_bounded() {
        for p in sample_points() {
            let v = fbm(p, DEFAULT_PERIOD);
            assert!(v >= 0.0 && v <= FBM_MAX + 1e-6, "fbm({:?}) = {}", p, v);
        }
        assert!(FBM_MAX < 0.97);
    }

    #[test]
    fn fbm_tiles_with_period() {
        for p in sample_points().into_iter().step_by(7) {
            let a = fbm(p, DEFAULT_PERIOD);
            let b = fbm(p + Vec2::new(10.0, 10.0), DEFAULT_PERIOD);
            assert!((a - b).abs() < 1e-3, "p={:?}: {} vs {}", p, a, b);
        }
    }

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.45, 0.65, 0.2), 0.0);
        assert_eq!(smoothstep(0.45, 0.65, 0.9), 1.0);
        assert!((smoothstep(0.45, 0.65, 0.55) - 0.5).abs() < 1e-5);
    }
}
