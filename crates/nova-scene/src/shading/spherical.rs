//! Normal-to-UV mapping for sphere surfaces.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, Vec3};

/// Recover equirectangular UV from a surface normal.
///
/// `u = (atan2(n.z, n.x) + π) / 2π`, `v = (asin(n.y) + π/2) / π`.
/// The normal is normalized first. `u` lies in [0, 1) and `v` in [0, 1].
/// The ±π seam is left as-is: `u` jumps from just below 1 back to 0 there.
pub fn spherical_uv(normal: Vec3) -> Vec2 {
    let n = normal.normalize_or_zero();
    let mut u = (n.z.atan2(n.x) + PI) / TAU;
    // atan2 returns +π on the negative X axis.
    if u >= 1.0 {
        u -= 1.0;
    }
    let v = (n.y.clamp(-1.0, 1.0).asin() + FRAC_PI_2) / PI;
    Vec2::new(u, v.clamp(0.0, 1.0))
}
