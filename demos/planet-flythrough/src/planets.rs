//! The six showcase planets: placement, motion and hover copy.

use glam::Vec3;
use nova_scene::PlanetStyle;

pub const PLANET_COUNT: usize = 6;

/// Static description of one showcase planet.
pub struct PlanetDesc {
    pub name: &'static str,
    pub style: PlanetStyle,
    pub position: Vec3,
    pub radius: f32,
    /// Radians per fixed step.
    pub spin: Vec3,
    /// Units per fixed step.
    pub drift: Vec3,
}

/// Indexed by hover zone: `#planet-<i>` on the page maps to entry `i`.
pub fn planet_table() -> [PlanetDesc; PLANET_COUNT] {
    [
        PlanetDesc {
            name: "Terra",
            style: PlanetStyle::Terran,
            position: Vec3::new(-12.0, 4.0, 0.0),
            radius: 3.0,
            spin: Vec3::new(0.0, 0.004, 0.0),
            drift: Vec3::new(0.0, 0.0, 0.005),
        },
        PlanetDesc {
            name: "Ferrum",
            style: PlanetStyle::Rocky,
            position: Vec3::new(10.0, -3.0, -25.0),
            radius: 2.2,
            spin: Vec3::new(0.001, 0.006, 0.0),
            drift: Vec3::new(-0.002, 0.0, 0.004),
        },
        PlanetDesc {
            name: "Annulus",
            style: PlanetStyle::Banded,
            position: Vec3::new(-18.0, -6.0, -60.0),
            radius: 5.0,
            spin: Vec3::new(0.0, 0.003, 0.0005),
            drift: Vec3::new(0.001, 0.0, 0.006),
        },
        PlanetDesc {
            name: "Glacies",
            style: PlanetStyle::Icy,
            position: Vec3::new(16.0, 8.0, -95.0),
            radius: 2.6,
            spin: Vec3::new(0.0, 0.005, 0.0),
            drift: Vec3::new(0.0, -0.001, 0.005),
        },
        PlanetDesc {
            name: "Tempestas",
            style: PlanetStyle::GasGiant,
            position: Vec3::new(-4.0, 10.0, -140.0),
            radius: 8.0,
            spin: Vec3::new(0.0, 0.002, 0.0),
            drift: Vec3::new(0.0, 0.0, 0.008),
        },
        PlanetDesc {
            name: "Ignis",
            style: PlanetStyle::Volcanic,
            position: Vec3::new(8.0, -9.0, -190.0),
            radius: 3.4,
            spin: Vec3::new(0.002, 0.007, 0.0),
            drift: Vec3::new(0.0, 0.001, 0.006),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_planet_per_style() {
        let table = planet_table();
        for (desc, style) in table.iter().zip(PlanetStyle::ALL) {
            assert_eq!(desc.style, style, "{} has the wrong style", desc.name);
        }
    }

    #[test]
    fn planets_start_ahead_of_camera() {
        let start_z = nova_scene::SceneConfig::default().camera_start.z;
        for desc in &planet_table() {
            assert!(desc.position.z + desc.radius < start_z, "{} starts behind the camera", desc.name);
            assert!(desc.radius > 0.0);
        }
    }
}
