//! Point starfield that fakes infinite depth by recycling stars the camera
//! has flown past back to the far end of the field.

use glam::Vec3;

use crate::systems::rng::Rng;

/// Shape of the starfield volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Half-extent on X and Y.
    pub spread: f32,
    /// Extent along the drift axis (-Z); also the recycle distance.
    pub depth: f32,
    /// How far past the camera (along +Z) a star may go before recycling.
    pub near: f32,
}

/// Move a star `depth` units along -Z once it is more than `near` units
/// behind a camera at `camera_z` looking down -Z. Other stars are returned unchanged.
#[inline]
pub fn recycle_star(star: Vec3, camera_z: f32, near: f32, depth: f32) -> Vec3 {
    if star.z - camera_z > near {
        Vec3::new(star.x, star.y, star.z - depth)
    } else {
        star
    }
}

pub struct Starfield {
    config: StarfieldConfig,
    stars: Vec<Vec3>,
}

impl Starfield {
    /// Scatter `config.count` stars uniformly over `[-spread, spread]²` × `[-depth, 0]`.
    pub fn generate(config: StarfieldConfig, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let stars = (0..config.count)
            .map(|_| {
                Vec3::new(
                    rng.range(-config.spread, config.spread),
                    rng.range(-config.spread, config.spread),
                    rng.range(-config.depth, 0.0),
                )
            })
            .collect();
        Self { config, stars }
    }

    /// Recycle every star that has passed the camera. Returns how many moved.
    pub fn recycle(&mut self, camera_z: f32) -> usize {
        let StarfieldConfig { near, depth, .. } = self.config;
        let mut moved = 0;
        for star in &mut self.stars {
            let next = recycle_star(*star, camera_z, near, depth);
            if next != *star {
                *star = next;
                moved += 1;
            }
        }
        moved
    }

    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }

    pub fn config(&self) -> StarfieldConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
