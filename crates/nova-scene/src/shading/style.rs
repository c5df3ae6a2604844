//! The six planet surface styles and their color mapping.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::noise::{fbm, smoothstep, DEFAULT_PERIOD};

/// Surface style of a planet. The discriminant is the wire index the GPU
/// program switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum PlanetStyle {
    /// Water and land split by a hard fbm threshold.
    #[default]
    Terran = 0,
    /// Two rock tones.
    Rocky = 1,
    /// Latitude bands, no noise.
    Banded = 2,
    /// High-frequency ice sheets.
    Icy = 3,
    /// Noise modulated by a longitude swirl.
    GasGiant = 4,
    /// Rock with soft-edged lava flows.
    Volcanic = 5,
}

impl PlanetStyle {
    pub const COUNT: usize = 6;
    /// Style used for out-of-range indices.
    pub const DEFAULT: PlanetStyle = PlanetStyle::Terran;
    pub const ALL: [PlanetStyle; Self::COUNT] = [
        PlanetStyle::Terran,
        PlanetStyle::Rocky,
        PlanetStyle::Banded,
        PlanetStyle::Icy,
        PlanetStyle::GasGiant,
        PlanetStyle::Volcanic,
    ];

    /// Map a wire index to a style, falling back to [`PlanetStyle::DEFAULT`].
    pub fn from_index(index: i64) -> Self {
        match Self::try_from_index(index) {
            Some(style) => style,
            None => {
                log::warn!("planet style {} out of range, using {:?}", index, Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }

    pub fn try_from_index(index: i64) -> Option<Self> {
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn index(self) -> u32 {
        self as u32
    }
}

// ── Palettes ─────────────────────────────────────────────────────────

const WATER: Vec3 = Vec3::new(0.1, 0.3, 0.8);
const LAND: Vec3 = Vec3::new(0.2, 0.6, 0.2);

const ROCK_LIGHT: Vec3 = Vec3::new(0.6, 0.3, 0.2);
const ROCK_DARK: Vec3 = Vec3::new(0.4, 0.2, 0.1);

const BAND_LIGHT: Vec3 = Vec3::new(0.8, 0.7, 0.5);
const BAND_DARK: Vec3 = Vec3::new(0.6, 0.5, 0.3);
const BAND_COUNT: f32 = 10.0;

const ICE_BLUE: Vec3 = Vec3::new(0.6, 0.8, 1.0);
const ICE_WHITE: Vec3 = Vec3::new(0.9, 0.95, 1.0);

const GAS_BASE: Vec3 = Vec3::new(0.8, 0.5, 0.2);
const GAS_STORM: Vec3 = Vec3::new(0.4, 0.25, 0.1);
const SWIRL_TURNS: f32 = 4.0;

const VOLCANIC_ROCK: Vec3 = Vec3::new(0.2, 0.1, 0.1);
const LAVA: Vec3 = Vec3::new(1.0, 0.3, 0.0);

// ── Thresholds and domain scales ─────────────────────────────────────

const TERRAN_SCALE: f32 = 10.0;
const TERRAN_THRESHOLD: f32 = 0.5;
const ROCKY_SCALE: f32 = 10.0;
const ROCKY_THRESHOLD: f32 = 0.4;
const ICY_SCALE: f32 = 15.0;
const ICY_THRESHOLD: f32 = 0.45;
const GAS_SCALE: f32 = 20.0;
const VOLCANIC_SCALE: f32 = 10.0;
const VOLCANIC_CENTER: f32 = 0.55;
const VOLCANIC_BAND: f32 = 0.1;

/// fbm over `uv * scale` with the fixed 10×10 lattice period.
/// The longitude seam is accepted where the scale is not a multiple of it.
#[inline]
fn surface_noise(uv: Vec2, scale: f32) -> f32 {
    fbm(uv * scale, DEFAULT_PERIOD)
}

/// Hard threshold: `below` under `edge`, `above` at or over it.
#[inline]
fn step_mix(below: Vec3, above: Vec3, edge: f32, x: f32) -> Vec3 {
    if x < edge {
        below
    } else {
        above
    }
}

/// Unlit surface color of `style` at `uv`.
pub fn style_color(style: PlanetStyle, uv: Vec2) -> Vec3 {
    match style {
        PlanetStyle::Terran => {
            step_mix(WATER, LAND, TERRAN_THRESHOLD, surface_noise(uv, TERRAN_SCALE))
        }
        PlanetStyle::Rocky => {
            step_mix(ROCK_DARK, ROCK_LIGHT, ROCKY_THRESHOLD, surface_noise(uv, ROCKY_SCALE))
        }
        PlanetStyle::Banded => {
            let band = (uv.y * PI * BAND_COUNT).sin().abs();
            BAND_DARK.lerp(BAND_LIGHT, band)
        }
        PlanetStyle::Icy => {
            step_mix(ICE_BLUE, ICE_WHITE, ICY_THRESHOLD, surface_noise(uv, ICY_SCALE))
        }
        PlanetStyle::GasGiant => {
            let n = surface_noise(uv, GAS_SCALE);
            let swirl = (uv.x * TAU * SWIRL_TURNS + n * 10.0).sin() * 0.5 + 0.5;
            (GAS_BASE + GAS_STORM * (n * swirl)).min(Vec3::ONE)
        }
        PlanetStyle::Volcanic => {
            let n = surface_noise(uv, VOLCANIC_SCALE);
            let k = smoothstep(VOLCANIC_CENTER - VOLCANIC_BAND, VOLCANIC_CENTER + VOLCANIC_BAND, n);
            VOLCANIC_ROCK.lerp(LAVA, k)
        }
    }
}
