//! Scene background tint that eases toward the hovered planet's color.

use glam::Vec3;

/// Parse `#rrggbb` or `rrggbb` into linear 0..1 RGB.
pub fn parse_hex_color(color: &str) -> Option<Vec3> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok().map(|v| v as f32 / 255.0)
    };
    Some(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundTint {
    current: Vec3,
    target: Vec3,
    base: Vec3,
    /// Fraction of the remaining distance covered per step.
    rate: f32,
}

impl BackgroundTint {
    pub fn new(base: Vec3, rate: f32) -> Self {
        Self {
            current: base,
            target: base,
            base,
            rate,
        }
    }

    /// Retarget from a hover color string. Unparsable colors leave the
    /// target unchanged and return `false`.
    pub fn set_target_hex(&mut self, color: &str) -> bool {
        match parse_hex_color(color) {
            Some(rgb) => {
                self.target = rgb;
                true
            }
            None => {
                log::debug!("ignoring hover color {:?}", color);
                false
            }
        }
    }

    /// Head back to the base color.
    pub fn reset(&mut self) {
        self.target = self.base;
    }

    pub fn step(&mut self) {
        self.current = self.current.lerp(self.target, self.rate);
    }

    pub fn current(&self) -> Vec3 {
        self.current
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}
