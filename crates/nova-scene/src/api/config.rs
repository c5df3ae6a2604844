use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::easing::Easing;
use crate::error::ConfigurationError;

/// Every numeric knob of the scene, provided by the showcase.
///
/// Loadable from JSON; missing fields fall back to [`SceneConfig::default`].
/// Vectors are written as `[x, y, z]` arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Fixed step for drift and spin, in seconds (default: 1/60).
    pub fixed_dt: f32,

    /// Initial camera position; "zoom to origin" returns here.
    pub camera_start: Vec3,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Camera translation per fixed step while no zoom is running.
    pub camera_drift: Vec3,
    /// Look-direction offset per unit of normalized pointer position.
    pub parallax: f32,

    pub zoom_duration_ms: f64,
    pub zoom_easing: Easing,
    /// Subtracted from a planet's position to get the zoom destination.
    pub zoom_offset: Vec3,

    pub star_count: usize,
    /// Half-extent of the starfield on X and Y.
    pub star_spread: f32,
    /// Length of the starfield along the drift axis; also the recycle distance.
    pub star_depth: f32,
    /// How far behind the camera a star may travel before it is recycled.
    pub star_near: f32,
    pub star_seed: u64,

    /// Background color with nothing hovered.
    pub tint_base: Vec3,
    /// Fraction of the remaining distance the tint covers each step.
    pub tint_lerp: f32,

    /// Sphere tessellation shared by all planets.
    pub sphere_width_segments: u32,
    pub sphere_height_segments: u32,

    /// Capacity of the planet section of the frame buffer.
    pub max_planets: usize,
    /// Maximum number of scene events per frame (default: 32).
    pub max_events: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            camera_start: Vec3::new(0.0, 0.0, 50.0),
            fov_y_degrees: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 2000.0,
            camera_drift: Vec3::new(0.0, 0.0, -0.02),
            parallax: 0.3,
            zoom_duration_ms: 2000.0,
            zoom_easing: Easing::QuadInOut,
            zoom_offset: Vec3::new(2.0, 1.0, -5.0),
            star_count: 5000,
            star_spread: 600.0,
            star_depth: 2000.0,
            star_near: 0.0,
            star_seed: 42,
            tint_base: Vec3::new(0.0, 0.0, 0.02),
            tint_lerp: 0.05,
            sphere_width_segments: 64,
            sphere_height_segments: 32,
            max_planets: 6,
            max_events: 32,
        }
    }
}

impl SceneConfig {
    /// Variant that approaches planets from the side instead of from the front.
    pub fn side_approach() -> Self {
        Self {
            zoom_offset: Vec3::new(5.0, 0.0, -2.0),
            ..Self::default()
        }
    }

    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the frame loop cannot work with.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.fixed_dt > 0.0) {
            return Err(ConfigurationError::invalid("fixed_dt", "must be positive"));
        }
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigurationError::invalid("fov_y_degrees", "must be in (0, 180)"));
        }
        if !(self.aspect > 0.0) {
            return Err(ConfigurationError::invalid("aspect", "must be positive"));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigurationError::invalid("far", "must exceed a positive `near`"));
        }
        if !(self.zoom_duration_ms > 0.0) {
            return Err(ConfigurationError::invalid("zoom_duration_ms", "must be positive"));
        }
        if self.star_count == 0 {
            return Err(ConfigurationError::invalid("star_count", "must be positive"));
        }
        if !(self.star_depth > 0.0) {
            return Err(ConfigurationError::invalid("star_depth", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.tint_lerp) {
            return Err(ConfigurationError::invalid("tint_lerp", "must be in [0, 1]"));
        }
        if self.sphere_width_segments < 3 || self.sphere_height_segments < 2 {
            return Err(ConfigurationError::invalid(
                "sphere_width_segments",
                "sphere needs at least 3x2 segments",
            ));
        }
        if self.max_planets == 0 {
            return Err(ConfigurationError::invalid("max_planets", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
        assert!(SceneConfig::side_approach().validate().is_ok());
    }

    #[test]
    fn presets_differ_only_in_offset() {
        let front = SceneConfig::default();
        let side = SceneConfig::side_approach();
        assert_eq!(front.zoom_offset, Vec3::new(2.0, 1.0, -5.0));
        assert_eq!(side.zoom_offset, Vec3::new(5.0, 0.0, -2.0));
        assert_eq!(SceneConfig { zoom_offset: front.zoom_offset, ..side }, front);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{
            "zoom_duration_ms": 1500.0,
            "zoom_offset": [5.0, 0.0, -2.0],
            "zoom_easing": "cubic_in_out"
        }"#;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.zoom_duration_ms, 1500.0);
        assert_eq!(config.zoom_offset, Vec3::new(5.0, 0.0, -2.0));
        assert_eq!(config.zoom_easing, Easing::CubicInOut);
        assert_eq!(config.star_count, 5000);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = SceneConfig::from_json("{ \"star_count\": ").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidConfig(_)));
    }

    #[test]
    fn bad_values_are_rejected() {
        let err = SceneConfig::from_json(r#"{ "zoom_duration_ms": 0.0 }"#).unwrap_err();
        match err {
            ConfigurationError::InvalidValue { field, .. } => assert_eq!(field, "zoom_duration_ms"),
            other => panic!("unexpected error: {other}"),
        }

        let err = SceneConfig::from_json(r#"{ "star_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { field: "star_count", .. }));

        let err = SceneConfig::from_json(r#"{ "near": 10.0, "far": 5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidValue { field: "far", .. }));
    }

    #[test]
    fn round_trips_through_json() {
        let config = SceneConfig::side_approach();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SceneConfig::from_json(&json).unwrap(), config);
    }
}
