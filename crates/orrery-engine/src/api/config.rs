use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{OrreryError, OrreryResult};

/// Static description of one orbiting body, supplied once at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    pub name: String,
    /// Visual radius.
    pub size: f32,
    /// Orbit radius in the XZ plane.
    pub distance: f32,
    /// Default angular speed (radians per unit of `time_step`).
    pub speed: f64,
    /// CSS-style color name or `#rrggbb`.
    pub color: String,
}

impl BodySpec {
    pub fn new(name: &str, size: f32, distance: f32, speed: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            distance,
            speed,
            color: color.to_string(),
        }
    }
}

/// The central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarSpec {
    pub name: String,
    pub size: f32,
    pub color: String,
    /// Tooltip text shown when the star is hovered.
    pub description: String,
}

impl Default for StarSpec {
    fn default() -> Self {
        Self {
            name: "Sun".to_string(),
            size: 3.0,
            color: "orange".to_string(),
            description: "The Sun - Our solar system's star".to_string(),
        }
    }
}

/// How host frames map onto integration steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum StepMode {
    /// One integration step per host frame; playback speed follows the refresh rate.
    PerFrame,
    /// Frame time is accumulated and converted into whole steps at `hz`.
    FixedTimestep { hz: f32 },
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::PerFrame
    }
}

/// Orbit camera parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial camera position; the camera always looks at the origin.
    pub position: [f32; 3],
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Polar angle keeps this far away from both poles.
    pub pole_margin: f32,
    /// Radians of azimuth per horizontal drag pixel.
    pub orbit_gain_x: f32,
    /// Radians of polar angle per vertical drag pixel.
    pub orbit_gain_y: f32,
    pub zoom_out_factor: f32,
    pub zoom_in_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 30.0, 60.0],
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            min_radius: 20.0,
            max_radius: 200.0,
            pole_margin: 0.1,
            orbit_gain_x: 0.01,
            orbit_gain_y: 0.01,
            zoom_out_factor: 1.1,
            zoom_in_factor: 0.9,
        }
    }
}

/// Decorative background star field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: usize,
    /// Side length of the cube the stars are scattered in.
    pub extent: f32,
    /// Y rotation per unpaused tick.
    pub drift: f32,
    pub point_size: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            extent: 400.0,
            drift: 0.0002,
            point_size: 0.5,
        }
    }
}

/// Configuration for the simulation, supplied once at start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub bodies: Vec<BodySpec>,
    pub star: StarSpec,
    /// Phase advanced per step is `current_speed * time_step`.
    pub time_step: f64,
    pub step_mode: StepMode,
    pub camera: CameraConfig,
    pub starfield: StarfieldConfig,
    /// Star Y rotation per unpaused tick.
    pub star_spin: f32,
    /// Planet Y rotation per unpaused tick.
    pub body_spin: f32,
    /// Seed for the orbital-phase RNG.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
            star: StarSpec::default(),
            time_step: 0.01,
            step_mode: StepMode::PerFrame,
            camera: CameraConfig::default(),
            starfield: StarfieldConfig::default(),
            star_spin: 0.01,
            body_spin: 0.05,
            seed: 0x5eed_0f_0b17,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> OrreryResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Body and star names must be unique; picking reports bodies by name.
    pub fn validate(&self) -> OrreryResult<()> {
        let mut seen = HashSet::new();
        let names = self.bodies.iter().map(|b| b.name.as_str());
        for name in names.chain(std::iter::once(self.star.name.as_str())) {
            if !seen.insert(name) {
                return Err(OrreryError::DuplicateBody(name.to_string()));
            }
        }
        Ok(())
    }
}

/// The reference eight-planet scene.
pub fn default_bodies() -> Vec<BodySpec> {
    vec![
        BodySpec::new("Mercury", 0.4, 8.0, 4.0, "gray"),
        BodySpec::new("Venus", 0.9, 12.0, 1.6, "white"),
        BodySpec::new("Earth", 1.0, 16.0, 1.0, "blue"),
        BodySpec::new("Mars", 0.5, 20.0, 0.5, "red"),
        BodySpec::new("Jupiter", 2.5, 28.0, 0.08, "yellow"),
        BodySpec::new("Saturn", 2.0, 36.0, 0.03, "gold"),
        BodySpec::new("Uranus", 1.5, 44.0, 0.01, "green"),
        BodySpec::new("Neptune", 1.4, 52.0, 0.006, "blue"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_eight_planets() {
        let config = SimulationConfig::default();
        assert_eq!(config.bodies.len(), 8);
        assert_eq!(config.bodies[2].name, "Earth");
        assert_eq!(config.bodies[2].distance, 16.0);
        assert_eq!(config.star.name, "Sun");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_takes_defaults() {
        let json = r##"{
            "bodies": [
                { "name": "Vulcan", "size": 0.3, "distance": 5, "speed": 6.0, "color": "#ff8800" }
            ],
            "time_step": 0.02
        }"##;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.bodies.len(), 1);
        assert_eq!(config.time_step, 0.02);
        assert_eq!(config.star.size, 3.0);
        assert_eq!(config.camera.max_radius, 200.0);
        assert_eq!(config.step_mode, StepMode::PerFrame);
    }

    #[test]
    fn step_mode_is_tagged() {
        let json = r#"{ "step_mode": { "mode": "fixed_timestep", "hz": 60.0 } }"#;
        let config = SimulationConfig::from_json(json).unwrap();
        assert_eq!(config.step_mode, StepMode::FixedTimestep { hz: 60.0 });
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = r#"{ "bodies": [
            { "name": "Sun", "size": 1, "distance": 5, "speed": 1, "color": "red" }
        ] }"#;
        let err = SimulationConfig::from_json(json).unwrap_err();
        assert!(matches!(err, OrreryError::DuplicateBody(ref n) if n == "Sun"));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SimulationConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, OrreryError::Config(_)));
    }
}
