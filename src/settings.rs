//! Game settings and tuning
//!
//! Read from a JSON file. Missing fields take their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Horizontal movement per unit of rotation rate around the device y axis
    pub sensitivity_x: f32,
    /// Vertical movement per unit of rotation rate around the device x axis
    pub sensitivity_y: f32,
    /// Ball radius in arena units
    pub ball_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sensitivity_x: SENSITIVITY_X,
            sensitivity_y: SENSITIVITY_Y,
            ball_radius: BALL_RADIUS,
        }
    }
}

impl Settings {
    pub fn sensitivity(&self) -> Vec2 {
        Vec2::new(self.sensitivity_x, self.sensitivity_y)
    }

    /// Replace values the simulation can't use with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.sensitivity_x.is_finite() {
            log::warn!("Invalid sensitivity_x {}, using default", self.sensitivity_x);
            self.sensitivity_x = defaults.sensitivity_x;
        }
        if !self.sensitivity_y.is_finite() {
            log::warn!("Invalid sensitivity_y {}, using default", self.sensitivity_y);
            self.sensitivity_y = defaults.sensitivity_y;
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            log::warn!("Invalid ball_radius {}, using default", self.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        self
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Malformed settings: {}", e);
                None
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
