//! Session configuration
//!
//! Geometry is fixed for the lifetime of a game session. Stored as JSON so a
//! host can ship its own layout.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("`{field}` must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`ball_max_speed` ({0}) is below the starting speed")]
    MaxSpeedBelowStart(f32),
}

/// Construction inputs for a game session (board-space units)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Wall stroke width; the board is the frame minus this on each side
    pub wall_width: f32,
    pub wall_corner_radius: f32,
    pub ball_diameter: f32,
    /// Speed multiplier cap reached through paddle hits
    pub ball_max_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between a paddle and its wall edge
    pub paddle_padding: f32,

    // === Rendering ===
    /// Draw debug outlines and center indicators
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wall_width: WALL_WIDTH,
            wall_corner_radius: WALL_CORNER_RADIUS,
            ball_diameter: BALL_DIAMETER,
            ball_max_speed: BALL_MAX_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_padding: PADDLE_PADDING,
            debug: false,
        }
    }
}

impl GameConfig {
    /// Check every geometric input is finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("wall_width", self.wall_width),
            ("wall_corner_radius", self.wall_corner_radius),
            ("ball_diameter", self.ball_diameter),
            ("ball_max_speed", self.ball_max_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_padding", self.paddle_padding),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.ball_max_speed < BALL_START_SPEED {
            return Err(ConfigError::MaxSpeedBelowStart(self.ball_max_speed));
        }

        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
