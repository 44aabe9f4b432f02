//! Tunable game parameters.
//!
//! Every field has a default taken from `constants.rs`; a JSON config file
//! only needs to name the fields it wants to change.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f64,
    pub world_height: f64,

    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub gravity: f64,
    pub jump_impulse: f64,

    pub pipe_width: f64,
    pub pipe_gap: f64,
    pub pipe_speed: f64,
    pub pipe_min_height: f64,

    /// Amount added to the spawn timer every frame.
    pub logical_tick: u32,
    /// Spawn timer threshold.
    pub spawn_interval: u32,
    /// Wall-clock frame pacing of the terminal driver.
    pub frame_ms: u64,

    pub star_count: usize,
    pub building_count: usize,
    pub windows_per_building: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: BIRD_GRAVITY,
            jump_impulse: BIRD_JUMP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            pipe_min_height: PIPE_MIN_HEIGHT,
            logical_tick: LOGICAL_TICK,
            spawn_interval: PIPE_SPAWN_INTERVAL,
            frame_ms: FRAME_MS,
            star_count: STAR_COUNT,
            building_count: BUILDING_COUNT,
            windows_per_building: WINDOWS_PER_BUILDING,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Lowest allowed gap top.
    pub fn min_gap_top(&self) -> f64 {
        self.pipe_min_height
    }

    /// Highest allowed gap top; keeps the whole gap plus a bottom margin on
    /// screen.
    pub fn max_gap_top(&self) -> f64 {
        self.world_height - self.pipe_gap - self.pipe_min_height
    }

    /// Reject geometry the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if self.pipe_min_height < 0.0 {
            return Err(ConfigError::Invalid(
                "pipe_min_height must not be negative".to_string(),
            ));
        }
        if self.bird_height >= self.world_height {
            return Err(ConfigError::Invalid(
                "bird_height must be smaller than world_height".to_string(),
            ));
        }
        if self.bird_x < 0.0 || self.bird_x + self.bird_width > self.world_width {
            return Err(ConfigError::Invalid(
                "bird must fit horizontally inside the world".to_string(),
            ));
        }
        if self.max_gap_top().floor() < self.min_gap_top().ceil() {
            return Err(ConfigError::Invalid(format!(
                "pipe_gap {} with pipe_min_height {} does not fit in world_height {}",
                self.pipe_gap, self.pipe_min_height, self.world_height
            )));
        }
        if self.logical_tick == 0 || self.spawn_interval == 0 {
            return Err(ConfigError::Invalid(
                "logical_tick and spawn_interval must be non-zero".to_string(),
            ));
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be non-zero".to_string()));
        }
        Ok(())
    }
}
