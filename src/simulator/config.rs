//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a batch of autopilot runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per session before the run is cut off
    pub max_frames: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// World rules the sessions are played with
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_frames: 20_000,
            verbosity: 1,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small fixed-seed batch, for smoke tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_frames: 5_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
