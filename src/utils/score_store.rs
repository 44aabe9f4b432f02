//! Best-score persistence.
//!
//! The session only talks to the `ScoreStore` trait, so the terminal game
//! uses a JSON file while tests and the simulator use an in-memory store.

use super::persistence::{data_path, load_json, save_json};
use crate::core::constants::BEST_SCORE_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Durable storage for a single integer: the best score so far.
pub trait ScoreStore {
    /// The stored best score, if one has ever been saved.
    fn load(&self) -> Option<u32>;

    /// Overwrite the stored best score.
    fn save(&mut self, score: u32) -> Result<(), StoreError>;

    /// Save `score` only if it beats the stored value. Returns whether a
    /// write happened. A lower or equal score never replaces a higher one.
    fn submit(&mut self, score: u32) -> Result<bool, StoreError> {
        match self.load() {
            Some(best) if best >= score => Ok(false),
            _ => {
                self.save(score)?;
                Ok(true)
            }
        }
    }
}

/// On-disk layout: `{"cyberflapHighScore": 12}`.
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    #[serde(rename = "cyberflapHighScore")]
    high_score: u32,
}

/// Stores the best score as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ~/.cyberflap/best_score.json
    pub fn default_location() -> io::Result<Self> {
        Ok(Self::new(data_path(BEST_SCORE_FILE)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Forget the stored best score.
    pub fn reset(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> Option<u32> {
        match load_json::<BestScoreFile>(&self.path) {
            Ok(file) => file.map(|f| f.high_score),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable score file");
                None
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        save_json(&self.path, &BestScoreFile { high_score: score })?;
        Ok(())
    }
}

/// Volatile store for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    best: Option<u32>,
    writes: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            writes: 0,
        }
    }

    /// Number of `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Option<u32> {
        self.best
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = Some(score);
        self.writes += 1;
        Ok(())
    }
}
