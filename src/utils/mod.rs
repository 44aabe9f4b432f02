//! Utility modules: persistence, score storage, logging.

pub mod logging;
pub mod persistence;
pub mod score_store;

pub use score_store::{FileScoreStore, MemoryScoreStore, ScoreStore, StoreError};
