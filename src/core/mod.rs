//! Core game state and logic.

pub mod color;
pub mod config;
pub mod constants;
pub mod game_loop;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use game_loop::{run_frame, FrameClock};
pub use session::{InputEvent, Overlays, Phase, Session, TickOutcome};
