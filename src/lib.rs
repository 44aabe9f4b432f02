//! Cyber Flap - neon Flappy Bird for the terminal.
//!
//! The simulation (`core`, `world`) is independent of the terminal; `ui`
//! and `input` adapt it to ratatui and crossterm, and `simulator` drives it
//! headlessly.

pub mod build_info;
pub mod core;
pub mod input;
pub mod simulator;
pub mod ui;
pub mod utils;
pub mod world;
