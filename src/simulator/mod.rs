//! Headless autopilot simulator.
//!
//! Plays seeded batches of sessions through the same `Session` pipeline the
//! terminal game uses, to check difficulty and catch gameplay regressions.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, CrashCause, RunStats};
