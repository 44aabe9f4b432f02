//! Simulation state and the per-frame subsystems that act on it.
//!
//! `World` is plain data; the stage functions in `physics`, `obstacles`,
//! `collision` and `particles` each take the parts they need by reference.

pub mod collision;
pub mod obstacles;
pub mod particles;
pub mod physics;
pub mod scenery;
pub mod types;

pub use obstacles::{ObstacleReport, SpawnTimer};
pub use particles::{Burst, ParticleSystem};
pub use scenery::Scenery;
pub use types::*;

use crate::core::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct World {
    pub bird: Bird,
    /// Oldest (leftmost) pipe at the front.
    pub pipes: VecDeque<Pipe>,
    pub particles: ParticleSystem,
    pub scenery: Scenery,
    pub spawn_timer: SpawnTimer,
}

impl World {
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            bird: Bird::new(config),
            pipes: VecDeque::new(),
            particles: ParticleSystem::new(),
            scenery: Scenery::generate(config, rng),
            spawn_timer: SpawnTimer::new(),
        }
    }

    /// Reset the gameplay state for a new session. Scenery and any
    /// still-fading particles carry over.
    pub fn reset(&mut self, config: &GameConfig) {
        self.bird = Bird::new(config);
        self.pipes.clear();
        self.spawn_timer.reset();
    }
}
