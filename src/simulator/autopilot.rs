//! Scripted player used by the simulator.
//!
//! Flaps when the bird's center would sink past a flap line placed so that
//! the climb after the flap tops out just inside the next gap.

use crate::core::config::GameConfig;
use crate::world::{Bird, World};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Share of the gap's spare height left above the bird at the top of a
    /// flap. The rest stays below it at the flap point.
    pub headroom: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { headroom: 0.5 }
    }
}

/// Height gained between a flap and the top of the climb, integrating the
/// same per-frame steps as `physics::step`.
pub fn jump_rise(bird: &Bird) -> f64 {
    let mut velocity = bird.jump_impulse;
    let mut rise = 0.0;
    while velocity + bird.gravity < 0.0 {
        velocity += bird.gravity;
        rise -= velocity;
    }
    rise
}

impl Autopilot {
    /// Center height at which to flap for the next gap ahead of the bird.
    pub fn flap_line(&self, world: &World, config: &GameConfig) -> f64 {
        let bird = &world.bird;
        let Some(pipe) = world
            .pipes
            .iter()
            .find(|p| p.right(config.pipe_width) >= bird.x)
        else {
            return config.world_height / 2.0;
        };

        let rise = jump_rise(bird);
        let slack = (config.pipe_gap - bird.height - rise).max(0.0);
        pipe.gap_top + bird.height / 2.0 + rise + slack * self.headroom
    }

    pub fn should_flap(&self, world: &World, config: &GameConfig) -> bool {
        let bird = &world.bird;
        if bird.velocity < 0.0 {
            return false;
        }
        let (_, center_y) = bird.center();
        let next = center_y + bird.velocity + bird.gravity;
        next > self.flap_line(world, config)
    }
}
