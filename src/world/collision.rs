//! Axis-aligned collision tests. Touching counts as colliding on every edge.

use super::types::{Bird, Pipe};
use crate::core::config::GameConfig;
use std::collections::VecDeque;

/// Bird touches the ceiling or the floor.
pub fn hits_bounds(bird: &Bird, world_height: f64) -> bool {
    bird.y <= 0.0 || bird.bottom() >= world_height
}

/// Bird overlaps the pipe's column while not strictly inside its gap.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe, config: &GameConfig) -> bool {
    let overlaps_column = bird.right() >= pipe.x && bird.x <= pipe.right(config.pipe_width);
    if !overlaps_column {
        return false;
    }
    bird.y <= pipe.gap_top || bird.bottom() >= pipe.gap_bottom(config.pipe_gap)
}

/// True when the session must end this frame.
pub fn collides(bird: &Bird, pipes: &VecDeque<Pipe>, config: &GameConfig) -> bool {
    hits_bounds(bird, config.world_height) || pipes.iter().any(|p| hits_pipe(bird, p, config))
}
