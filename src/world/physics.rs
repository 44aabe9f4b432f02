//! Vertical motion of the bird.

use super::types::Bird;

/// Which screen bound the bird was clamped against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Ceiling,
    Floor,
}

/// Integrate one frame of gravity, then clamp to `[0, world_height - height]`.
/// Velocity is zeroed on either clamp.
pub fn step(bird: &mut Bird, world_height: f64) -> Option<Bound> {
    bird.velocity += bird.gravity;
    bird.y += bird.velocity;

    if bird.y < 0.0 {
        bird.y = 0.0;
        bird.velocity = 0.0;
        return Some(Bound::Ceiling);
    }

    if bird.y + bird.height > world_height {
        bird.y = world_height - bird.height;
        bird.velocity = 0.0;
        return Some(Bound::Floor);
    }

    None
}

/// Replace the current velocity with the jump impulse.
pub fn flap(bird: &mut Bird) {
    bird.velocity = bird.jump_impulse;
}
