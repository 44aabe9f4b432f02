//! Cosmetic particle bursts. Nothing here affects collision or score.

use super::types::Particle;
use crate::core::color::Rgb;
use crate::core::constants::{DEATH_BURST, FLAP_BURST, PASS_BURST};
use rand::Rng;

/// One emission, with the origin data its jitter needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Burst {
    /// Small upward puff behind the bird.
    Flap { x: f64, y: f64 },
    /// Scattered column at a pipe's midpoint, over the full world height.
    PipePassed { x: f64, world_height: f64 },
    /// Large omnidirectional burst at the bird's center.
    Death { x: f64, y: f64 },
}

impl Burst {
    pub fn count(&self) -> usize {
        match self {
            Burst::Flap { .. } => FLAP_BURST.0,
            Burst::PipePassed { .. } => PASS_BURST.0,
            Burst::Death { .. } => DEATH_BURST.0,
        }
    }

    pub fn lifetime(&self) -> i32 {
        match self {
            Burst::Flap { .. } => FLAP_BURST.1,
            Burst::PipePassed { .. } => PASS_BURST.1,
            Burst::Death { .. } => DEATH_BURST.1,
        }
    }

    fn particle<R: Rng>(&self, rng: &mut R) -> Particle {
        let life = self.lifetime();
        match *self {
            Burst::Flap { x, y } => Particle {
                x,
                y,
                vx: rng.gen_range(-1.5..1.5),
                vy: rng.gen_range(-3.0..-1.0),
                size: rng.gen_range(2.0..6.0),
                color: Rgb::CYAN,
                life,
                max_life: life,
            },
            Burst::PipePassed { x, world_height } => Particle {
                x,
                y: rng.gen_range(0.0..world_height),
                vx: rng.gen_range(-1.0..1.0),
                vy: rng.gen_range(-1.0..1.0),
                size: rng.gen_range(2.0..7.0),
                color: Rgb::MAGENTA,
                life,
                max_life: life,
            },
            Burst::Death { x, y } => Particle {
                x,
                y,
                vx: rng.gen_range(-5.0..5.0),
                vy: rng.gen_range(-5.0..5.0),
                size: rng.gen_range(2.0..8.0),
                color: Rgb::from_hsl(rng.gen_range(240.0..300.0), 1.0, 0.5),
                life,
                max_life: life,
            },
        }
    }
}

/// Unordered collection of live particles.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit<R: Rng>(&mut self, burst: Burst, rng: &mut R) {
        let count = burst.count();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(burst.particle(rng));
        }
    }

    /// Move every particle, age it by one frame and drop the expired ones.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.life -= 1;
        }
        self.particles.retain(|p| !p.is_expired());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
