//! World entity data structures.

use crate::core::color::Rgb;
use crate::core::config::GameConfig;

/// The player-controlled entity. Only `y` and `velocity` change during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Top edge, 0 = ceiling.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in units/frame (positive = downward).
    pub velocity: f64,
    pub gravity: f64,
    /// Velocity assigned on flap (negative = upward).
    pub jump_impulse: f64,
    pub color: Rgb,
}

impl Bird {
    /// A bird at vertical mid-screen with zero velocity.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x,
            y: config.world_height / 2.0,
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            color: Rgb::CYAN,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// An obstacle pair: a top column from 0 to `gap_top` and a bottom column
/// from `gap_top + gap` to the floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge. Only ever decreases.
    pub x: f64,
    /// Height of the top column, i.e. where the gap starts.
    pub gap_top: f64,
    /// Set once, the first frame the pipe's right edge is left of the bird.
    pub passed: bool,
    pub color: Rgb,
}

impl Pipe {
    pub fn right(&self, pipe_width: f64) -> f64 {
        self.x + pipe_width
    }

    pub fn gap_bottom(&self, gap: f64) -> f64 {
        self.gap_top + gap
    }
}

/// Short-lived cosmetic dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Radius.
    pub size: f64,
    pub color: Rgb,
    /// Remaining frames.
    pub life: i32,
    /// Lifetime at spawn, used for the fade-out.
    pub max_life: i32,
}

impl Particle {
    /// Opacity in `0.0..=1.0`, proportional to remaining lifetime.
    pub fn alpha(&self) -> f64 {
        if self.max_life <= 0 {
            return 0.0;
        }
        (self.life as f64 / self.max_life as f64).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Downward drift per frame.
    pub speed: f64,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Offset from the building's left edge.
    pub x: f64,
    /// Offset from the building's top edge.
    pub y: f64,
    pub lit: bool,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
    pub windows: Vec<Window>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_starts_mid_screen() {
        let config = GameConfig::default();
        let bird = Bird::new(&config);
        assert_eq!(bird.y, config.world_height / 2.0);
        assert_eq!(bird.velocity, 0.0);
        assert_eq!(bird.x, config.bird_x);
        assert_eq!(bird.bottom(), bird.y + config.bird_height);
    }

    #[test]
    fn test_particle_alpha_fades_linearly() {
        let mut p = Particle {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            color: Rgb::CYAN,
            life: 30,
            max_life: 30,
        };
        assert_eq!(p.alpha(), 1.0);
        p.life = 15;
        assert_eq!(p.alpha(), 0.5);
        p.life = 0;
        assert_eq!(p.alpha(), 0.0);
        assert!(p.is_expired());
    }

    #[test]
    fn test_pipe_edges() {
        let pipe = Pipe {
            x: 200.0,
            gap_top: 100.0,
            passed: false,
            color: Rgb::MAGENTA,
        };
        assert_eq!(pipe.right(60.0), 260.0);
        assert_eq!(pipe.gap_bottom(150.0), 250.0);
    }
}
