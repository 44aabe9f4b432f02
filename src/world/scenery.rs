//! Decorative starfield and skyline. Generated once per run and animated
//! every frame regardless of game phase.

use super::types::{Building, Star, Window};
use crate::core::color::Rgb;
use crate::core::config::GameConfig;
use crate::core::constants::WINDOW_LIT_CHANCE;
use rand::Rng;

#[derive(Debug, Clone, Default)]
pub struct Scenery {
    pub stars: Vec<Star>,
    pub buildings: Vec<Building>,
}

impl Scenery {
    pub fn generate<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star {
                x: rng.gen_range(0.0..config.world_width),
                y: rng.gen_range(0.0..config.world_height),
                size: rng.gen_range(0.0..3.0),
                speed: rng.gen_range(0.5..1.5),
                alpha: rng.gen_range(0.0..1.0),
            })
            .collect();

        let slot = config.world_width / config.building_count.max(1) as f64;
        let buildings = (0..config.building_count)
            .map(|i| {
                let width = rng.gen_range(50.0..150.0);
                let height = rng.gen_range(50.0..200.0);
                let windows = (0..config.windows_per_building)
                    .map(|_| Window {
                        x: rng.gen_range(0.0..width),
                        y: rng.gen_range(0.0..height),
                        lit: rng.gen_bool(WINDOW_LIT_CHANCE),
                        color: Rgb::from_hsl(rng.gen_range(30.0..90.0), 1.0, 0.5),
                    })
                    .collect();
                Building {
                    x: i as f64 * slot,
                    width,
                    height,
                    color: Rgb::from_hsl(rng.gen_range(240.0..300.0), 0.7, 0.2),
                    windows,
                }
            })
            .collect();

        Self { stars, buildings }
    }

    /// Drift every star down; stars leaving the bottom reappear at the top at
    /// a new random column.
    pub fn advance<R: Rng>(&mut self, world_width: f64, world_height: f64, rng: &mut R) {
        for star in &mut self.stars {
            star.y += star.speed;
            if star.y > world_height {
                star.y = 0.0;
                star.x = rng.gen_range(0.0..world_width);
            }
        }
    }
}
