//! Draws the world onto a `Surface`, back to front.

use super::surface::{Glow, Gradient, Paint, Surface};
use crate::core::color::Rgb;
use crate::core::config::GameConfig;
use crate::core::constants::{GRID_SPACING, PIPE_LIP_HEIGHT, WINDOW_SIZE};
use crate::world::{Bird, Pipe, World};
use std::f64::consts::FRAC_PI_4;

const SKY_TOP: Rgb = Rgb::hex(0x0f0c29);
const SKY_MID: Rgb = Rgb::hex(0x302b63);
const SKY_BOTTOM: Rgb = Rgb::hex(0x24243e);
const PIPE_EDGE: Rgb = Rgb::hex(0x4d00ff);
const GRID_ALPHA: f64 = 0.1;
const GLOW_BLUR: f64 = 15.0;
const EYE_RADIUS: f64 = 3.0;

pub fn draw_scene(surface: &mut impl Surface, world: &World, config: &GameConfig) {
    draw_background(surface, world, config);
    for pipe in &world.pipes {
        draw_pipe(surface, pipe, config);
    }
    draw_bird(surface, &world.bird);
    draw_particles(surface, world);
}

fn draw_background(surface: &mut impl Surface, world: &World, config: &GameConfig) {
    let (w, h) = (config.world_width, config.world_height);

    let sky = Gradient::linear(0.0, 0.0, 0.0, h)
        .stop(0.0, SKY_TOP)
        .stop(0.5, SKY_MID)
        .stop(1.0, SKY_BOTTOM);
    surface.set_alpha(1.0);
    surface.fill_rect(0.0, 0.0, w, h, &sky.into());

    for star in &world.scenery.stars {
        surface.set_alpha(star.alpha);
        surface.fill_rect(star.x, star.y, star.size, star.size, &Rgb::WHITE.into());
    }
    surface.set_alpha(1.0);

    for building in &world.scenery.buildings {
        let top = h - building.height;
        surface.fill_rect(building.x, top, building.width, building.height, &building.color.into());
        for window in building.windows.iter().filter(|w| w.lit) {
            surface.fill_rect(
                building.x + window.x,
                top + window.y,
                WINDOW_SIZE,
                WINDOW_SIZE,
                &window.color.into(),
            );
        }
    }

    surface.set_alpha(GRID_ALPHA);
    let mut x = 0.0;
    while x < w {
        surface.stroke_line(x, 0.0, x, h, Rgb::CYAN);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < h {
        surface.stroke_line(0.0, y, w, y, Rgb::CYAN);
        y += GRID_SPACING;
    }
    surface.set_alpha(1.0);
}

fn draw_pipe(surface: &mut impl Surface, pipe: &Pipe, config: &GameConfig) {
    let pw = config.pipe_width;
    let bottom_y = pipe.gap_bottom(config.pipe_gap);
    let bottom_h = config.world_height - bottom_y;

    let top_paint: Paint = Gradient::linear(pipe.x, 0.0, pipe.x + pw, 0.0)
        .stop(0.0, pipe.color)
        .stop(1.0, PIPE_EDGE)
        .into();
    let bottom_paint: Paint = Gradient::linear(pipe.x, bottom_y, pipe.x + pw, bottom_y)
        .stop(0.0, PIPE_EDGE)
        .stop(1.0, pipe.color)
        .into();

    surface.set_glow(Some(Glow {
        color: pipe.color,
        blur: GLOW_BLUR,
    }));
    surface.fill_rect(pipe.x, 0.0, pw, pipe.gap_top, &top_paint);
    surface.fill_rect(pipe.x, bottom_y, pw, bottom_h, &bottom_paint);
    surface.set_glow(None);

    let lip: Paint = Rgb::CYAN.into();
    surface.fill_rect(pipe.x, pipe.gap_top - PIPE_LIP_HEIGHT, pw, PIPE_LIP_HEIGHT, &lip);
    surface.fill_rect(pipe.x, bottom_y, pw, PIPE_LIP_HEIGHT, &lip);
}

/// Wing height and tilt follow the vertical velocity.
fn wing_shape(bird: &Bird) -> (f64, f64) {
    let ry = (bird.height / 2.0) * (1.0 + bird.velocity.abs() * 0.1);
    let rotation = FRAC_PI_4 * (bird.velocity * 0.2);
    (ry, rotation)
}

fn draw_bird(surface: &mut impl Surface, bird: &Bird) {
    let (cx, cy) = bird.center();

    surface.set_glow(Some(Glow {
        color: bird.color,
        blur: GLOW_BLUR,
    }));
    surface.fill_ellipse(cx, cy, bird.width / 2.0, bird.height / 2.0, 0.0, &bird.color.into());
    surface.set_glow(None);

    let (wing_ry, wing_rot) = wing_shape(bird);
    surface.fill_ellipse(
        bird.x + bird.width / 3.0,
        cy,
        bird.width / 3.0,
        wing_ry,
        wing_rot,
        &Rgb::DARK_CYAN.into(),
    );

    surface.fill_circle(
        bird.x + bird.width / 1.5,
        bird.y + bird.height / 3.0,
        EYE_RADIUS,
        &Rgb::BLACK.into(),
    );
}

fn draw_particles(surface: &mut impl Surface, world: &World) {
    for p in world.particles.iter() {
        surface.set_alpha(p.alpha());
        surface.fill_circle(p.x, p.y, p.size, &p.color.into());
    }
    surface.set_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Burst;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect { x: f64, y: f64, w: f64, h: f64, alpha: f64, glow: bool, paint: Paint },
        Ellipse { cx: f64, cy: f64, rx: f64, ry: f64, rot: f64, alpha: f64, glow: bool, paint: Paint },
        Line { alpha: f64 },
    }

    #[derive(Default)]
    struct Recorder {
        alpha: f64,
        glow: Option<Glow>,
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        fn set_alpha(&mut self, alpha: f64) {
            self.alpha = alpha;
        }
        fn set_glow(&mut self, glow: Option<Glow>) {
            self.glow = glow;
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
            self.ops.push(Op::Rect {
                x,
                y,
                w,
                h,
                alpha: self.alpha,
                glow: self.glow.is_some(),
                paint: paint.clone(),
            });
        }
        fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, rot: f64, paint: &Paint) {
            self.ops.push(Op::Ellipse {
                cx,
                cy,
                rx,
                ry,
                rot,
                alpha: self.alpha,
                glow: self.glow.is_some(),
                paint: paint.clone(),
            });
        }
        fn stroke_line(&mut self, _x0: f64, _y0: f64, _x1: f64, _y1: f64, _color: Rgb) {
            self.ops.push(Op::Line { alpha: self.alpha });
        }
    }

    fn world() -> (World, GameConfig) {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        (World::new(&config, &mut rng), config)
    }

    #[test]
    fn test_sky_is_first_and_full_size() {
        let (world, config) = world();
        let mut r = Recorder::default();
        draw_scene(&mut r, &world, &config);
        match &r.ops[0] {
            Op::Rect { x, y, w, h, paint, .. } => {
                assert_eq!((*x, *y, *w, *h), (0.0, 0.0, 480.0, 640.0));
                assert_eq!(paint.color_at(0.0, 0.0), SKY_TOP);
                assert_eq!(paint.color_at(0.0, 320.0), SKY_MID);
                assert_eq!(paint.color_at(0.0, 640.0), SKY_BOTTOM);
            }
            other => panic!("expected sky rect, got {other:?}"),
        }
    }

    #[test]
    fn test_grid_lines_are_faint() {
        let (world, config) = world();
        let mut r = Recorder::default();
        draw_scene(&mut r, &world, &config);
        let lines: Vec<_> = r.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect();
        // 480/40 vertical + 640/40 horizontal.
        assert_eq!(lines.len(), 12 + 16);
        assert!(lines.iter().all(|op| **op == Op::Line { alpha: GRID_ALPHA }));
    }

    #[test]
    fn test_pipe_columns_glow_and_lips() {
        let (mut world, config) = world();
        world.pipes.push_back(Pipe {
            x: 200.0,
            gap_top: 100.0,
            passed: false,
            color: Rgb::MAGENTA,
        });
        let mut r = Recorder::default();
        draw_scene(&mut r, &world, &config);

        let pipe_ops: Vec<_> = r
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Rect { x, .. } if *x == 200.0))
            .collect();
        assert_eq!(pipe_ops.len(), 4);

        match pipe_ops[0] {
            Op::Rect { y, h, glow, paint, .. } => {
                assert_eq!((*y, *h), (0.0, 100.0));
                assert!(*glow);
                assert_eq!(paint.color_at(200.0, 50.0), Rgb::MAGENTA);
                assert_eq!(paint.color_at(260.0, 50.0), PIPE_EDGE);
            }
            _ => unreachable!(),
        }
        match pipe_ops[1] {
            Op::Rect { y, h, glow, paint, .. } => {
                assert_eq!((*y, *h), (250.0, 390.0));
                assert!(*glow);
                assert_eq!(paint.color_at(200.0, 300.0), PIPE_EDGE);
            }
            _ => unreachable!(),
        }
        assert!(matches!(pipe_ops[2], Op::Rect { y, h, glow: false, .. } if *y == 90.0 && *h == 10.0));
        assert!(matches!(pipe_ops[3], Op::Rect { y, h, glow: false, .. } if *y == 250.0 && *h == 10.0));
    }

    #[test]
    fn test_bird_wing_follows_velocity() {
        let (mut world, config) = world();
        world.bird.velocity = 5.0;
        let mut r = Recorder::default();
        draw_scene(&mut r, &world, &config);

        let ellipses: Vec<_> = r
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Ellipse { .. }))
            .collect();
        assert_eq!(ellipses.len(), 3);

        match ellipses[0] {
            Op::Ellipse { rx, ry, glow, .. } => {
                assert_eq!((*rx, *ry), (20.0, 15.0));
                assert!(*glow);
            }
            _ => unreachable!(),
        }
        match ellipses[1] {
            Op::Ellipse { cx, ry, rot, paint, .. } => {
                assert!((cx - (100.0 + 40.0 / 3.0)).abs() < 1e-9);
                assert!((ry - 15.0 * 1.5).abs() < 1e-9);
                assert!((rot - FRAC_PI_4).abs() < 1e-9);
                assert_eq!(*paint, Paint::Solid(Rgb::DARK_CYAN));
            }
            _ => unreachable!(),
        }
        match ellipses[2] {
            Op::Ellipse { rx, paint, .. } => {
                assert_eq!(*rx, EYE_RADIUS);
                assert_eq!(*paint, Paint::Solid(Rgb::BLACK));
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_particles_drawn_last_with_life_alpha() {
        let (mut world, config) = world();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        world.particles.emit(Burst::Flap { x: 100.0, y: 300.0 }, &mut rng);
        for _ in 0..15 {
            world.particles.update();
        }
        let mut r = Recorder::default();
        draw_scene(&mut r, &world, &config);

        let tail = &r.ops[r.ops.len() - 10..];
        for op in tail {
            match op {
                Op::Ellipse { alpha, .. } => assert!((alpha - 0.5).abs() < 1e-9),
                other => panic!("expected particle, got {other:?}"),
            }
        }
        assert_eq!(r.alpha, 1.0);
    }
}
