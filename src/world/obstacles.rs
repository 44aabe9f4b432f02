//! Pipe spawning, scrolling, scoring and retirement.

use super::particles::Burst;
use super::types::Pipe;
use super::World;
use crate::core::color::Rgb;
use crate::core::config::GameConfig;
use rand::Rng;

/// Logical spawn timer. Advances by a fixed amount per frame, independent of
/// wall-clock time, so spawn cadence stays locked to pipe speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnTimer {
    elapsed: u32,
}

impl SpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's increment. Returns true (and resets) once the
    /// interval is reached.
    pub fn tick(&mut self, increment: u32, interval: u32) -> bool {
        self.elapsed = self.elapsed.saturating_add(increment);
        if self.elapsed >= interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// What happened to the obstacles during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleReport {
    /// Pipes newly marked as passed (one point each).
    pub passed: u32,
    pub retired: usize,
    pub spawned: bool,
}

/// Create a pipe at the right edge with a uniformly random integer gap top
/// in `[min_gap_top, max_gap_top]`.
pub fn spawn_pipe<R: Rng>(config: &GameConfig, rng: &mut R) -> Pipe {
    let lo = config.min_gap_top().ceil() as i64;
    let hi = config.max_gap_top().floor() as i64;
    let gap_top = rng.gen_range(lo..=hi) as f64;
    Pipe {
        x: config.world_width,
        gap_top,
        passed: false,
        color: Rgb::from_hsl(rng.gen_range(240.0..300.0), 0.8, 0.5),
    }
}

/// Run the obstacle stage of a frame: advance, score, retire, then spawn.
///
/// Spawning comes last so a fresh pipe is seen at exactly
/// `x == world_width` on the frame it appears.
pub fn update<R: Rng>(world: &mut World, config: &GameConfig, rng: &mut R) -> ObstacleReport {
    let mut report = ObstacleReport::default();
    let pipe_width = config.pipe_width;

    for pipe in world.pipes.iter_mut() {
        pipe.x -= config.pipe_speed;

        if !pipe.passed && pipe.right(pipe_width) < world.bird.x {
            pipe.passed = true;
            report.passed += 1;
            world.particles.emit(
                Burst::PipePassed {
                    x: pipe.x + pipe_width / 2.0,
                    world_height: config.world_height,
                },
                rng,
            );
        }
    }

    // Pipes are appended in x order and share one speed, so only the front
    // can leave the screen.
    while world
        .pipes
        .front()
        .is_some_and(|front| front.right(pipe_width) < 0.0)
    {
        world.pipes.pop_front();
        report.retired += 1;
    }

    if world
        .spawn_timer
        .tick(config.logical_tick, config.spawn_interval)
    {
        world.pipes.push_back(spawn_pipe(config, rng));
        report.spawned = true;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (World, GameConfig, ChaCha8Rng) {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let world = World::new(&config, &mut rng);
        (world, config, rng)
    }

    fn pipe_at(x: f64) -> Pipe {
        Pipe {
            x,
            gap_top: 200.0,
            passed: false,
            color: Rgb::MAGENTA,
        }
    }

    #[test]
    fn test_spawn_timer_fires_at_interval() {
        let mut timer = SpawnTimer::new();
        for _ in 0..93 {
            assert!(!timer.tick(16, 1500));
        }
        assert_eq!(timer.elapsed(), 93 * 16);
        assert!(timer.tick(16, 1500));
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn test_spawn_pipe_gap_in_range() {
        let (_, config, mut rng) = setup();
        for _ in 0..500 {
            let pipe = spawn_pipe(&config, &mut rng);
            assert_eq!(pipe.x, config.world_width);
            assert!(pipe.gap_top >= config.min_gap_top());
            assert!(pipe.gap_top <= config.max_gap_top());
            assert_eq!(pipe.gap_top.fract(), 0.0);
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn test_pipes_advance_by_speed() {
        let (mut world, config, mut rng) = setup();
        world.pipes.push_back(pipe_at(300.0));
        world.pipes.push_back(pipe_at(400.0));

        update(&mut world, &config, &mut rng);

        assert_eq!(world.pipes[0].x, 297.0);
        assert_eq!(world.pipes[1].x, 397.0);
    }

    #[test]
    fn test_pipe_marked_passed_once() {
        let (mut world, config, mut rng) = setup();
        // Right edge lands exactly on bird.x after one step: not yet passed.
        world.pipes.push_back(pipe_at(world.bird.x - config.pipe_width + 3.0));

        let report = update(&mut world, &config, &mut rng);
        assert_eq!(report.passed, 0);
        assert!(!world.pipes[0].passed);

        let report = update(&mut world, &config, &mut rng);
        assert_eq!(report.passed, 1);
        assert!(world.pipes[0].passed);
        assert_eq!(world.particles.len(), 20);

        let report = update(&mut world, &config, &mut rng);
        assert_eq!(report.passed, 0);
    }

    #[test]
    fn test_front_pipe_retired_when_offscreen() {
        let (mut world, config, mut rng) = setup();
        world.pipes.push_back(pipe_at(-config.pipe_width + 2.0));
        world.pipes.push_back(pipe_at(250.0));

        let report = update(&mut world, &config, &mut rng);

        assert_eq!(report.retired, 1);
        assert_eq!(world.pipes.len(), 1);
        assert_eq!(world.pipes[0].x, 247.0);
    }

    #[test]
    fn test_pipe_touching_left_edge_not_retired() {
        let (mut world, config, mut rng) = setup();
        world.pipes.push_back(pipe_at(-config.pipe_width + 3.0));

        let report = update(&mut world, &config, &mut rng);

        assert_eq!(report.retired, 0);
        assert_eq!(world.pipes.len(), 1);
    }

    #[test]
    fn test_spawn_happens_after_advance() {
        let (mut world, config, mut rng) = setup();
        let mut spawned_on = None;
        for frame in 1..=94 {
            let report = update(&mut world, &config, &mut rng);
            if report.spawned {
                spawned_on = Some(frame);
            }
        }
        assert_eq!(spawned_on, Some(94));
        assert_eq!(world.pipes.len(), 1);
        assert_eq!(world.pipes[0].x, config.world_width);
    }
}
