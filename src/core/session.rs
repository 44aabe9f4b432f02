//! Session state machine and the per-frame pipeline.
//!
//! A `Session` owns the world, the score, the phase and the injected best
//! score store. The terminal driver (or the simulator) feeds it
//! `InputEvent`s and calls `tick` once per frame while `Playing`, and `idle`
//! otherwise.

use super::config::GameConfig;
use crate::utils::score_store::ScoreStore;
use crate::world::{collision, obstacles, physics, Burst, World};
use rand::Rng;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    GameOver,
}

/// Player actions after key/pointer mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary action: Space, Up, Enter or a mouse click.
    Flap,
    /// Start button.
    Start,
    /// Restart button.
    Restart,
}

/// Whether the frame loop should keep ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stop,
}

/// Visibility and text of the HUD panels around the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub start_visible: bool,
    pub game_over_visible: bool,
    pub score_visible: bool,
    pub final_score: u32,
    pub best_score: u32,
}

pub struct Session {
    config: GameConfig,
    world: World,
    phase: Phase,
    score: u32,
    best: u32,
    /// Frames ticked in the current session.
    frame: u64,
    overlays: Overlays,
    store: Box<dyn ScoreStore>,
}

impl Session {
    /// Build a session in `NotStarted`, reading the best score once.
    pub fn new<R: Rng>(config: GameConfig, store: Box<dyn ScoreStore>, rng: &mut R) -> Self {
        let best = store.load().unwrap_or(0);
        let world = World::new(&config, rng);
        Self {
            config,
            world,
            phase: Phase::NotStarted,
            score: 0,
            best,
            frame: 0,
            overlays: Overlays {
                start_visible: true,
                best_score: best,
                ..Overlays::default()
            },
            store,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access, for forcing states in tests and tools.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn overlays(&self) -> &Overlays {
        &self.overlays
    }

    pub fn store(&self) -> &dyn ScoreStore {
        self.store.as_ref()
    }

    /// Dispatch one input according to the current phase.
    pub fn handle_input<R: Rng>(&mut self, event: InputEvent, rng: &mut R) {
        match (self.phase, event) {
            (Phase::NotStarted, InputEvent::Flap | InputEvent::Start) => self.start(),
            (Phase::Playing, InputEvent::Flap) => self.flap(rng),
            (Phase::GameOver, _) => self.start(),
            _ => {}
        }
    }

    /// Enter `Playing` from either `NotStarted` or `GameOver`.
    fn start(&mut self) {
        self.phase = Phase::Playing;
        self.score = 0;
        self.frame = 0;
        self.world.reset(&self.config);
        self.overlays.start_visible = false;
        self.overlays.game_over_visible = false;
        self.overlays.score_visible = true;
        info!(best = self.best, "session started");
    }

    fn flap<R: Rng>(&mut self, rng: &mut R) {
        let bird = &mut self.world.bird;
        physics::flap(bird);
        let burst = Burst::Flap {
            x: bird.x,
            y: bird.y + bird.height / 2.0,
        };
        self.world.particles.emit(burst, rng);
    }

    /// Run one frame: physics, obstacles, collision check, particles,
    /// scenery. Returns `Stop` when not playing or when the bird crashed
    /// this frame (after switching to `GameOver`).
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Stop;
        }
        self.frame += 1;

        if let Some(bound) = physics::step(&mut self.world.bird, self.config.world_height) {
            debug!(?bound, frame = self.frame, "bird clamped");
        }

        let report = obstacles::update(&mut self.world, &self.config, rng);
        if report.passed > 0 {
            self.score += report.passed;
            debug!(score = self.score, frame = self.frame, "pipe passed");
        }
        if report.spawned {
            debug!(pipes = self.world.pipes.len(), frame = self.frame, "pipe spawned");
        }

        let crashed = collision::collides(&self.world.bird, &self.world.pipes, &self.config);

        self.advance_cosmetics(rng);

        if crashed {
            self.game_over(rng);
            return TickOutcome::Stop;
        }
        TickOutcome::Continue
    }

    /// Redraw-only frame while not playing: particles keep fading and the
    /// starfield keeps scrolling.
    pub fn idle<R: Rng>(&mut self, rng: &mut R) {
        self.advance_cosmetics(rng);
    }

    fn advance_cosmetics<R: Rng>(&mut self, rng: &mut R) {
        self.world.particles.update();
        self.world
            .scenery
            .advance(self.config.world_width, self.config.world_height, rng);
    }

    fn game_over<R: Rng>(&mut self, rng: &mut R) {
        self.phase = Phase::GameOver;

        if self.score > self.best {
            self.best = self.score;
            match self.store.submit(self.score) {
                Ok(_) => info!(best = self.best, "new best score"),
                Err(e) => warn!(error = %e, "failed to persist best score"),
            }
        }

        self.overlays.final_score = self.score;
        self.overlays.best_score = self.best;
        self.overlays.game_over_visible = true;
        self.overlays.score_visible = false;

        let (x, y) = self.world.bird.center();
        self.world.particles.emit(Burst::Death { x, y }, rng);

        info!(
            score = self.score,
            best = self.best,
            frames = self.frame,
            "session over"
        );
    }
}
