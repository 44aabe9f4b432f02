//! Frame scheduling shared by the terminal game and the simulator.

use super::session::{Phase, Session, TickOutcome};
use rand::Rng;
use std::time::{Duration, Instant};

/// Fixed-cadence frame clock for the interactive driver.
///
/// The simulation never reads elapsed time; the clock only decides when the
/// next frame is due and how long the event poll may block.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Time left before the next frame is due.
    pub fn remaining(&self) -> Duration {
        self.next.saturating_duration_since(Instant::now())
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.next
    }

    /// Schedule the following frame. After a stall (terminal suspended,
    /// slow draw) the clock re-anchors instead of running a burst of
    /// catch-up frames.
    pub fn advance(&mut self) {
        self.next += self.frame;
        let now = Instant::now();
        if self.next < now {
            self.next = now + self.frame;
        }
    }
}

/// Run whatever a display frame needs in the current phase: a full tick
/// while playing, otherwise an idle frame that only animates cosmetics.
pub fn run_frame<R: Rng>(session: &mut Session, rng: &mut R) -> TickOutcome {
    match session.phase() {
        Phase::Playing => session.tick(rng),
        Phase::NotStarted | Phase::GameOver => {
            session.idle(rng);
            TickOutcome::Stop
        }
    }
}
