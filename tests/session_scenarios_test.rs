//! Integration test: session lifecycle scenarios
//!
//! Drives `Session` through its public API the way the terminal driver
//! does: input events, then one `tick` per frame.

use cyber_flap::core::color::Rgb;
use cyber_flap::core::{GameConfig, InputEvent, Phase, Session, TickOutcome};
use cyber_flap::simulator::Autopilot;
use cyber_flap::utils::MemoryScoreStore;
use cyber_flap::world::Pipe;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn new_session(seed: u64) -> (Session, ChaCha8Rng) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let session = Session::new(
        GameConfig::default(),
        Box::new(MemoryScoreStore::new()),
        &mut rng,
    );
    (session, rng)
}

// =============================================================================
// Scenario A: fresh start
// =============================================================================

#[test]
fn test_start_with_zero_frames() {
    let (mut session, mut rng) = new_session(1);
    assert_eq!(session.phase(), Phase::NotStarted);

    session.handle_input(InputEvent::Start, &mut rng);

    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.world().bird.y, 320.0);
    assert!(session.world().pipes.is_empty());
}

// =============================================================================
// Scenario B: first spawn
// =============================================================================

#[test]
fn test_first_pipe_spawns_after_94_frames() {
    let (mut session, mut rng) = new_session(2);
    session.handle_input(InputEvent::Start, &mut rng);

    // Flapping every 40 frames keeps the bird between 225 and 340.
    for frame in 0..94 {
        if frame % 40 == 0 {
            session.handle_input(InputEvent::Flap, &mut rng);
        }
        assert_eq!(session.tick(&mut rng), TickOutcome::Continue, "frame {}", frame);
        if frame < 93 {
            assert!(session.world().pipes.is_empty(), "early spawn at frame {}", frame);
        }
    }

    let pipes = &session.world().pipes;
    assert_eq!(pipes.len(), 1);
    assert_eq!(pipes[0].x, 480.0);
    assert!(pipes[0].gap_top >= 50.0 && pipes[0].gap_top <= 440.0);
}

// =============================================================================
// Scenario C: floor crash
// =============================================================================

#[test]
fn test_floor_clamp_ends_session() {
    let (mut session, mut rng) = new_session(3);
    session.handle_input(InputEvent::Start, &mut rng);

    let bird = &mut session.world_mut().bird;
    bird.y = 605.0;
    bird.velocity = 10.0;

    assert_eq!(session.tick(&mut rng), TickOutcome::Stop);

    let bird = &session.world().bird;
    assert_eq!(bird.y, 610.0);
    assert_eq!(bird.velocity, 0.0);
    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.world().particles.len(), 50);
    assert!(session.overlays().game_over_visible);
}

#[test]
fn test_ceiling_clamp_ends_session() {
    let (mut session, mut rng) = new_session(4);
    session.handle_input(InputEvent::Start, &mut rng);
    session.world_mut().bird.y = 5.0;
    session.handle_input(InputEvent::Flap, &mut rng);

    assert_eq!(session.tick(&mut rng), TickOutcome::Stop);
    assert_eq!(session.world().bird.y, 0.0);
    assert_eq!(session.phase(), Phase::GameOver);
}

// =============================================================================
// Score and best score across sessions
// =============================================================================

/// Let the simulator's autopilot fly until the session ends or the frame
/// budget runs out. Returns the score after every frame.
fn play_until_crash(session: &mut Session, rng: &mut ChaCha8Rng, max_frames: u32) -> Vec<u32> {
    let pilot = Autopilot::default();
    let mut scores = Vec::new();
    for _ in 0..max_frames {
        if pilot.should_flap(session.world(), session.config()) {
            session.handle_input(InputEvent::Flap, rng);
        }
        let outcome = session.tick(rng);
        scores.push(session.score());
        if outcome == TickOutcome::Stop {
            break;
        }
    }
    scores
}

#[test]
fn test_passing_a_pipe_scores_and_crash_saves_best() {
    let (mut session, mut rng) = new_session(8);
    session.handle_input(InputEvent::Start, &mut rng);

    // After this frame's advance the right edge sits at 98, left of the bird.
    session.world_mut().pipes.push_back(Pipe {
        x: 41.0,
        gap_top: 250.0,
        passed: false,
        color: Rgb::MAGENTA,
    });

    assert_eq!(session.tick(&mut rng), TickOutcome::Continue);
    assert_eq!(session.score(), 1);
    assert!(session.world().pipes[0].passed);
    assert_eq!(session.world().particles.len(), 20);

    // Already passed: no second point.
    assert_eq!(session.tick(&mut rng), TickOutcome::Continue);
    assert_eq!(session.score(), 1);

    let bird = &mut session.world_mut().bird;
    bird.y = 610.0;
    bird.velocity = 0.0;
    assert_eq!(session.tick(&mut rng), TickOutcome::Stop);

    assert_eq!(session.phase(), Phase::GameOver);
    assert_eq!(session.best(), 1);
    assert_eq!(session.store().load(), Some(1));
    assert_eq!(session.overlays().final_score, 1);
    assert_eq!(session.overlays().best_score, 1);
}

#[test]
fn test_score_only_rises_by_one() {
    let (mut session, mut rng) = new_session(5);
    session.handle_input(InputEvent::Start, &mut rng);
    let scores = play_until_crash(&mut session, &mut rng, 5_000);

    let mut last = 0;
    for &score in &scores {
        assert!(score == last || score == last + 1, "{} -> {}", last, score);
        last = score;
    }
    assert!(last > 0, "autopilot never passed a pipe");
}

#[test]
fn test_best_score_survives_restart() {
    let (mut session, mut rng) = new_session(6);
    let mut top = 0;

    for _ in 0..3 {
        session.handle_input(InputEvent::Flap, &mut rng);
        assert_eq!(session.phase(), Phase::Playing);
        play_until_crash(&mut session, &mut rng, 5_000);
        if session.phase() != Phase::GameOver {
            break;
        }
        top = top.max(session.score());
        assert_eq!(session.best(), top);
        assert_eq!(session.overlays().best_score, top);
    }

    assert!(top > 0, "autopilot never passed a pipe");
    assert_eq!(session.store().load(), Some(top));
}

#[test]
fn test_random_input_never_breaks_phase_machine() {
    let (mut session, mut rng) = new_session(7);
    let events = [InputEvent::Flap, InputEvent::Start, InputEvent::Restart];

    for _ in 0..3_000 {
        if rng.gen_bool(0.1) {
            let event = events[rng.gen_range(0..events.len())];
            let before = session.phase();
            session.handle_input(event, &mut rng);
            match (before, event) {
                (Phase::NotStarted, InputEvent::Restart) => {
                    assert_eq!(session.phase(), Phase::NotStarted)
                }
                (_, _) => assert_eq!(session.phase(), Phase::Playing),
            }
        }
        let playing = session.phase() == Phase::Playing;
        let outcome = session.tick(&mut rng);
        if !playing {
            assert_eq!(outcome, TickOutcome::Stop);
        }
        let bird = &session.world().bird;
        assert!(bird.y >= 0.0 && bird.y <= 610.0);
    }
}
