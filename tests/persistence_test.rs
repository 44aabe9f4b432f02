//! Integration test: best score and config files on disk

use cyber_flap::core::{ConfigError, GameConfig, InputEvent, Phase, Session, TickOutcome};
use cyber_flap::utils::{FileScoreStore, ScoreStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;

fn crash(session: &mut Session, rng: &mut ChaCha8Rng) {
    let h = session.config().world_height;
    let bird = &mut session.world_mut().bird;
    bird.y = h - bird.height;
    assert_eq!(session.tick(rng), TickOutcome::Stop);
    assert_eq!(session.phase(), Phase::GameOver);
}

#[test]
fn test_best_score_persists_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_score.json");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let mut store = FileScoreStore::new(&path);
    store.save(4).unwrap();

    let session = Session::new(
        GameConfig::default(),
        Box::new(FileScoreStore::new(&path)),
        &mut rng,
    );
    assert_eq!(session.best(), 4);
    assert_eq!(session.overlays().best_score, 4);
}

#[test]
fn test_lower_score_never_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_score.json");
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    FileScoreStore::new(&path).save(9).unwrap();

    let mut session = Session::new(
        GameConfig::default(),
        Box::new(FileScoreStore::new(&path)),
        &mut rng,
    );
    session.handle_input(InputEvent::Start, &mut rng);
    crash(&mut session, &mut rng);

    assert_eq!(session.score(), 0);
    assert_eq!(FileScoreStore::new(&path).load(), Some(9));
}

#[test]
fn test_first_game_creates_score_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("best_score.json");
    FileScoreStore::new(&path).save(1).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"cyberflapHighScore\": 1"));
}

#[test]
fn test_partial_config_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "pipe_gap": 180.0, "gravity": 0.4 }"#).unwrap();

    let config = GameConfig::load(&path).unwrap();
    assert_eq!(config.pipe_gap, 180.0);
    assert_eq!(config.gravity, 0.4);
    assert_eq!(config.pipe_speed, GameConfig::default().pipe_speed);
    assert_eq!(config.spawn_interval, 1500);
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    // Geometry is checked on load; callers need no separate validate step.
    fs::write(&path, r#"{ "pipe_gap": 900.0 }"#).unwrap();
    assert!(matches!(
        GameConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));

    fs::write(&path, "{ not json").unwrap();
    assert!(GameConfig::load(&path).is_err());
}
