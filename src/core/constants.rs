// World geometry (logical units, the canvas the game is designed for)
pub const WORLD_WIDTH: f64 = 480.0;
pub const WORLD_HEIGHT: f64 = 640.0;

// Bird
pub const BIRD_X: f64 = 100.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const BIRD_GRAVITY: f64 = 0.5;
pub const BIRD_JUMP_IMPULSE: f64 = -10.0;

// Pipes
pub const PIPE_WIDTH: f64 = 60.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const PIPE_MIN_HEIGHT: f64 = 50.0;
/// Height of the bright lip drawn on both edges of a gap.
pub const PIPE_LIP_HEIGHT: f64 = 10.0;

// Logical spawn timer. The timer advances by LOGICAL_TICK every frame, no
// matter how long the frame actually took.
pub const LOGICAL_TICK: u32 = 16;
pub const PIPE_SPAWN_INTERVAL: u32 = 1500;

// Real-time frame pacing for the terminal driver
pub const FRAME_MS: u64 = 16; // ~60 FPS

// Scenery
pub const STAR_COUNT: usize = 100;
pub const BUILDING_COUNT: usize = 10;
pub const WINDOWS_PER_BUILDING: usize = 20;
pub const WINDOW_SIZE: f64 = 5.0;
pub const WINDOW_LIT_CHANCE: f64 = 0.7;
pub const GRID_SPACING: f64 = 40.0;

// Particle bursts: (count, lifetime in frames)
pub const FLAP_BURST: (usize, i32) = (10, 30);
pub const PASS_BURST: (usize, i32) = (20, 40);
pub const DEATH_BURST: (usize, i32) = (50, 60);

// Persistence
pub const DATA_DIR_NAME: &str = ".cyberflap";
pub const BEST_SCORE_FILE: &str = "best_score.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "cyber-flap.log";
/// Key the best score is stored under inside the score file.
pub const BEST_SCORE_KEY: &str = "cyberflapHighScore";
pub const LOG_FILTER_ENV: &str = "CYBERFLAP_LOG";
