use cyber_flap::build_info;
use cyber_flap::core::constants::{CONFIG_FILE, LOG_FILE};
use cyber_flap::core::{run_frame, ConfigError, FrameClock, GameConfig, Session};
use cyber_flap::input::{map_event, Command};
use cyber_flap::ui::{draw_ui, PixelCanvas};
use cyber_flap::utils::logging::init_file_logging;
use cyber_flap::utils::persistence::data_path;
use cyber_flap::utils::{FileScoreStore, StoreError};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use rand::Rng;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    reset_best: bool,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);

    if let Err(e) = run(options) {
        error!(error = %e, "fatal");
        eprintln!("cyber-flap: {}", e);
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    eprintln!("--config needs a path");
                    process::exit(1);
                };
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--reset-best" => options.reset_best = true,
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'cyber-flap --help' for usage.");
                process::exit(1);
            }
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Cyber Flap - neon Flappy Bird in the terminal\n");
    println!("Usage: cyber-flap [options]\n");
    println!("Options:");
    println!("  -c, --config <PATH>  Game config JSON (default: ~/.cyberflap/config.json)");
    println!("  --reset-best         Clear the stored best score and exit");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message\n");
    println!("Controls:");
    println!("  Space / Up / Enter / click   Flap (starts and restarts too)");
    println!("  S                            Start");
    println!("  R                            Restart after a crash");
    println!("  Q / Esc / Ctrl-C             Quit");
}

fn run(options: Options) -> Result<(), AppError> {
    init_file_logging(&data_path(LOG_FILE)?)?;

    let config_path = match options.config_path {
        Some(path) => path,
        None => data_path(CONFIG_FILE)?,
    };
    let config = GameConfig::load(&config_path)?;

    let store = FileScoreStore::default_location()?;
    if options.reset_best {
        store.reset()?;
        info!(path = %store.path().display(), "best score cleared");
        println!("Best score cleared.");
        return Ok(());
    }

    info!(
        version = %build_info::version_string(),
        config = %config_path.display(),
        "cyber-flap starting"
    );

    let mut rng = rand::thread_rng();
    let mut session = Session::new(config, Box::new(store), &mut rng);

    enable_raw_mode()?;
    let result = run_terminal(&mut session, &mut rng);
    let restored = restore_terminal(&mut io::stdout());

    info!(best = session.best(), "cyber-flap exiting");
    result?;
    Ok(restored?)
}

fn run_terminal<R: Rng>(session: &mut Session, rng: &mut R) -> Result<(), AppError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    game_loop(&mut terminal, session, rng)
}

/// Undo every terminal mode change. Each step runs even when an earlier one
/// failed; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let steps = [
        disable_raw_mode(),
        out.execute(DisableMouseCapture).map(drop),
        out.execute(LeaveAlternateScreen).map(drop),
        out.execute(cursor::Show).map(drop),
    ];
    steps.into_iter().collect()
}

/// Draw, wait out the frame while dispatching input, then advance one frame.
fn game_loop<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    session: &mut Session,
    rng: &mut R,
) -> Result<(), AppError> {
    let config = session.config();
    let mut canvas = PixelCanvas::new(config.world_width, config.world_height, 0, 0);
    let mut clock = FrameClock::from_millis(config.frame_ms);

    loop {
        terminal.draw(|frame| draw_ui(frame, session, &mut canvas))?;

        while !clock.is_due() {
            if !event::poll(clock.remaining())? {
                continue;
            }
            match map_event(&event::read()?) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Game(input)) => session.handle_input(input, rng),
                None => {}
            }
        }
        clock.advance();

        run_frame(session, rng);
    }
}
