//! Autopilot simulator CLI.
//!
//! Plays seeded batches of sessions without a terminal and prints score
//! statistics.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 runs
//!   cargo run --bin simulate -- -n 500         # 500 runs
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use cyber_flap::core::config::GameConfig;
use cyber_flap::simulator::{run_simulation, SimConfig};
use cyber_flap::utils::logging::init_stderr_logging;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    init_stderr_logging(if config.verbosity >= 2 { "debug" } else { "warn" });

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              CYBER FLAP AUTOPILOT SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Frames:     {}", config.max_frames);
    println!("  Pipe Gap:       {}", config.game.pipe_gap);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write {}: {}", filename, e);
                process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-f" | "--max-frames" => {
                if i + 1 < args.len() {
                    config.max_frames = args[i + 1].parse().unwrap_or(20_000);
                    i += 1;
                }
            }
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    config.game = load_game_config(&args[i + 1]);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick(config.seed.unwrap_or(0));
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn load_game_config(path: &str) -> GameConfig {
    match GameConfig::load(Path::new(path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid config {}: {}", path, e);
            process::exit(1);
        }
    }
}

fn print_help() {
    println!("Cyber Flap Autopilot Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of sessions (default: 100)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -f, --max-frames <F>  Frame cap per session (default: 20,000)");
    println!("    -c, --config <PATH>   Game config JSON (default: built-in rules)");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick check (10 runs, 5,000 frames)");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 500 -s 7     # 500 seeded runs");
    println!("    cargo run --bin simulate -- --quick --json  # Quick check with report");
}
