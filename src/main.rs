use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::clock::TickClock;
use grid_snake::config::{
    DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, FRAME_POLL_MS, GameConfig, THEME_PAPER,
};
use grid_snake::game::GameState;
use grid_snake::input::InputHandler;
use grid_snake::random::SeededSource;
use grid_snake::renderer;
use grid_snake::score::ScoreStore;
use grid_snake::session::{Flow, Session, SessionEvent};
use grid_snake::terminal_runtime::TerminalGuard;
use log::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per side of the square grid (2..=64).
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Milliseconds between simulation steps.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output to this file (filter with RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match GameConfig::new(cli.grid_size, cli.tick_ms, cli.seed) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Invalid configuration: {error}");
            return ExitCode::from(2);
        }
    };

    if let Some(path) = &cli.log_file {
        if let Err(error) = init_logging(path) {
            eprintln!("Could not open log file {}: {error}", path.display());
            return ExitCode::FAILURE;
        }
    }

    let store = ScoreStore::default_location();
    let best_score = store.load().unwrap_or_else(|error| {
        warn!("failed to load best score: {error}");
        eprintln!("Ignoring best score: {error}");
        0
    });

    match run(config, &store, best_score) {
        Ok(warnings) => {
            for warning in warnings {
                eprintln!("{warning}");
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// Runs the game loop; returns messages to print once the terminal is back.
fn run(config: GameConfig, store: &ScoreStore, best_score: u32) -> io::Result<Vec<String>> {
    let source = match config.seed {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_entropy(),
    };
    info!(
        "starting {0}x{0} game, tick {1:?}, seed {2:?}",
        config.grid_size.side(),
        config.tick_interval,
        config.seed
    );

    let mut session = Session::new(
        GameState::new(config.grid_size, source),
        TickClock::new(config.tick_interval),
        best_score,
    );
    let input = InputHandler::new(Duration::from_millis(FRAME_POLL_MS));
    let mut warnings = Vec::new();

    let mut guard = TerminalGuard::enter()?;
    loop {
        guard
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &session, &THEME_PAPER))?;

        if let Some(game_input) = input.poll_input()? {
            if session.handle_input(game_input) == Flow::Quit {
                break;
            }
        }

        if let Some(SessionEvent::GameOver { score, new_best: true }) =
            session.advance(Instant::now())
        {
            if let Err(error) = store.save(score) {
                warn!("failed to save best score: {error}");
                warnings.push(format!("Failed to save best score: {error}"));
            }
        }
    }

    Ok(warnings)
}
