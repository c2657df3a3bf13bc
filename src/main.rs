use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wrap_snake::clock::TickClock;
use wrap_snake::config::{GRID, TICKS_PER_SECOND};
use wrap_snake::controller::Controller;
use wrap_snake::error::Result;
use wrap_snake::game::Game;
use wrap_snake::input::KeyboardInput;
use wrap_snake::logging;
use wrap_snake::terminal_runtime::{TerminalSession, cleanup_terminal_best_effort};

#[derive(Debug, Parser)]
#[command(version, about = "Snake on a wrap-around field")]
struct Cli {
    /// Seed for food placement, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file (filter with RUST_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("wrap-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_file.as_deref())?;
    install_panic_hook();

    let game = match cli.seed {
        Some(seed) => Game::new_with_seed(GRID, seed),
        None => Game::new(GRID),
    };

    let mut session = TerminalSession::enter()?;
    let mut input = KeyboardInput::new();
    let mut clock = TickClock::new(TICKS_PER_SECOND);

    Controller::new(game, &mut input, &mut session, &mut clock).run()
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = cleanup_terminal_best_effort();
        default_hook(panic_info);
    }));
}
