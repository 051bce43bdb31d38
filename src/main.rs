//! Command-line Pig.
//!
//! ```text
//! pig --player1 computer --player2 human [--timed] [--seed N] [--verbose]
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use rust_pig::core::{computer_name, GameConfig, PigError, PlayerKind};
use rust_pig::engine::run;
use rust_pig::narration::ConsoleNarrator;
use rust_pig::policy::ConsoleInput;

#[derive(Parser, Debug)]
#[command(name = "pig")]
#[command(about = "The dice game Pig: first to 100 points wins")]
struct Args {
    /// Player 1 type, computer or human.
    #[arg(long, value_enum, ignore_case = true)]
    player1: PlayerType,

    /// Player 2 type, computer or human.
    #[arg(long, value_enum, ignore_case = true)]
    player2: PlayerType,

    /// Player with most points after one minute wins.
    #[arg(long)]
    timed: bool,

    /// Die seed for a reproducible game. Seeds from the OS if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlayerType {
    Computer,
    Human,
}

impl From<PlayerType> for PlayerKind {
    fn from(t: PlayerType) -> Self {
        match t {
            PlayerType::Computer => PlayerKind::Computer,
            PlayerType::Human => PlayerKind::Human,
        }
    }
}

fn build_config<R, W>(args: &Args, console: &mut ConsoleInput<R, W>) -> Result<GameConfig, PigError>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    let mut config = GameConfig::new().with_timed(args.timed);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    for (position, kind) in [(1, args.player1), (2, args.player2)] {
        let kind = PlayerKind::from(kind);
        let name = match kind {
            PlayerKind::Computer => computer_name(position),
            PlayerKind::Human => prompt_name(console, position)?,
        };
        config = config.with_player(name, kind);
    }

    Ok(config)
}

/// Ask until a non-blank name is given.
fn prompt_name<R, W>(console: &mut ConsoleInput<R, W>, position: usize) -> Result<String, PigError>
where
    R: std::io::BufRead,
    W: std::io::Write,
{
    loop {
        let line = console
            .prompt_line(&format!("Player {position}'s name? "))?
            .ok_or_else(|| PigError::InputClosed {
                player: format!("Player {position}"),
            })?;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    let mut console = ConsoleInput::stdio();
    let mut narrator = ConsoleNarrator::stdout();

    let result = build_config(&args, &mut console).and_then(|config| run(&config, &mut console, &mut narrator));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "game aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
