use clap::Parser;
use tracing_subscriber::EnvFilter;

use grid_chess::game_state::chess_types::Difficulty;
use grid_chess::session::game_session::GameMode;
use grid_chess::terminal::terminal_top::{run_stdio_loop, TerminalConfig};

/// Play chess in the terminal against a friend or the computer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Opponent: `friend` for two players, `ai` for the computer as black.
    #[arg(long, default_value = "ai")]
    mode: GameMode,

    /// Computer strength: easy, medium or hard.
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Seed for the computer's random choices, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run_stdio_loop(TerminalConfig {
        mode: args.mode,
        difficulty: args.difficulty,
        seed: args.seed,
    })
}
