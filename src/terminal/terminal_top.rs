//! Line-oriented terminal front-end and command loop.
//!
//! Reads moves in long algebraic form plus a handful of commands, forwards
//! them to a [`GameSession`], lets the computer reply in AI mode, and prints
//! the board and status after every change.

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::game_state::chess_types::*;
use crate::session::game_session::{GameMode, GameSession};
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};
use crate::utils::fen_generator::generate_fen;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_board;

const HELP_TEXT: &str = "\
commands:
  <from><to>          play a move, for example e2e4
  moves <square>      list legal destinations, for example moves g1
  board               print the board
  fen                 print the position as FEN
  difficulty <level>  easy, medium or hard
  new <mode>          start over as friend or ai
  reset               start over with the same settings
  help                show this text
  quit                leave";

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Seeds the engine's random source; `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

pub fn run_stdio_loop(config: TerminalConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(config, stdin.lock(), &mut stdout)
}

/// Drives a session from `input` until `quit` or end of input.
pub fn run_loop(config: TerminalConfig, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    let mut terminal = TerminalState::new(config);
    terminal.print_position(out)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let should_quit = terminal.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct TerminalState {
    session: GameSession,
    rng: StdRng,
}

impl TerminalState {
    fn new(config: TerminalConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            session: GameSession::new(config.mode, config.difficulty),
            rng,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();
        debug!(command = cmd, "terminal command");

        match cmd {
            "quit" | "exit" => return Ok(true),
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => self.print_position(out)?,
            "fen" => writeln!(out, "{}", generate_fen(self.session.board(), self.session.turn()))?,
            "moves" => self.handle_moves(arg, out)?,
            "difficulty" => match arg.map(str::parse::<Difficulty>) {
                Some(Ok(difficulty)) => {
                    self.session.set_difficulty(difficulty);
                    writeln!(out, "difficulty set to {difficulty}")?;
                }
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "difficulty is {}", self.session.difficulty())?,
            },
            "new" => match arg.map(str::parse::<GameMode>) {
                Some(Ok(mode)) => {
                    let difficulty = self.session.difficulty();
                    self.session.new_game(mode, difficulty);
                    self.print_position(out)?;
                }
                Some(Err(err)) => writeln!(out, "error: {err}")?,
                None => writeln!(out, "error: new needs a mode (friend or ai)")?,
            },
            "reset" => {
                self.session.reset();
                self.print_position(out)?;
            }
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_moves(&mut self, arg: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let Some(square) = arg else {
            return writeln!(out, "error: moves needs a square");
        };
        match algebraic_to_position(square) {
            Ok(position) => {
                let targets: Vec<String> = self
                    .session
                    .legal_moves_from(position)
                    .into_iter()
                    .map(position_to_algebraic)
                    .collect();
                if targets.is_empty() {
                    writeln!(out, "no legal moves from {square}")
                } else {
                    writeln!(out, "{}", targets.join(" "))
                }
            }
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.session.is_computer_turn() {
            return writeln!(out, "error: waiting for the computer");
        }

        let mv = match long_algebraic_to_move(text) {
            Ok(mv) => mv,
            Err(err) => return writeln!(out, "error: {err} (type help for commands)"),
        };

        if let Err(err) = self.session.make_move(mv) {
            warn!(%err, "move rejected");
            return writeln!(out, "error: {err}");
        }
        self.print_position(out)?;

        if let Some(reply) = self.session.play_ai_turn(&mut self.rng) {
            writeln!(out, "computer plays {}", move_to_long_algebraic(reply))?;
            self.print_position(out)?;
        }

        Ok(())
    }

    fn print_position(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_board(self.session.board()))?;
        if let Some(mv) = self.session.last_move() {
            writeln!(out, "last move: {}", move_to_long_algebraic(mv))?;
        }

        match self.session.status() {
            GameStatus::Checkmate => {
                writeln!(out, "checkmate, {} wins", self.session.turn().opposite())
            }
            GameStatus::Stalemate => writeln!(out, "stalemate"),
            GameStatus::Playing => {
                if self.session.in_check().is_some() {
                    writeln!(out, "{} to move (in check)", self.session.turn())
                } else {
                    writeln!(out, "{} to move", self.session.turn())
                }
            }
        }
    }
}
