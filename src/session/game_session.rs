//! Interactive game controller.
//!
//! Owns the live board and everything a front-end needs around it: whose turn
//! it is, the derived status, the checked side, the last move, and the
//! click-to-select / click-to-move selection. Status is re-derived from
//! scratch after every applied move.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use tracing::{debug, info};

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::game_status;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::minimax::COMPUTER_COLOR;

/// Who plays Dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Two humans share the board.
    Friend,
    /// The computer plays Dark.
    #[default]
    Ai,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Friend => f.write_str("friend"),
            GameMode::Ai => f.write_str("ai"),
        }
    }
}

impl FromStr for GameMode {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friend" => Ok(GameMode::Friend),
            "ai" => Ok(GameMode::Ai),
            other => Err(ChessError::InvalidMode(other.to_owned())),
        }
    }
}

/// What a square click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Game over, or the computer is to move.
    Ignored,
    /// An own piece was selected; its legal destinations are cached.
    Selected(Position),
    Moved(Move),
    /// The click was neither an own piece nor a cached destination.
    Deselected,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Color,
    status: GameStatus,
    in_check: Option<Color>,
    last_move: Option<Move>,
    selected: Option<Position>,
    valid_moves: Vec<Position>,
    mode: GameMode,
    engine: MinimaxEngine,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self::from_position(Board::new_game(), Color::Light, mode, difficulty)
    }

    /// Starts from an arbitrary position. Status is derived immediately.
    pub fn from_position(board: Board, turn: Color, mode: GameMode, difficulty: Difficulty) -> Self {
        let mut session = Self {
            board,
            turn,
            status: GameStatus::Playing,
            in_check: None,
            last_move: None,
            selected: None,
            valid_moves: Vec::new(),
            mode,
            engine: MinimaxEngine::new(difficulty),
        };
        session.refresh_status();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The side to move when it is in check.
    pub fn in_check(&self) -> Option<Color> {
        self.in_check
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn valid_moves(&self) -> &[Position] {
        &self.valid_moves
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// True when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::Ai && self.turn == COMPUTER_COLOR && self.status == GameStatus::Playing
    }

    /// Back to the starting position, keeping mode and difficulty.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode, self.engine.difficulty());
    }

    pub fn new_game(&mut self, mode: GameMode, difficulty: Difficulty) {
        *self = Self::new(mode, difficulty);
    }

    /// Legal destinations from `position`, empty unless it holds a piece of
    /// the side to move.
    pub fn legal_moves_from(&self, position: Position) -> Vec<Position> {
        match self.board.piece_at(position) {
            Some(piece) if piece.color == self.turn => legal_moves(&self.board, position),
            _ => Vec::new(),
        }
    }

    pub fn click_square(&mut self, position: Position) -> ClickOutcome {
        if self.status != GameStatus::Playing || self.is_computer_turn() {
            return ClickOutcome::Ignored;
        }

        if matches!(self.board.piece_at(position), Some(piece) if piece.color == self.turn) {
            self.selected = Some(position);
            self.valid_moves = legal_moves(&self.board, position);
            return ClickOutcome::Selected(position);
        }

        let chosen = self
            .selected
            .filter(|_| self.valid_moves.contains(&position))
            .map(|from| Move::new(from, position));

        self.clear_selection();
        match chosen {
            Some(mv) => {
                self.commit(mv);
                ClickOutcome::Moved(mv)
            }
            None => ClickOutcome::Deselected,
        }
    }

    /// Applies `mv` for the side to move after checking it is legal.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        if self.status != GameStatus::Playing {
            return Err(ChessError::GameOver);
        }
        match self.board.piece_at(mv.from) {
            Some(piece) if piece.color == self.turn => {}
            Some(_) => {
                return Err(ChessError::NotYourPiece {
                    square: mv.from,
                    turn: self.turn,
                })
            }
            None => {
                return Err(ChessError::IllegalMove {
                    from: mv.from,
                    to: mv.to,
                })
            }
        }
        if !legal_moves(&self.board, mv.from).contains(&mv.to) {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        self.clear_selection();
        self.commit(mv);
        Ok(())
    }

    /// Lets the computer move when it is its turn in AI mode. Returns the
    /// applied move, or `None` when nothing was played.
    pub fn play_ai_turn(&mut self, rng: &mut dyn RngCore) -> Option<Move> {
        if !self.is_computer_turn() {
            return None;
        }

        let output = self.engine.choose_move(&self.board, rng);
        for line in &output.info_lines {
            debug!(target: "grid_chess::engine", "{line}");
        }

        let mv = output.best_move?;
        self.commit(mv);
        Some(mv)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
    }

    fn commit(&mut self, mv: Move) {
        self.board = apply_move(&self.board, mv);
        self.last_move = Some(mv);
        self.turn = self.turn.opposite();
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.in_check = is_king_in_check(&self.board, self.turn).then_some(self.turn);
        self.status = game_status(&self.board, self.turn);

        match self.status {
            GameStatus::Playing if self.in_check.is_some() => {
                info!(turn = %self.turn, "check")
            }
            GameStatus::Playing => {}
            GameStatus::Checkmate => info!(loser = %self.turn, "checkmate"),
            GameStatus::Stalemate => info!(turn = %self.turn, "stalemate"),
        }
    }
}
