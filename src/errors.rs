//! Errors for the fallible surfaces of the crate.
//!
//! Move generation, legality checks, and search never fail: an empty square
//! yields no moves and a side without moves yields no best move. Only text
//! parsing and session move submission report errors.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Square text outside `a1..h8`.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Move text that is not `<from><to>` long algebraic.
    #[error("invalid move text: {0}")]
    InvalidMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid difficulty: {0} (expected easy, medium or hard)")]
    InvalidDifficulty(String),

    #[error("invalid game mode: {0} (expected friend or ai)")]
    InvalidMode(String),

    /// The move is well formed but not legal in the current position.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("the piece on {square} does not belong to {turn}")]
    NotYourPiece { square: Position, turn: Color },

    #[error("the game is already over")]
    GameOver,
}

pub type ChessResult<T> = Result<T, ChessError>;
