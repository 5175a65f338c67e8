//! Square conversions for algebraic coordinates.
//!
//! `a8` is `Position { rank: 0, file: 0 }` and `h1` is `Position { rank: 7, file: 7 }`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    Position::new(b'8' - rank, file - b'a').ok_or_else(|| ChessError::InvalidSquare(square.to_owned()))
}

/// Convert a position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}
