//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal targets, speculatively relocates the piece on a
//! copy of the board, and drops every candidate that leaves the mover's own
//! king attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::relocate_piece;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal::pseudo_legal_moves;

/// Legal destinations for the piece on `position`, in pseudo-legal order.
/// Empty for an empty square.
pub fn legal_moves(board: &Board, position: Position) -> Vec<Position> {
    let Some(piece) = board.piece_at(position) else {
        return Vec::new();
    };

    pseudo_legal_moves(board, position)
        .into_iter()
        .filter(|&to| {
            let next = relocate_piece(board, Move::new(position, to));
            !is_king_in_check(&next, piece.color)
        })
        .collect()
}

/// Every legal move for `color`, scanning squares rank-major then each
/// piece's own generation order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in board.pieces_of(color) {
        moves.extend(legal_moves(board, from).into_iter().map(|to| Move::new(from, to)));
    }
    moves
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_moves(board, from).is_empty())
}
