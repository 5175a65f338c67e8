//! Per-square pseudo-legal generation.
//!
//! Purely geometric: occupancy decides each target, own-king safety is not
//! considered here. The order of the returned squares is stable for a given
//! board and is what search tie-breaking relies on.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::queen_moves::queen_targets;
use crate::moves::rook_moves::rook_targets;

/// Pseudo-legal destinations for the piece on `position`; empty for an empty square.
pub fn pseudo_legal_moves(board: &Board, position: Position) -> Vec<Position> {
    let mut out = Vec::with_capacity(28);
    pseudo_legal_moves_into(board, position, &mut out);
    out
}

/// Appends the destinations to `out`, leaving existing entries untouched.
pub fn pseudo_legal_moves_into(board: &Board, position: Position, out: &mut Vec<Position>) {
    let Some(piece) = board.piece_at(position) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, position, piece.color, out),
        PieceKind::Knight => knight_targets(board, position, piece.color, out),
        PieceKind::Bishop => bishop_targets(board, position, piece.color, out),
        PieceKind::Rook => rook_targets(board, position, piece.color, out),
        PieceKind::Queen => queen_targets(board, position, piece.color, out),
        PieceKind::King => king_targets(board, position, piece.color, out),
    }
}

#[cfg(test)]
mod tests {
    use super::pseudo_legal_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn empty_square_has_no_moves() {
        let board = Board::new_game();
        assert!(pseudo_legal_moves(&board, Position::new(4, 4).unwrap()).is_empty());
    }

    #[test]
    fn generation_is_repeatable() {
        let board = Board::new_game();
        for (pos, _) in board.pieces() {
            assert_eq!(pseudo_legal_moves(&board, pos), pseudo_legal_moves(&board, pos));
        }
    }

    #[test]
    fn starting_back_rank_is_boxed_in_except_knights() {
        let board = Board::new_game();
        let knight = pseudo_legal_moves(&board, Position::new(7, 1).unwrap());
        assert_eq!(
            knight,
            vec![Position::new(5, 2).unwrap(), Position::new(5, 0).unwrap()]
        );
        assert!(pseudo_legal_moves(&board, Position::new(7, 0).unwrap()).is_empty());
        assert!(pseudo_legal_moves(&board, Position::new(7, 3).unwrap()).is_empty());
    }
}
