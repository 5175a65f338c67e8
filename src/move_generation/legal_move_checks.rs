use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::pseudo_legal::pseudo_legal_moves_into;

/// True when `color`'s king is attacked. A board without that king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True when any `attacker_color` piece has `square` among its pseudo-legal targets.
///
/// Pawns only reach a square diagonally when it is occupied, so this answers
/// "could be captured there" rather than plain control of an empty square.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let mut targets = Vec::with_capacity(28);
    for (from, _) in board.pieces_of(attacker_color) {
        targets.clear();
        pseudo_legal_moves_into(board, from, &mut targets);
        if targets.contains(&square) {
            return true;
        }
    }
    false
}
