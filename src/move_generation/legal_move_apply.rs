use crate::game_state::board::Board;
use crate::game_state::chess_rules::PROMOTION_PIECE;
use crate::game_state::chess_types::*;

/// Copy-and-move: the returned board has the piece moved, any captured piece
/// replaced, and a pawn on its promotion rank turned into a queen.
///
/// An empty source square yields an unchanged copy.
pub fn apply_move(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    let Some(mut piece) = next.take_piece(mv.from) else {
        return next;
    };

    if piece.kind == PieceKind::Pawn && mv.to.rank == piece.color.promotion_rank() {
        piece.kind = PROMOTION_PIECE;
    }

    next.set_piece(mv.to, Some(piece));
    next
}

/// Relocation without promotion. Used by the legality filter, where only the
/// mover's king safety matters.
pub fn relocate_piece(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    if let Some(piece) = next.take_piece(mv.from) {
        next.set_piece(mv.to, Some(piece));
    }
    next
}
