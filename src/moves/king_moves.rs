use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_targets;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

/// The king steps once in every queen direction. No castling.
pub fn king_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &QUEEN_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn king_on_the_edge_has_five_targets() {
        let e1 = Position::new(7, 4).unwrap();
        let board = Board::empty().with_piece(e1, Piece::new(PieceKind::King, Color::Light));
        let mut out = Vec::new();
        king_targets(&board, e1, Color::Light, &mut out);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn king_can_step_onto_an_enemy_piece() {
        let e1 = Position::new(7, 4).unwrap();
        let e2 = Position::new(6, 4).unwrap();
        let board = Board::empty()
            .with_piece(e1, Piece::new(PieceKind::King, Color::Light))
            .with_piece(e2, Piece::new(PieceKind::Rook, Color::Dark));
        let mut out = Vec::new();
        king_targets(&board, e1, Color::Light, &mut out);
        assert!(out.contains(&e2));
    }
}
