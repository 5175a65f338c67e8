use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_targets;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn rook_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    slide_targets(board, from, color, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::rook_targets;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn rook_on_empty_board_has_fourteen_targets() {
        let d4 = Position::new(4, 3).unwrap();
        let board = Board::empty().with_piece(d4, Piece::new(PieceKind::Rook, Color::Dark));
        let mut out = Vec::new();
        rook_targets(&board, d4, Color::Dark, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let a1 = Position::new(7, 0).unwrap();
        let a4 = Position::new(4, 0).unwrap();
        let a5 = Position::new(3, 0).unwrap();
        let board = Board::empty()
            .with_piece(a1, Piece::new(PieceKind::Rook, Color::Light))
            .with_piece(a4, Piece::new(PieceKind::Pawn, Color::Dark));
        let mut out = Vec::new();
        rook_targets(&board, a1, Color::Light, &mut out);

        assert!(out.contains(&a4));
        assert!(!out.contains(&a5));
    }
}
