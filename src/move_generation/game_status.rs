use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

/// Status for the side to move, recomputed from scratch.
pub fn game_status(board: &Board, turn: Color) -> GameStatus {
    if has_any_legal_move(board, turn) {
        GameStatus::Playing
    } else if is_king_in_check(board, turn) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::game_status;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_is_playing() {
        assert_eq!(game_status(&Board::new_game(), Color::Light), GameStatus::Playing);
    }

    #[test]
    fn back_rank_mate_is_detected() {
        let board = Board::empty()
            .with_piece(
                Position::new(0, 6).unwrap(),
                Piece::new(PieceKind::King, Color::Dark),
            )
            .with_piece(
                Position::new(1, 5).unwrap(),
                Piece::new(PieceKind::Pawn, Color::Dark),
            )
            .with_piece(
                Position::new(1, 6).unwrap(),
                Piece::new(PieceKind::Pawn, Color::Dark),
            )
            .with_piece(
                Position::new(1, 7).unwrap(),
                Piece::new(PieceKind::Pawn, Color::Dark),
            )
            .with_piece(
                Position::new(0, 0).unwrap(),
                Piece::new(PieceKind::Rook, Color::Light),
            )
            .with_piece(
                Position::new(7, 4).unwrap(),
                Piece::new(PieceKind::King, Color::Light),
            );
        assert_eq!(game_status(&board, Color::Dark), GameStatus::Checkmate);
        assert_eq!(game_status(&board, Color::Light), GameStatus::Playing);
    }
}
