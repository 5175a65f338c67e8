//! Static evaluation used at search leaves.
//!
//! Scores are signed from Dark's side: positive when Dark is ahead in material.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Score of a forced mate, from the maximizing (Dark) side's view.
pub const MATE_SCORE: i32 = 10_000;

pub trait BoardScorer: Send + Sync {
    /// Positive favors Dark, negative favors Light.
    fn score(&self, board: &Board) -> i32;
}

/// Sum of piece values, added for Dark and subtracted for Light.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| match piece.color {
                Color::Dark => Self::piece_value(piece.kind),
                Color::Light => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

/// Material balance with the default scorer.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    MaterialScorer.score(board)
}

#[cfg(test)]
mod tests {
    use super::evaluate;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::new_game()), 0);
    }

    #[test]
    fn extra_dark_queen_is_positive() {
        let board = Board::new_game().with_piece(
            Position::new(4, 4).unwrap(),
            Piece::new(PieceKind::Queen, Color::Dark),
        );
        assert_eq!(evaluate(&board), 90);
    }

    #[test]
    fn missing_dark_rook_is_negative() {
        let mut board = Board::new_game();
        board.clear(Position::new(0, 0).unwrap());
        assert_eq!(evaluate(&board), -50);
    }
}
