use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

/// `Move` as `<from><to>`, for example "e2e4". Promotion is implicit.
pub fn move_to_long_algebraic(mv: Move) -> String {
    format!("{}{}", position_to_algebraic(mv.from), position_to_algebraic(mv.to))
}

/// Parses `<from><to>`. A trailing promotion letter is accepted only as `q`,
/// since pawns always promote to queens.
pub fn long_algebraic_to_move(long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidMove(long_algebraic.to_owned()));
    }
    if text.len() == 5 && !text[4..].eq_ignore_ascii_case("q") {
        return Err(ChessError::InvalidMove(long_algebraic.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::game_state::chess_types::{Move, Position};

    #[test]
    fn parses_and_prints_moves() {
        let mv = long_algebraic_to_move("e2e4").unwrap();
        assert_eq!(
            mv,
            Move::new(Position::new(6, 4).unwrap(), Position::new(4, 4).unwrap())
        );
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
        assert!(long_algebraic_to_move("a7a8q").is_ok());
    }

    #[test]
    fn rejects_underpromotion_and_garbage() {
        assert!(long_algebraic_to_move("a7a8n").is_err());
        assert!(long_algebraic_to_move("e2").is_err());
        assert!(long_algebraic_to_move("e2e9").is_err());
    }
}
