use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::slide_targets;

/// Rook directions followed by bishop directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn queen_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    slide_targets(board, from, color, &QUEEN_DIRECTIONS, out);
}
