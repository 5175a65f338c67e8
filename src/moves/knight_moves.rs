use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_targets;

/// `(d_rank, d_file)` jumps in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub fn knight_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    step_targets(board, from, color, &KNIGHT_OFFSETS, out);
}
