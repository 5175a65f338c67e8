use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Pushes first (single, then double from the start rank), then captures
/// toward file+1 and file-1. No en-passant.
pub fn pawn_targets(board: &Board, from: Position, color: Color, out: &mut Vec<Position>) {
    let direction = color.pawn_direction();

    if let Some(one) = from.offset(direction, 0) {
        if board.is_empty_at(one) {
            out.push(one);
            if from.rank == color.pawn_start_rank() {
                if let Some(two) = from.offset(direction * 2, 0) {
                    if board.is_empty_at(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_file in [1, -1] {
        let Some(to) = from.offset(direction, d_file) else {
            continue;
        };
        if matches!(board.piece_at(to), Some(target) if target.color != color) {
            out.push(to);
        }
    }
}
