//! Target collection shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Single-step targets: each offset is kept unless it leaves the board or
/// lands on a piece of the mover's own color.
pub fn step_targets(
    board: &Board,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_rank, d_file) in offsets {
        let Some(to) = from.offset(d_rank, d_file) else {
            continue;
        };
        match board.piece_at(to) {
            Some(piece) if piece.color == color => {}
            _ => out.push(to),
        }
    }
}

/// Sliding targets: walks each direction until the edge, stopping before an
/// own piece and on (capturing) an enemy piece.
pub fn slide_targets(
    board: &Board,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &(d_rank, d_file) in directions {
        let mut cursor = from.offset(d_rank, d_file);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to.offset(d_rank, d_file);
        }
    }
}
