//! Unicode board diagram for the terminal, rank 8 on top, labelled on all sides.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

const FILE_LABELS: &str = "  a b c d e f g h";
const EMPTY_CELL: char = '·';

pub fn render_board(board: &Board) -> String {
    let mut lines = Vec::with_capacity(10);
    lines.push(FILE_LABELS.to_owned());

    for rank in 0..8u8 {
        let label = char::from(b'8' - rank);
        let cells: Vec<String> = (0..8u8)
            .map(|file| {
                Position::new(rank, file)
                    .and_then(|pos| board.piece_at(pos))
                    .map_or(EMPTY_CELL, piece_to_unicode)
                    .to_string()
            })
            .collect();
        lines.push(format!("{label} {} {label}", cells.join(" ")));
    }

    lines.push(FILE_LABELS.to_owned());
    lines.join("\n")
}

/// Outlined glyphs for Light, filled glyphs for Dark.
pub fn piece_to_unicode(piece: Piece) -> char {
    let (light, dark) = match piece.kind {
        PieceKind::King => ('♔', '♚'),
        PieceKind::Queen => ('♕', '♛'),
        PieceKind::Rook => ('♖', '♜'),
        PieceKind::Bishop => ('♗', '♝'),
        PieceKind::Knight => ('♘', '♞'),
        PieceKind::Pawn => ('♙', '♟'),
    };
    match piece.color {
        Color::Light => light,
        Color::Dark => dark,
    }
}
