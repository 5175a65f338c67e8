use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Full six-field FEN. Castling and en-passant are always `-`; the clocks
/// are not tracked and are written as `0 1`.
pub fn generate_fen(board: &Board, turn: Color) -> String {
    let side_to_move = match turn {
        Color::Light => "w",
        Color::Dark => "b",
    };
    format!("{} {} - - 0 1", generate_board_field(board), side_to_move)
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece = Position::new(rank, file).and_then(|pos| board.piece_at(pos));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

pub fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::Light => ch.to_ascii_uppercase(),
        Color::Dark => ch,
    }
}
