//! FEN-to-Board parser.
//!
//! Reads the placement and side-to-move fields. Castling, en-passant and the
//! clocks are accepted for compatibility and ignored, since those rules are
//! not modelled.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> ChessResult<(Board, Color)> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let board = parse_board(board_part)?;

    let turn = match parts.next() {
        Some(side_part) => parse_side_to_move(side_part)?,
        None => Color::Light,
    };

    if parts.count() > 4 {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    Ok((board, turn))
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    let mut board = Board::empty();

    // FEN lists rank 8 first, which is grid rank 0.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessError::InvalidFen(format!("invalid piece character '{ch}'")))?;

            let position = Position::new(rank as u8, file as u8)
                .ok_or_else(|| ChessError::InvalidFen("board rank has too many files".to_owned()))?;
            board.set_piece(position, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(ChessError::InvalidFen(format!("rank {} does not sum to 8 files", 8 - rank)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessError::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}
