//! Fixed 8x8 mailbox board.
//!
//! `Board` is a plain `Copy` grid of optional pieces with no move history or
//! side-to-move. Speculative moves always produce a fresh copy, so snapshots
//! handed out earlier stay valid.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting setup. Dark occupies ranks 0 and 1.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.cells[0][file as usize] = Some(Piece::new(*kind, Color::Dark));
            board.cells[1][file as usize] = Some(Piece::new(PieceKind::Pawn, Color::Dark));
            board.cells[6][file as usize] = Some(Piece::new(PieceKind::Pawn, Color::Light));
            board.cells[7][file as usize] = Some(Piece::new(*kind, Color::Light));
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.cells[position.rank as usize][position.file as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    #[inline]
    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) {
        self.cells[position.rank as usize][position.file as usize] = piece;
    }

    #[inline]
    pub fn clear(&mut self, position: Position) {
        self.set_piece(position, None);
    }

    /// Removes and returns the piece on `position`.
    #[inline]
    pub fn take_piece(&mut self, position: Position) -> Option<Piece> {
        self.cells[position.rank as usize][position.file as usize].take()
    }

    /// Builder-style placement, handy for constructing test positions.
    pub fn with_piece(mut self, position: Position, piece: Piece) -> Self {
        self.set_piece(position, Some(piece));
        self
    }

    /// Occupied squares in rank-major, file-minor order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// First king of `color` in scan order, if any.
    pub fn king_square(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }
}
