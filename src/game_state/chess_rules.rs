//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting placement and the back-rank piece
//! order used to build it.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Back-rank order from the a-file to the h-file, identical for both colors.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece a pawn becomes on reaching its promotion rank. No underpromotion.
pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;
