//! Node counting over the legal move tree.
//!
//! Mirrors the rules actually implemented here (queen-only promotion, no
//! castling or en-passant), so counts only match standard perft tables for
//! shallow depths from ordinary positions.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, turn: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(board, turn) {
        let next = apply_move(board, mv);
        if depth == 1 {
            total.merge(classify_leaf(board, &next, mv, turn));
        } else {
            total.merge(perft(&next, turn.opposite(), depth - 1));
        }
    }
    total
}

fn classify_leaf(prev: &Board, next: &Board, mv: Move, mover: Color) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if prev.piece_at(mv.to).is_some() {
        counts.captures = 1;
    }
    let promoted = matches!(
        (prev.piece_at(mv.from), next.piece_at(mv.to)),
        (Some(before), Some(after)) if before.kind == PieceKind::Pawn && after.kind != PieceKind::Pawn
    );
    if promoted {
        counts.promotions = 1;
    }
    if is_king_in_check(next, mover.opposite()) {
        counts.checks = 1;
        if !has_any_legal_move(next, mover.opposite()) {
            counts.checkmates = 1;
        }
    }
    counts
}
