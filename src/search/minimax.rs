//! Depth-limited minimax with alpha-beta pruning.
//!
//! Dark is always the maximizing side and the side the computer plays. Every
//! node works on its own board copy, so sibling branches never share state and
//! identical inputs always produce identical scores.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, MATE_SCORE};

/// Bound wider than any reachable score.
pub const SCORE_INFINITY: i32 = 1_000_000;

/// Chance that easy difficulty plays a uniformly random move instead of searching.
pub const EASY_RANDOM_MOVE_PROBABILITY: f64 = 0.3;

/// The side the computer plays.
pub const COMPUTER_COLOR: Color = Color::Dark;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// How a move was picked by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    /// Dark had no legal move.
    NoMoves,
    /// Easy-mode random draw; nothing was scored.
    Random(Move),
    Searched(SearchResult),
}

impl MoveChoice {
    pub fn best_move(&self) -> Option<Move> {
        match self {
            MoveChoice::NoMoves => None,
            MoveChoice::Random(mv) => Some(*mv),
            MoveChoice::Searched(result) => result.best_move,
        }
    }
}

/// Score of `board` searched `depth` plies deep.
///
/// `maximizing` selects the side to move: Dark maximizes, Light minimizes.
/// At depth 0 the static score is returned without looking for mate. A side
/// with no legal moves scores `-MATE_SCORE` (Dark mated), `MATE_SCORE`
/// (Light mated) or 0 (stalemate). Children are built with [`apply_move`], so
/// a pawn reaching its last rank is scored as a queen.
pub fn minimax<S: BoardScorer + ?Sized>(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    scorer: &S,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    if depth == 0 {
        return scorer.score(board);
    }

    let color = if maximizing { Color::Dark } else { Color::Light };
    let moves = all_legal_moves(board, color);
    if moves.is_empty() {
        return terminal_score(board, color);
    }

    if maximizing {
        let mut value = -SCORE_INFINITY;
        for mv in moves {
            let child = minimax(
                &apply_move(board, mv),
                depth - 1,
                alpha,
                beta,
                false,
                scorer,
                stats,
            );
            value = value.max(child);
            alpha = alpha.max(child);
            if beta <= alpha {
                break;
            }
        }
        value
    } else {
        let mut value = SCORE_INFINITY;
        for mv in moves {
            let child = minimax(
                &apply_move(board, mv),
                depth - 1,
                alpha,
                beta,
                true,
                scorer,
                stats,
            );
            value = value.min(child);
            beta = beta.min(child);
            if beta <= alpha {
                break;
            }
        }
        value
    }
}

fn terminal_score(board: &Board, side_to_move: Color) -> i32 {
    if !is_king_in_check(board, side_to_move) {
        return 0;
    }
    match side_to_move {
        Color::Dark => -MATE_SCORE,
        Color::Light => MATE_SCORE,
    }
}

/// Scores every legal Dark move with a full window at `depth` plies beyond
/// the move itself and keeps the first strictly greatest.
pub fn search_best_move<S: BoardScorer + ?Sized>(
    board: &Board,
    depth: u8,
    scorer: &S,
) -> SearchResult {
    let moves = all_legal_moves(board, COMPUTER_COLOR);
    score_root_moves(board, &moves, depth, scorer)
}

fn score_root_moves<S: BoardScorer + ?Sized>(
    board: &Board,
    moves: &[Move],
    depth: u8,
    scorer: &S,
) -> SearchResult {
    let mut stats = SearchStats::default();

    let Some(&first) = moves.first() else {
        return SearchResult {
            best_move: None,
            best_score: terminal_score(board, COMPUTER_COLOR),
            nodes: 0,
        };
    };

    let mut best_move = first;
    let mut best_score = -SCORE_INFINITY;

    for &mv in moves {
        let score = minimax(
            &apply_move(board, mv),
            depth,
            -SCORE_INFINITY,
            SCORE_INFINITY,
            false,
            scorer,
            &mut stats,
        );
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }

    SearchResult {
        best_move: Some(best_move),
        best_score,
        nodes: stats.nodes,
    }
}

/// Picks Dark's move for `difficulty`, reporting how it was chosen.
///
/// Easy difficulty first draws from `rng`; with probability
/// [`EASY_RANDOM_MOVE_PROBABILITY`] it returns a uniformly random legal move.
/// Other difficulties never touch `rng`.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, difficulty: Difficulty, rng: &mut R) -> MoveChoice {
    let moves = all_legal_moves(board, COMPUTER_COLOR);
    if moves.is_empty() {
        debug!(%difficulty, "no legal moves for the computer");
        return MoveChoice::NoMoves;
    }

    if difficulty == Difficulty::Easy && rng.random_bool(EASY_RANDOM_MOVE_PROBABILITY) {
        if let Some(&mv) = moves.choose(rng) {
            debug!(%difficulty, ?mv, "random move");
            return MoveChoice::Random(mv);
        }
    }

    let result = score_root_moves(board, &moves, difficulty.search_depth(), &MaterialScorer);
    debug!(
        %difficulty,
        best_move = ?result.best_move,
        score = result.best_score,
        nodes = result.nodes,
        "search finished"
    );
    MoveChoice::Searched(result)
}

/// Dark's move for `difficulty`, or `None` when Dark is mated or stalemated.
pub fn best_move<R: Rng + ?Sized>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Option<Move> {
    choose_move(board, difficulty, rng).best_move()
}
