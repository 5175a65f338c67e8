//! Uniform random-move engine.
//!
//! Baseline opponent for diagnostics and engine-versus-engine smoke tests.

use rand::prelude::IndexedRandom;
use rand::RngCore;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::minimax::COMPUTER_COLOR;

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "random_engine"
    }

    fn choose_move(&mut self, board: &Board, rng: &mut dyn RngCore) -> EngineOutput {
        let legal_moves = all_legal_moves(board, COMPUTER_COLOR);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("{} legal_moves {}", self.name(), legal_moves.len()));

        out.best_move = legal_moves.as_slice().choose(rng).copied();
        out
    }
}
