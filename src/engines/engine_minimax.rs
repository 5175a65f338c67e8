//! Difficulty-driven minimax engine.
//!
//! Thin front-end over [`choose_move`]: maps a [`Difficulty`] to search depth
//! and the easy-mode random branch, and reports the outcome as info lines.

use rand::RngCore;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::chess_types::Difficulty;
use crate::search::minimax::{choose_move, MoveChoice};

#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxEngine {
    difficulty: Difficulty,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax_engine"
    }

    fn choose_move(&mut self, board: &Board, rng: &mut dyn RngCore) -> EngineOutput {
        let choice = choose_move(board, self.difficulty, rng);

        let mut out = EngineOutput {
            best_move: choice.best_move(),
            info_lines: vec![format!(
                "{} difficulty {} depth {}",
                self.name(),
                self.difficulty,
                self.difficulty.search_depth()
            )],
        };

        match choice {
            MoveChoice::NoMoves => out.info_lines.push(format!("{} no legal moves", self.name())),
            MoveChoice::Random(_) => out.info_lines.push(format!("{} random move", self.name())),
            MoveChoice::Searched(result) => out.info_lines.push(format!(
                "{} score {} nodes {}",
                self.name(),
                result.best_score,
                result.nodes
            )),
        }

        out
    }
}
