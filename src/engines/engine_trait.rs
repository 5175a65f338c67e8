//! Engine abstraction layer used by the game session and the terminal front-end.
//!
//! Every engine plays Dark. Output carries the chosen move plus
//! human-readable diagnostic lines so callers can surface how it was picked.

use rand::RngCore;

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Chooses Dark's move. `best_move` is `None` only when Dark has no legal move.
    fn choose_move(&mut self, board: &Board, rng: &mut dyn RngCore) -> EngineOutput;
}
