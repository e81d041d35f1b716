//! Computer strategy abstraction.
//!
//! The driving loop only sees this trait, so alternative move pickers can be
//! swapped in without touching the rules engine.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Move;
use crate::move_generation::rules_engine::RulesEngine;

pub trait ComputerStrategy {
    fn name(&self) -> &str;

    /// Full action for this turn, in application order. An empty sequence
    /// means the computer has nothing to play and loses.
    fn choose_move_sequence(&mut self, board: &Board, rules: &RulesEngine) -> Vec<Move>;
}
