//! Stateless rules service.
//!
//! `RulesEngine` is the single source of truth for legality, move
//! application, and terminal-state detection. It holds no state; the board
//! and game are borrowed from the driving loop for the duration of a call.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move};
use crate::game_state::game_state::Game;
use crate::move_generation::game_over::check_game_over;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::{generate_legal_moves, is_legal_move};

#[derive(Debug, Clone, Copy, Default)]
pub struct RulesEngine;

impl RulesEngine {
    #[inline]
    pub fn legal_moves(&self, board: &Board, player: Color) -> Vec<Move> {
        generate_legal_moves(board, player)
    }

    #[inline]
    pub fn is_legal_move(&self, board: &Board, mv: &Move, player: Color) -> bool {
        is_legal_move(board, mv, player)
    }

    #[inline]
    pub fn apply_move(&self, board: &mut Board, mv: &Move) {
        apply_move(board, mv);
    }

    #[inline]
    pub fn check_game_over(&self, board: &Board, game: &mut Game) -> bool {
        check_game_over(board, game)
    }
}
