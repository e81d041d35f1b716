//! Terminal-state detection for the queen race variant.
//!
//! Conditions are checked in a fixed priority order and the first match
//! decides the winner:
//! 1. an already finished game stays finished;
//! 2. a White piece on row 0 wins for White;
//! 3. a Black piece on the last row wins for Black;
//! 4. White without pieces or without moves loses;
//! 5. Black without pieces or without moves loses.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Color;
use crate::game_state::game_state::Game;
use crate::move_generation::legal_move_generator::has_legal_moves;

/// Updates `game` and returns true when the game is over. A running game is
/// left untouched.
pub fn check_game_over(board: &Board, game: &mut Game) -> bool {
    if game.is_finished() {
        return true;
    }

    match decide_winner(board) {
        Some(winner) => {
            debug!(?winner, "game over");
            game.finish(Some(winner));
            true
        }
        None => false,
    }
}

fn decide_winner(board: &Board) -> Option<Color> {
    if board.has_piece_on_row(Color::White.back_rank(), Color::White) {
        return Some(Color::White);
    }
    if board.has_piece_on_row(Color::Black.back_rank(), Color::Black) {
        return Some(Color::Black);
    }

    for side in [Color::White, Color::Black] {
        if board.count(side) == 0 || !has_legal_moves(board, side) {
            return Some(side.opposite());
        }
    }

    None
}
