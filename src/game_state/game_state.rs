//! Mutable turn bookkeeping, kept apart from the rules.
//!
//! `Game` is written only by the driving loop and by the rules engine's
//! game-over check; renderers read it through the accessors.

use crate::game_state::checkers_types::Color;

/// Coarse state machine view over [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Option<Color>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    current_turn: Color,
    finished: bool,
    winner: Option<Color>,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            // Human starts.
            current_turn: Color::White,
            finished: false,
            winner: None,
        }
    }
}

impl Game {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Hands the move to the other side.
    #[inline]
    pub fn flip_turn(&mut self) {
        self.current_turn = self.current_turn.opposite();
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Moves the game to its terminal state.
    pub fn finish(&mut self, winner: Option<Color>) {
        self.finished = true;
        self.winner = winner;
    }

    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished(self.winner)
        } else {
            GameStatus::InProgress
        }
    }
}
