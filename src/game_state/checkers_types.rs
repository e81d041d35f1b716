//! Value types shared by the board, the rules engine, and the strategies.

use std::fmt;

use crate::game_state::checkers_rules::BOARD_SIZE;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::{Game, GameStatus};

/// Side to move. White is the human and moves toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step for this color.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row that ends the game when this color reaches it.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => (BOARD_SIZE - 1) as u8,
        }
    }
}

/// A checker occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    is_queen: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            is_queen: false,
        }
    }

    #[inline]
    pub const fn queen(color: Color) -> Self {
        Self {
            color,
            is_queen: true,
        }
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_queen(&self) -> bool {
        self.is_queen
    }

    /// Crowns the piece. Play never reaches this: a piece arriving on the
    /// back rank ends the game first.
    #[inline]
    pub fn make_queen(&mut self) {
        self.is_queen = true;
    }
}

/// A single step or jump, in zero-based grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from_row: u8,
    pub from_col: u8,
    pub to_row: u8,
    pub to_col: u8,
}

impl Move {
    #[inline]
    pub const fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    /// A capture is a two-square diagonal jump.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.from_row.abs_diff(self.to_row) == 2 && self.from_col.abs_diff(self.to_col) == 2
    }

    /// Square jumped over by a capture.
    #[inline]
    pub const fn midpoint(&self) -> (u8, u8) {
        (
            (self.from_row + self.to_row) / 2,
            (self.from_col + self.to_col) / 2,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) -> ({},{})",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}
