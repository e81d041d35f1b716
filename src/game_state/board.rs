//! Fixed 8x8 grid of optional pieces.
//!
//! `Board` is plain data: cloning yields an independent deep copy suitable for
//! what-if evaluation. Coordinates are zero-based `(row, col)` with row 0 at
//! the top, which is White's target rank.

use crate::errors::CheckersResult;
use crate::game_state::checkers_rules::{is_playable, BOARD_SIZE, STARTING_ROWS};
use crate::game_state::checkers_types::{Color, Piece};
use crate::utils::board_layout::{generate_board_layout, parse_board_layout};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Board in the standard starting setup.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.setup_initial();
        board
    }

    #[inline]
    pub fn from_layout(layout: &str) -> CheckersResult<Self> {
        parse_board_layout(layout)
    }

    #[inline]
    pub fn to_layout(&self) -> String {
        generate_board_layout(self)
    }

    /// Resets to three rows of Black men on top and three rows of White men
    /// at the bottom, dark squares only.
    pub fn setup_initial(&mut self) {
        self.cells = Default::default();
        for row in 0..BOARD_SIZE {
            let color = if row < STARTING_ROWS {
                Color::Black
            } else if row >= BOARD_SIZE - STARTING_ROWS {
                Color::White
            } else {
                continue;
            };
            for col in 0..BOARD_SIZE {
                if is_playable(row, col) {
                    self.cells[row][col] = Some(Piece::new(color));
                }
            }
        }
    }

    /// Piece at `(row, col)`. Panics when the square is off the board.
    #[inline]
    pub fn get(&self, row: u8, col: u8) -> Option<Piece> {
        self.cells[row as usize][col as usize]
    }

    #[inline]
    pub fn set(&mut self, row: u8, col: u8, piece: Option<Piece>) {
        self.cells[row as usize][col as usize] = piece;
    }

    /// Removes and returns the piece at `(row, col)`.
    #[inline]
    pub fn take(&mut self, row: u8, col: u8) -> Option<Piece> {
        self.cells[row as usize][col as usize].take()
    }

    /// Promotes the piece at `(row, col)` if there is one.
    pub fn make_queen(&mut self, row: u8, col: u8) {
        if let Some(piece) = self.cells[row as usize][col as usize].as_mut() {
            piece.make_queen();
        }
    }

    #[inline]
    pub fn is_inside(row: i8, col: i8) -> bool {
        (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col)
    }

    /// Square reached from `(row, col)` by `(d_row, d_col)`, if it is on the board.
    #[inline]
    pub fn offset(row: u8, col: u8, d_row: i8, d_col: i8) -> Option<(u8, u8)> {
        let r = row as i8 + d_row;
        let c = col as i8 + d_col;
        Self::is_inside(r, c).then_some((r as u8, c as u8))
    }

    #[inline]
    pub fn is_empty_at(&self, row: u8, col: u8) -> bool {
        self.get(row, col).is_none()
    }

    #[inline]
    pub fn has_color_at(&self, row: u8, col: u8, color: Color) -> bool {
        self.get(row, col).is_some_and(|p| p.color() == color)
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, u8, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|p| (row as u8, col as u8, p)))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (u8, u8, Piece)> + '_ {
        self.pieces().filter(move |(_, _, p)| p.color() == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    pub fn has_piece_on_row(&self, row: u8, color: Color) -> bool {
        (0..BOARD_SIZE as u8).any(|col| self.has_color_at(row, col, color))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::checkers_rules::is_playable;
    use crate::game_state::checkers_types::{Color, Piece};

    #[test]
    fn initial_setup_has_twelve_per_side_on_dark_squares() {
        let board = Board::new_game();
        assert_eq!(board.count(Color::White), 12);
        assert_eq!(board.count(Color::Black), 12);
        assert!(board
            .pieces()
            .all(|(r, c, _)| is_playable(r as usize, c as usize)));
        assert!(board.pieces_of(Color::Black).all(|(r, _, _)| r < 3));
        assert!(board.pieces_of(Color::White).all(|(r, _, _)| r > 4));
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::new_game();
        let mut copy = original.clone();
        copy.set(5, 0, None);
        copy.make_queen(0, 1);
        assert_eq!(original.get(5, 0), Some(Piece::new(Color::White)));
        assert_eq!(original.get(0, 1), Some(Piece::new(Color::Black)));
        assert_eq!(copy.get(0, 1), Some(Piece::queen(Color::Black)));
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Board::offset(0, 0, 1, 1), Some((1, 1)));
        assert_eq!(Board::offset(0, 0, -1, 1), None);
        assert_eq!(Board::offset(7, 6, 0, 2), None);
        assert!(Board::is_inside(7, 7));
        assert!(!Board::is_inside(8, 0));
    }

    #[test]
    fn take_empties_the_cell() {
        let mut board = Board::new_game();
        assert_eq!(board.take(0, 1), Some(Piece::new(Color::Black)));
        assert!(board.is_empty_at(0, 1));
        assert_eq!(board.take(0, 1), None);
    }
}
