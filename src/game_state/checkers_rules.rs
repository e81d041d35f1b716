//! Canonical rule constants for the queen race variant.

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// Rows filled with men at the start of a game, per side.
pub const STARTING_ROWS: usize = 3;

/// Starting position in board-layout notation (row 0 first).
pub const STARTING_LAYOUT: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1";

/// Dark squares are the playable ones.
#[inline]
pub const fn is_playable(row: usize, col: usize) -> bool {
    (row + col) % 2 == 1
}
