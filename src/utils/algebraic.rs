//! Square and move conversions for the console notation.
//!
//! Squares are a column letter `A`-`H` followed by a row number `1`-`8` as
//! seen from White's side, so row 8 is internal row 0 and row 1 is internal
//! row 7. Moves are written `A3->B4`.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::Move;

/// A line of human input after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    Move(Move),
    Quit,
}

/// Convert a square like `c3` to `(row, col)`. Case-insensitive.
pub fn algebraic_to_square(square: &str) -> CheckersResult<(u8, u8)> {
    let upper = square.trim().to_ascii_uppercase();
    let mut chars = upper.chars();

    let file = chars
        .next()
        .ok_or_else(|| CheckersError::InvalidSquare(square.to_owned()))?;
    if !('A'..='H').contains(&file) {
        return Err(CheckersError::InvalidSquare(square.to_owned()));
    }

    let rank = chars
        .as_str()
        .parse::<u8>()
        .map_err(|_| CheckersError::InvalidSquare(square.to_owned()))?;
    if !(1..=BOARD_SIZE as u8).contains(&rank) {
        return Err(CheckersError::InvalidSquare(square.to_owned()));
    }

    let col = file as u8 - b'A';
    let row = BOARD_SIZE as u8 - rank;
    Ok((row, col))
}

/// Convert `(row, col)` to a square like `C3`.
pub fn square_to_algebraic(row: u8, col: u8) -> CheckersResult<String> {
    if row as usize >= BOARD_SIZE || col as usize >= BOARD_SIZE {
        return Err(CheckersError::InvalidSquare(format!("({row},{col})")));
    }
    let file_char = char::from(b'A' + col);
    Ok(format!("{file_char}{}", BOARD_SIZE as u8 - row))
}

pub fn algebraic_to_move(text: &str) -> CheckersResult<Move> {
    let (from, to) = text
        .trim()
        .split_once("->")
        .ok_or_else(|| CheckersError::InvalidMoveText(text.to_owned()))?;
    if to.contains("->") {
        return Err(CheckersError::InvalidMoveText(text.to_owned()));
    }

    let invalid = |_| CheckersError::InvalidMoveText(text.to_owned());
    let (from_row, from_col) = algebraic_to_square(from).map_err(invalid)?;
    let (to_row, to_col) = algebraic_to_square(to).map_err(invalid)?;
    Ok(Move::new(from_row, from_col, to_row, to_col))
}

pub fn move_to_algebraic(mv: &Move) -> CheckersResult<String> {
    Ok(format!(
        "{}->{}",
        square_to_algebraic(mv.from_row, mv.from_col)?,
        square_to_algebraic(mv.to_row, mv.to_col)?
    ))
}

/// `q` (any case) quits; anything else must be a move.
pub fn parse_player_input(line: &str) -> CheckersResult<PlayerInput> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(PlayerInput::Quit);
    }
    algebraic_to_move(trimmed).map(PlayerInput::Move)
}

/// Comma-separated notation for a sequence of moves.
pub fn format_sequence(moves: &[Move]) -> CheckersResult<String> {
    let parts = moves
        .iter()
        .map(move_to_algebraic)
        .collect::<CheckersResult<Vec<_>>>()?;
    Ok(parts.join(", "))
}
