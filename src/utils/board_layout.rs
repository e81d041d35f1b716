//! Board-layout notation parser and generator.
//!
//! A layout lists the eight rows top to bottom (row 0 first) separated by
//! `/`. Digits skip that many empty cells; `w`/`b` are men and `W`/`B` are
//! queens. Example: the starting position is
//! `1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1`.

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Color, Piece};

pub fn parse_board_layout(layout: &str) -> CheckersResult<Board> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(CheckersError::InvalidLayout(format!(
            "expected {BOARD_SIZE} rows, found {}",
            rows.len()
        )));
    }

    let mut board = Board::new_empty();
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(CheckersError::InvalidLayout(format!(
                        "invalid empty-cell count '{ch}'"
                    )));
                }
                col += step;
                continue;
            }

            let piece = piece_from_layout_char(ch).ok_or_else(|| {
                CheckersError::InvalidLayout(format!("invalid piece character '{ch}'"))
            })?;
            if col >= BOARD_SIZE {
                return Err(CheckersError::InvalidLayout(format!(
                    "row {row} has too many cells"
                )));
            }
            board.set(row as u8, col as u8, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(CheckersError::InvalidLayout(format!(
                "row {row} does not sum to {BOARD_SIZE} cells"
            )));
        }
    }

    Ok(board)
}

pub fn generate_board_layout(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE as u8 {
        if row > 0 {
            out.push('/');
        }
        let mut empty_run = 0u8;
        for col in 0..BOARD_SIZE as u8 {
            match board.get(row, col) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_layout_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
    }

    out
}

fn piece_from_layout_char(ch: char) -> Option<Piece> {
    match ch {
        'w' => Some(Piece::new(Color::White)),
        'b' => Some(Piece::new(Color::Black)),
        'W' => Some(Piece::queen(Color::White)),
        'B' => Some(Piece::queen(Color::Black)),
        _ => None,
    }
}

fn piece_to_layout_char(piece: Piece) -> char {
    match (piece.color(), piece.is_queen()) {
        (Color::White, false) => 'w',
        (Color::Black, false) => 'b',
        (Color::White, true) => 'W',
        (Color::Black, true) => 'B',
    }
}
