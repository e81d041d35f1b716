//! Console board renderer.
//!
//! Draws the grid as seen from White's side with coordinates on every edge.
//! Men are `w`/`b`, queens `W`/`B`, empty dark squares `.`.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{is_playable, BOARD_SIZE};
use crate::game_state::checkers_types::{Color, Piece};
use crate::game_state::game_state::Game;

const FILE_HEADER: &str = "    A   B   C   D   E   F   G   H";
const RULE: &str = "  +---+---+---+---+---+---+---+---+";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(FILE_HEADER);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let display_row = BOARD_SIZE - row;
        out.push_str(&format!("{display_row} |"));
        for col in 0..BOARD_SIZE {
            let cell = cell_char(board.get(row as u8, col as u8), row, col);
            out.push(' ');
            out.push(cell);
            out.push_str(" |");
        }
        out.push_str(&format!(" {display_row}\n"));
        out.push_str(RULE);
        out.push('\n');
    }

    out.push_str(FILE_HEADER);
    out.push('\n');
    out
}

pub fn render_status(game: &Game) -> String {
    match game.current_turn() {
        Color::White => "Turn: White (You)".to_owned(),
        Color::Black => "Turn: Black (Computer)".to_owned(),
    }
}

fn cell_char(piece: Option<Piece>, row: usize, col: usize) -> char {
    match piece {
        Some(p) => match (p.color(), p.is_queen()) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        },
        None if is_playable(row, col) => '.',
        None => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_status};
    use crate::game_state::board::Board;
    use crate::game_state::game_state::Game;

    #[test]
    fn start_position_rows_render() {
        let text = render_board(&Board::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "    A   B   C   D   E   F   G   H");
        assert_eq!(lines[3], "8 |   | b |   | b |   | b |   | b | 8");
        assert_eq!(lines[9], "5 | . |   | . |   | . |   | . |   | 5");
        assert_eq!(lines[17], "1 | w |   | w |   | w |   | w |   | 1");
    }

    #[test]
    fn queens_use_capitals() {
        let board = Board::from_layout("1B6/8/8/8/8/8/8/6W1").expect("layout should parse");
        let text = render_board(&board);
        assert!(text.contains("8 |   | B |"));
        assert!(text.contains("| W |   | 1"));
    }

    #[test]
    fn status_names_the_side() {
        let mut game = Game::new();
        assert_eq!(render_status(&game), "Turn: White (You)");
        game.flip_turn();
        assert_eq!(render_status(&game), "Turn: Black (Computer)");
    }
}
