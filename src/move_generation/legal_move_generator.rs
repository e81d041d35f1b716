//! Legal move generation.
//!
//! Every piece, queen or not, steps and jumps forward only. Captures for all
//! pieces are listed before quiet moves for all pieces; within each group
//! pieces are visited row-major and directions left before right.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move, Piece};

/// Column deltas of the two forward diagonals, left first.
pub const DIAGONAL_COLUMNS: [i8; 2] = [-1, 1];

pub fn generate_legal_moves(board: &Board, player: Color) -> Vec<Move> {
    let mut captures = Vec::<Move>::new();
    let mut quiets = Vec::<Move>::new();

    for (row, col, piece) in board.pieces_of(player) {
        add_piece_captures(board, row, col, piece, &mut captures);
        add_piece_quiet_moves(board, row, col, piece, &mut quiets);
    }

    captures.extend(quiets);
    captures
}

/// Membership test against the generated set; no separate geometry check.
pub fn is_legal_move(board: &Board, mv: &Move, player: Color) -> bool {
    generate_legal_moves(board, player).contains(mv)
}

pub fn has_legal_moves(board: &Board, player: Color) -> bool {
    !generate_legal_moves(board, player).is_empty()
}

fn add_piece_captures(board: &Board, row: u8, col: u8, piece: Piece, captures: &mut Vec<Move>) {
    let forward = piece.color().forward();
    for d_col in DIAGONAL_COLUMNS {
        let Some((mid_row, mid_col)) = Board::offset(row, col, forward, d_col) else {
            continue;
        };
        let Some((land_row, land_col)) = Board::offset(row, col, 2 * forward, 2 * d_col) else {
            continue;
        };

        let jumps_enemy = board
            .get(mid_row, mid_col)
            .is_some_and(|mid| mid.color() != piece.color());
        if jumps_enemy && board.is_empty_at(land_row, land_col) {
            captures.push(Move::new(row, col, land_row, land_col));
        }
    }
}

fn add_piece_quiet_moves(board: &Board, row: u8, col: u8, piece: Piece, quiets: &mut Vec<Move>) {
    let forward = piece.color().forward();
    for d_col in DIAGONAL_COLUMNS {
        if let Some((to_row, to_col)) = Board::offset(row, col, forward, d_col) {
            if board.is_empty_at(to_row, to_col) {
                quiets.push(Move::new(row, col, to_row, to_col));
            }
        }
    }
}
