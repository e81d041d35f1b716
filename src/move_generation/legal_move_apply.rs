use crate::game_state::board::Board;
use crate::game_state::checkers_types::Move;

/// Relocates the piece on `from` to `to` and removes a jumped piece.
///
/// No legality check is made. Pieces are never crowned: reaching the back
/// rank ends the game instead.
pub fn apply_move(board: &mut Board, mv: &Move) {
    let moving = board.take(mv.from_row, mv.from_col);
    board.set(mv.to_row, mv.to_col, moving);

    if mv.is_capture() {
        let (mid_row, mid_col) = mv.midpoint();
        board.set(mid_row, mid_col, None);
    }
}
