//! Longest-capture strategy for the Black side.
//!
//! Capture chains are found with a bottom-up table over board rows: the
//! entry for `(row, col)` holds the longest run of forward jumps starting
//! there, built from the entries two rows further down. Empty cells get
//! entries too so chains can relay through the squares a jumping piece lands
//! on. Among Black pieces with the longest chain one is picked at random;
//! without any capture a single random quiet move is played.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::ComputerStrategy;
use crate::engines::random_choice::RandomChoice;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Color, Move};
use crate::move_generation::rules_engine::RulesEngine;

const COMPUTER_SIDE: Color = Color::Black;

pub struct LongestCaptureEngine<C: RandomChoice = StdRng> {
    chooser: C,
}

impl LongestCaptureEngine<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for LongestCaptureEngine<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<C: RandomChoice> LongestCaptureEngine<C> {
    pub fn new(chooser: C) -> Self {
        Self { chooser }
    }

    fn random_longest_chain(&mut self, board: &Board) -> Vec<Move> {
        let table = CaptureTable::build(board);

        let longest = board
            .pieces_of(COMPUTER_SIDE)
            .map(|(row, col, _)| table.chain(row, col).len())
            .max()
            .unwrap_or(0);
        if longest == 0 {
            return Vec::new();
        }

        let candidates: Vec<&Vec<Move>> = board
            .pieces_of(COMPUTER_SIDE)
            .map(|(row, col, _)| table.chain(row, col))
            .filter(|chain| chain.len() == longest)
            .collect();

        match self
            .chooser
            .choose_index(candidates.len())
            .and_then(|idx| candidates.get(idx))
        {
            Some(chain) => {
                debug!(
                    candidates = candidates.len(),
                    length = longest,
                    origin = ?(chain[0].from_row, chain[0].from_col),
                    "picked capture chain"
                );
                chain.to_vec()
            }
            None => Vec::new(),
        }
    }

    fn random_quiet_move(&mut self, board: &Board) -> Option<Move> {
        let quiet_moves = quiet_moves_for_black(board);
        let picked = self
            .chooser
            .choose_index(quiet_moves.len())
            .and_then(|idx| quiet_moves.get(idx).copied());
        debug!(options = quiet_moves.len(), ?picked, "quiet move fallback");
        picked
    }
}

impl<C: RandomChoice> ComputerStrategy for LongestCaptureEngine<C> {
    fn name(&self) -> &str {
        "Longest Capture"
    }

    fn choose_move_sequence(&mut self, board: &Board, _rules: &RulesEngine) -> Vec<Move> {
        let chain = self.random_longest_chain(board);
        if !chain.is_empty() {
            return chain;
        }
        self.random_quiet_move(board).into_iter().collect()
    }
}

/// Longest forward capture run per starting cell.
struct CaptureTable {
    chains: [[Vec<Move>; BOARD_SIZE]; BOARD_SIZE],
}

impl CaptureTable {
    fn build(board: &Board) -> Self {
        let mut table = Self {
            chains: Default::default(),
        };

        // Jumps from the last two rows would leave the board.
        for row in (0..=(BOARD_SIZE - 3) as u8).rev() {
            for col in 0..BOARD_SIZE as u8 {
                if board.has_color_at(row, col, COMPUTER_SIDE.opposite()) {
                    continue;
                }

                let left = capture_toward(board, row, col, -1);
                let right = capture_toward(board, row, col, 1);
                let first = match (left, right) {
                    (Some(left), Some(right)) => {
                        // Equal continuations go right.
                        if table.landing_len(&left) > table.landing_len(&right) {
                            left
                        } else {
                            right
                        }
                    }
                    (Some(only), None) | (None, Some(only)) => only,
                    (None, None) => continue,
                };

                let mut chain = Vec::with_capacity(1 + table.landing_len(&first));
                chain.push(first);
                chain.extend_from_slice(table.chain(first.to_row, first.to_col));
                table.chains[row as usize][col as usize] = chain;
            }
        }

        table
    }

    #[inline]
    fn chain(&self, row: u8, col: u8) -> &Vec<Move> {
        &self.chains[row as usize][col as usize]
    }

    #[inline]
    fn landing_len(&self, mv: &Move) -> usize {
        self.chain(mv.to_row, mv.to_col).len()
    }
}

/// Black jump from `(row, col)` toward `d_col`, over a non-Black piece onto
/// an empty square.
fn capture_toward(board: &Board, row: u8, col: u8, d_col: i8) -> Option<Move> {
    let forward = COMPUTER_SIDE.forward();
    let (mid_row, mid_col) = Board::offset(row, col, forward, d_col)?;
    let (land_row, land_col) = Board::offset(row, col, 2 * forward, 2 * d_col)?;

    let jumps_enemy = board
        .get(mid_row, mid_col)
        .is_some_and(|mid| mid.color() != COMPUTER_SIDE);
    (jumps_enemy && board.is_empty_at(land_row, land_col))
        .then_some(Move::new(row, col, land_row, land_col))
}

/// Single forward steps for Black, right before left. A step is only offered
/// when the square two rows ahead on the same diagonal exists and holds no
/// White piece.
fn quiet_moves_for_black(board: &Board) -> Vec<Move> {
    let forward = COMPUTER_SIDE.forward();
    let mut quiet_moves = Vec::new();

    for (row, col, _) in board.pieces_of(COMPUTER_SIDE) {
        for d_col in [1i8, -1] {
            let Some((to_row, to_col)) = Board::offset(row, col, forward, d_col) else {
                continue;
            };
            let Some((ahead_row, ahead_col)) = Board::offset(row, col, 2 * forward, 2 * d_col)
            else {
                continue;
            };

            if board.is_empty_at(to_row, to_col)
                && !board.has_color_at(ahead_row, ahead_col, COMPUTER_SIDE.opposite())
            {
                quiet_moves.push(Move::new(row, col, to_row, to_col));
            }
        }
    }

    quiet_moves
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::LongestCaptureEngine;
    use crate::engines::engine_trait::ComputerStrategy;
    use crate::engines::random_choice::FixedChoice;
    use crate::game_state::board::Board;
    use crate::game_state::checkers_types::{Color, Move};
    use crate::move_generation::rules_engine::RulesEngine;

    fn board(layout: &str) -> Board {
        Board::from_layout(layout).expect("test layout should parse")
    }

    fn pick(layout: &str, choice: usize) -> Vec<Move> {
        LongestCaptureEngine::new(FixedChoice(choice))
            .choose_move_sequence(&board(layout), &RulesEngine)
    }

    // Black on (0,1) can take three in a row; Black on (2,1) only two.
    const THREE_VS_TWO: &str = "1b6/2w5/1b6/2w1w3/8/2w3w1/8/8";

    #[test]
    fn longest_chain_wins_for_every_seed() {
        let b = board(THREE_VS_TWO);
        for seed in 0..32 {
            let mut engine = LongestCaptureEngine::new(StdRng::seed_from_u64(seed));
            let chain = engine.choose_move_sequence(&b, &RulesEngine);
            assert_eq!(
                chain,
                vec![
                    Move::new(0, 1, 2, 3),
                    Move::new(2, 3, 4, 5),
                    Move::new(4, 5, 6, 7),
                ],
                "seed {seed}"
            );
        }
    }

    #[test]
    fn reference_layout_sequence_lengths() {
        for (layout, expected) in [
            (crate::game_state::checkers_rules::STARTING_LAYOUT, 1),
            (THREE_VS_TWO, 3),
            ("1b1b1b2/b5b1/3b1b2/2w1b3/1w3w2/8/1w1w1w1w/w7", 2),
        ] {
            let chain = LongestCaptureEngine::from_seed(0x5EED)
                .choose_move_sequence(&board(layout), &RulesEngine);
            assert_eq!(chain.len(), expected, "sequence length for {layout}");
        }
    }

    #[test]
    fn chain_replays_through_the_rules_engine() {
        let rules = RulesEngine;
        let mut b = board(THREE_VS_TWO);
        let white_before = b.count(Color::White);

        let chain = LongestCaptureEngine::from_seed(3).choose_move_sequence(&b, &rules);
        for mv in &chain {
            assert!(rules.is_legal_move(&b, mv, Color::Black), "{mv} should be legal");
            rules.apply_move(&mut b, mv);
        }

        assert_eq!(b.count(Color::White), white_before - chain.len());
        assert_eq!(b.get(6, 7).map(|p| p.color()), Some(Color::Black));
    }

    #[test]
    fn equal_continuations_prefer_the_right_jump() {
        assert_eq!(
            pick("3b4/2w1w3/8/8/8/8/8/8", 0),
            vec![Move::new(0, 3, 2, 5)]
        );
    }

    #[test]
    fn strictly_longer_left_continuation_is_taken() {
        assert_eq!(
            pick("3b4/2w1w3/8/2w5/8/8/8/8", 0),
            vec![Move::new(0, 3, 2, 1), Move::new(2, 1, 4, 3)]
        );
    }

    #[test]
    fn ties_between_origins_use_the_injected_choice() {
        let layout = "1b3b2/2w3w1/8/8/8/8/8/8";
        assert_eq!(pick(layout, 0), vec![Move::new(0, 1, 2, 3)]);
        assert_eq!(pick(layout, 1), vec![Move::new(0, 5, 2, 7)]);
    }

    #[test]
    fn single_quiet_move_is_returned() {
        for choice in 0..3 {
            assert_eq!(
                pick("1b6/8/8/8/8/8/8/w7", choice),
                vec![Move::new(0, 1, 1, 2)]
            );
        }
    }

    #[test]
    fn quiet_step_toward_a_white_piece_two_ahead_is_skipped() {
        assert_eq!(
            pick("8/8/3b4/8/5w2/8/8/8", 1),
            vec![Move::new(2, 3, 3, 2)]
        );
    }

    #[test]
    fn quiet_moves_are_listed_right_first() {
        let layout = "8/8/3b4/8/8/8/8/w7";
        assert_eq!(pick(layout, 0), vec![Move::new(2, 3, 3, 4)]);
        assert_eq!(pick(layout, 1), vec![Move::new(2, 3, 3, 2)]);
    }

    #[test]
    fn stuck_black_returns_empty_sequence() {
        assert!(pick("8/8/8/8/b7/1w6/2w5/8", 0).is_empty());
    }

    #[test]
    fn black_one_step_from_the_last_row_is_not_offered_a_move() {
        assert!(pick("8/8/8/8/8/8/1b6/w7", 0).is_empty());
    }

    #[test]
    fn empty_cells_relay_but_never_originate() {
        // The only capture on the board starts from an empty square.
        let b = board("8/8/8/8/4w3/8/b7/w7");
        assert!(LongestCaptureEngine::new(FixedChoice(0))
            .choose_move_sequence(&b, &RulesEngine)
            .is_empty());
    }
}
