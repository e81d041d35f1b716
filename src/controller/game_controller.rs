//! Console game loop.
//!
//! Alternates the human (White) and the computer strategy (Black) until the
//! rules engine reports a finished game or the human quits. Input and output
//! are generic streams so the loop can be driven from tests.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::engines::engine_trait::ComputerStrategy;
use crate::errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Color, Move};
use crate::game_state::game_state::Game;
use crate::move_generation::rules_engine::RulesEngine;
use crate::utils::algebraic::{format_sequence, parse_player_input, PlayerInput};
use crate::utils::render_board::{render_board, render_status};

const MOVE_PROMPT: &str = "Enter your move (e.g., A3->B4), or 'q' to quit: ";

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameExit {
    /// Terminal position reached.
    Finished(Option<Color>),
    /// Human quit on their turn; the game itself is left unfinished.
    Quit,
}

enum TurnOutcome {
    Played,
    Quit,
}

pub struct GameController {
    board: Board,
    game: Game,
    rules: RulesEngine,
    strategy: Box<dyn ComputerStrategy>,
}

impl GameController {
    pub fn new(board: Board, game: Game, strategy: Box<dyn ComputerStrategy>) -> Self {
        Self {
            board,
            game,
            rules: RulesEngine,
            strategy,
        }
    }

    /// Starting position, White to move.
    pub fn new_game(strategy: Box<dyn ComputerStrategy>) -> Self {
        Self::new(Board::new_game(), Game::new(), strategy)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> CheckersResult<GameExit> {
        info!(strategy = self.strategy.name(), "game started");
        writeln!(out, "Welcome to Checkers (Queen race variant)!")?;
        writeln!(
            out,
            "First piece to reach the opponent's back rank wins immediately."
        )?;

        while !self.game.is_finished() {
            write!(out, "{}", render_board(&self.board))?;
            writeln!(out, "{}", render_status(&self.game))?;

            let outcome = match self.game.current_turn() {
                Color::White => self.handle_human_turn(input, out)?,
                Color::Black => self.handle_computer_turn(out)?,
            };
            if let TurnOutcome::Quit = outcome {
                info!("human quit");
                return Ok(GameExit::Quit);
            }

            if self.rules.check_game_over(&self.board, &mut self.game) {
                write!(out, "{}", render_board(&self.board))?;
                self.announce_winner(out)?;
                break;
            }
            self.game.flip_turn();
        }

        info!(winner = ?self.game.winner(), "game finished");
        Ok(GameExit::Finished(self.game.winner()))
    }

    fn handle_human_turn(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> CheckersResult<TurnOutcome> {
        if self.rules.legal_moves(&self.board, Color::White).is_empty() {
            self.game.finish(Some(Color::Black));
            return Ok(TurnOutcome::Played);
        }

        let mut line = String::new();
        loop {
            write!(out, "{MOVE_PROMPT}")?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out, "Goodbye!")?;
                return Ok(TurnOutcome::Quit);
            }

            let mv = match parse_player_input(&line) {
                Ok(PlayerInput::Quit) => {
                    writeln!(out, "Goodbye!")?;
                    return Ok(TurnOutcome::Quit);
                }
                Ok(PlayerInput::Move(mv)) => mv,
                Err(err) => {
                    debug!(%err, "rejected input");
                    writeln!(out, "Invalid input. Use format like A3->B4.")?;
                    continue;
                }
            };

            if self.rules.is_legal_move(&self.board, &mv, Color::White) {
                debug!(%mv, "human move");
                self.rules.apply_move(&mut self.board, &mv);
                return Ok(TurnOutcome::Played);
            }
            writeln!(out, "Illegal move. Try again.")?;
        }
    }

    fn handle_computer_turn(&mut self, out: &mut impl Write) -> CheckersResult<TurnOutcome> {
        let sequence: Vec<Move> = self
            .strategy
            .choose_move_sequence(&self.board, &self.rules);

        if sequence.is_empty() {
            debug!("computer has no move");
            self.game.finish(Some(Color::White));
            return Ok(TurnOutcome::Played);
        }

        writeln!(out, "Computer plays: {}", format_sequence(&sequence)?)?;
        for mv in &sequence {
            self.rules.apply_move(&mut self.board, mv);
        }
        Ok(TurnOutcome::Played)
    }

    fn announce_winner(&self, out: &mut impl Write) -> CheckersResult<()> {
        match self.game.winner() {
            Some(Color::White) => writeln!(out, "White wins by reaching the back rank! (You)")?,
            Some(Color::Black) => {
                writeln!(out, "Black wins by reaching the back rank! (Computer)")?
            }
            None => writeln!(out, "Game over.")?,
        }
        Ok(())
    }
}
