//! Crate root module declarations for the queen race checkers engine.
//!
//! This file exposes the board model, the rules engine, the computer
//! strategies, the console driving loop, and the text helpers so the binary,
//! benches, and tests can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod game_over;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod rules_engine;
}

pub mod engines {
    pub mod engine_longest_capture;
    pub mod engine_trait;
    pub mod random_choice;
}

pub mod controller {
    pub mod game_controller;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_layout;
    pub mod render_board;
}
