//! Command-line configuration for the console game.

use clap::Parser;

use crate::engines::engine_longest_capture::LongestCaptureEngine;

#[derive(Debug, Clone, Parser)]
#[command(name = "queen_race_checkers", version, about = "Queen race checkers against the computer")]
pub struct Cli {
    /// Seed for the computer's random tie-breaks; omit for a fresh game each run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set (logs go to stderr).
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "warn".to_owned(),
        }
    }
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            seed: cli.seed,
            log_level: cli.log_level,
        }
    }
}

impl GameConfig {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    /// Computer strategy seeded per this configuration.
    pub fn build_strategy(&self) -> LongestCaptureEngine {
        match self.seed {
            Some(seed) => LongestCaptureEngine::from_seed(seed),
            None => LongestCaptureEngine::from_entropy(),
        }
    }
}
