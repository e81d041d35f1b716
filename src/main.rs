use std::io::{self, Write};
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use queen_race_checkers::config::GameConfig;
use queen_race_checkers::controller::game_controller::GameController;

fn main() -> ExitCode {
    let config = GameConfig::from_args();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut controller = GameController::new_game(Box::new(config.build_strategy()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let result = controller.run(&mut stdin.lock(), &mut stdout);
    if let Err(err) = stdout.flush() {
        error!(%err, "failed to flush stdout");
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game loop failed");
            ExitCode::FAILURE
        }
    }
}
