//! Referee binary: reads commands on stdin, answers on stdout, logs to stderr.
//!
//! `RUST_LOG` sets the log filter (default `warn`). Setting
//! `CHESS_REFEREE_LENIENT_CASTLING=1` stops rejecting castles whose transit
//! square is attacked.

use std::io;

use chess_referee::game_state::rules_config::RulesConfig;
use chess_referee::referee::referee_top::run_stdio_loop;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LENIENT_CASTLING_ENV: &str = "CHESS_REFEREE_LENIENT_CASTLING";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = rules_config_from_env();
    info!(?config, "referee starting");
    run_stdio_loop(config)
}

fn rules_config_from_env() -> RulesConfig {
    let lenient = std::env::var(LENIENT_CASTLING_ENV)
        .map(|value| {
            let lower = value.to_ascii_lowercase();
            matches!(lower.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(false);

    if lenient {
        RulesConfig::lenient_castling()
    } else {
        RulesConfig::default()
    }
}
