//! Tic-tac-toe on the terminal
//!
//! Human, random and minimax players in any combination:
//!
//! ```text
//! tic-tac-toe -X human -O minimax --starting O
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=tic_tac_toe=debug` to watch the search
//! score each candidate move.

use anyhow::Result;
use clap::Parser;
use tic_tac_toe::cli::{PlayArgs, play};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    play::execute(PlayArgs::parse())
}
