//! Tic-tac-toe rules engine with an exhaustive minimax opponent
//!
//! This crate provides:
//! - Immutable, validated game states and the moves between them
//! - Win, tie and legal-move detection
//! - A minimax search that picks optimal moves
//! - Random, minimax and console players behind a common `Player` port
//! - A game loop and a terminal frontend
//!
//! ```
//! use tic_tac_toe::logic::{GameState, Grid, Mark, find_best_move};
//!
//! let state = GameState::new(Grid::new("XX OO    ")?, Mark::Cross)?;
//! let best = find_best_move(&state)?.expect("game is still running");
//! assert_eq!(best.cell_index, 2);
//! assert_eq!(best.after_state.winner(), Some(Mark::Cross));
//! # Ok::<(), tic_tac_toe::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod logic;
pub mod ports;

pub use engine::TicTacToe;
pub use error::{Error, Result};
pub use logic::{GameOutcome, GameState, Grid, Mark, Move, find_best_move};
