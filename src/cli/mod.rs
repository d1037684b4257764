//! CLI infrastructure for the tic-tac-toe binary
//!
//! This module provides the command-line interface plus the console
//! implementations of the renderer and player ports.

pub mod console;
pub mod play;

pub use console::{ConsolePlayer, ConsoleRenderer, grid_to_index};
pub use play::PlayArgs;
