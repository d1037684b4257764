//! Application layer: game configuration and player wiring.
//!
//! ```text
//! GameConfig + PlayerKind ──> App ──> Box<dyn Player> ──> TicTacToe
//! ```
//!
//! # Usage
//!
//! ```
//! use tic_tac_toe::{
//!     app::{App, GameConfig, PlayerKind},
//!     logic::Mark,
//! };
//!
//! let app = App::new(GameConfig::new().with_seed(1));
//! let player = app.create_player(PlayerKind::Random, Mark::Naught);
//! assert_eq!(player.mark(), Mark::Naught);
//! ```

pub mod config;
pub mod container;

pub use config::{GameConfig, PlayerKind};
pub use container::App;
