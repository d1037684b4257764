//! Adapters implementing domain ports.
//!
//! Computer opponents implementing [`Player`](crate::ports::Player). The
//! console-backed human player lives with the rest of the terminal code in
//! [`crate::cli`].

pub mod minimax_player;
pub mod random_player;

pub use minimax_player::MinimaxComputerPlayer;
pub use random_player::RandomComputerPlayer;
