//! Configuration types for setting up a game.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::logic::Mark;

/// Which kind of player controls a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed in at the console
    Human,
    /// Uniformly random legal moves
    Random,
    /// Exhaustive minimax search
    Minimax,
}

impl PlayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Minimax => "minimax",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            "minimax" => Ok(PlayerKind::Minimax),
            _ => Err(crate::Error::ParsePlayerKind {
                input: s.to_string(),
                expected: "human, random, minimax".to_string(),
            }),
        }
    }
}

/// Settings shared by everything taking part in a game.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use tic_tac_toe::{app::GameConfig, logic::Mark};
///
/// let config = GameConfig::new()
///     .with_starting_mark(Mark::Naught)
///     .with_delay(Duration::from_millis(250))
///     .with_seed(42);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark that opens the game
    pub starting_mark: Mark,
    /// Pause before each computer move
    pub delay: Duration,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl GameConfig {
    /// X starts, no delay, non-deterministic computer players
    pub fn new() -> Self {
        Self {
            starting_mark: Mark::Cross,
            delay: Duration::ZERO,
            seed: None,
        }
    }

    /// Set the mark that moves first.
    pub fn with_starting_mark(mut self, mark: Mark) -> Self {
        self.starting_mark = mark;
        self
    }

    /// Set the computer players' thinking delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
