//! Computer player backed by the exhaustive minimax search.

use std::{thread, time::Duration};

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    logic::{GameState, Mark, Move, find_best_move},
    ports::Player,
};

/// Optimal player.
///
/// On an empty board every opening scores the same and the search would
/// always answer cell 0, so the very first move of a game is random instead.
/// Every later move comes from [`find_best_move`].
pub struct MinimaxComputerPlayer {
    mark: Mark,
    delay: Duration,
    rng: StdRng,
}

impl MinimaxComputerPlayer {
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            delay: Duration::ZERO,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Seed the RNG used for the opening move
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(mark)
        }
    }

    /// Pause for `delay` before every move
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Player for MinimaxComputerPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        if state.game_not_started() {
            state.make_random_move(&mut self.rng)
        } else {
            find_best_move(state)
        }
    }
}
