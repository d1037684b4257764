//! Computer player that picks uniformly among the legal moves.

use std::{thread, time::Duration};

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Result,
    logic::{GameState, Mark, Move},
    ports::Player,
};

/// Random policy player (baseline)
pub struct RandomComputerPlayer {
    mark: Mark,
    delay: Duration,
    rng: StdRng,
}

impl RandomComputerPlayer {
    /// Create a random player seeded from entropy, answering immediately
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            delay: Duration::ZERO,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random player with a deterministic seed
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

impl Player for RandomComputerPlayer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn get_move(&mut self, state: &GameState) -> Result<Option<Move>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        state.make_random_move(&mut self.rng)
    }
}
