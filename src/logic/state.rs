//! Immutable game snapshots and the moves between them

use std::fmt;

use rand::{Rng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{
    board::{CELL_COUNT, Grid, Mark},
    lines::LineAnalyzer,
    validation::validate_game_state,
};

/// A grid together with the mark that opened the game.
///
/// Construction validates the combination, so every `GameState` in existence
/// is one that can actually arise in play. Whose turn it is and who won are
/// derived once in [`GameState::new`]; the value is `Copy` and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StateRecord", into = "StateRecord")]
pub struct GameState {
    grid: Grid,
    starting_mark: Mark,
    current_mark: Mark,
    winner: Option<Mark>,
    winning_line: Option<[usize; 3]>,
}

/// Serialized form of a state; the derived fields are rebuilt on load
#[derive(Serialize, Deserialize)]
struct StateRecord {
    grid: Grid,
    starting_mark: Mark,
}

impl TryFrom<StateRecord> for GameState {
    type Error = crate::Error;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        GameState::new(record.grid, record.starting_mark)
    }
}

impl From<GameState> for StateRecord {
    fn from(state: GameState) -> Self {
        StateRecord {
            grid: state.grid,
            starting_mark: state.starting_mark,
        }
    }
}

/// One ply: `mark` placed at `cell_index`, taking `before_state` to
/// `after_state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub mark: Mark,
    pub cell_index: usize,
    pub before_state: GameState,
    pub after_state: GameState,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Tie,
}

impl GameState {
    /// Build and validate a state.
    ///
    /// # Errors
    ///
    /// Returns an invalid-game-state error when the mark counts, the starting
    /// mark and the winner cannot all be true at once.
    pub fn new(grid: Grid, starting_mark: Mark) -> Result<Self, crate::Error> {
        let current_mark = if grid.x_count() == grid.o_count() {
            starting_mark
        } else {
            starting_mark.other()
        };
        let found = LineAnalyzer::find_winner(grid.cells());

        let state = GameState {
            grid,
            starting_mark,
            current_mark,
            winner: found.map(|(mark, _)| mark),
            winning_line: found.map(|(_, line)| line),
        };
        validate_game_state(&state)?;
        Ok(state)
    }

    /// Empty board with `starting_mark` to move
    pub fn start(starting_mark: Mark) -> Self {
        GameState {
            grid: Grid::empty(),
            starting_mark,
            current_mark: starting_mark,
            winner: None,
            winning_line: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// The mark that moves next
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Indices of the winning line in line order, or empty
    pub fn winning_cells(&self) -> &[usize] {
        match &self.winning_line {
            Some(line) => line,
            None => &[],
        }
    }

    pub fn game_not_started(&self) -> bool {
        self.grid.empty_count() == CELL_COUNT
    }

    pub fn tie(&self) -> bool {
        self.winner.is_none() && self.grid.empty_count() == 0
    }

    pub fn game_over(&self) -> bool {
        self.winner.is_some() || self.tie()
    }

    /// `None` while the game is still running
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner {
            Some(mark) => Some(GameOutcome::Win(mark)),
            None if self.tie() => Some(GameOutcome::Tie),
            None => None,
        }
    }

    /// Every legal move, in ascending cell order. Empty once the game is over.
    ///
    /// # Errors
    ///
    /// Only fails if an after-state breaks validation, which the turn
    /// structure rules out.
    pub fn possible_moves(&self) -> Result<Vec<Move>, crate::Error> {
        if self.game_over() {
            return Ok(Vec::new());
        }
        self.grid
            .empty_positions()
            .into_iter()
            .map(|index| self.move_to_empty(index))
            .collect()
    }

    /// Place the current mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-move error if `index` is off the board, the game is
    /// already over, or the cell is taken.
    pub fn make_move_to(&self, index: usize) -> Result<Move, crate::Error> {
        if index >= CELL_COUNT {
            return Err(crate::Error::InvalidPosition { position: index });
        }
        if self.game_over() {
            return Err(crate::Error::GameOver);
        }
        if !self.grid.is_empty_at(index) {
            return Err(crate::Error::CellOccupied { index });
        }
        self.move_to_empty(index)
    }

    /// Uniform choice among [`possible_moves`](Self::possible_moves)
    pub fn make_random_move<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<Move>, crate::Error> {
        Ok(self.possible_moves()?.choose(rng).copied())
    }

    /// Score of a finished game from `mark`'s point of view: 1 for a win,
    /// -1 for a loss, 0 for a tie.
    ///
    /// # Errors
    ///
    /// `UnknownScore` if the game is not over.
    pub fn evaluate_score(&self, mark: Mark) -> Result<i32, crate::Error> {
        match self.outcome() {
            Some(GameOutcome::Tie) => Ok(0),
            Some(GameOutcome::Win(winner)) if winner == mark => Ok(1),
            Some(GameOutcome::Win(_)) => Ok(-1),
            None => Err(crate::Error::UnknownScore {
                state: self.encode(),
            }),
        }
    }

    /// Grid characters followed by `_` and the starting mark
    pub fn encode(&self) -> String {
        format!("{}_{}", self.grid, self.starting_mark)
    }

    fn move_to_empty(&self, index: usize) -> Result<Move, crate::Error> {
        let after_state = GameState::new(
            self.grid.with_mark(index, self.current_mark),
            self.starting_mark,
        )?;
        Ok(Move {
            mark: self.current_mark,
            cell_index: index,
            before_state: *self,
            after_state,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::start(Mark::Cross)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.grid.cells().iter().enumerate() {
            let c = match cell.to_char() {
                ' ' => '.',
                other => other,
            };
            write!(f, "{c}")?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
