//! Tic-tac-toe rules: grid, game states, moves and the minimax search

pub mod board;
pub mod lines;
pub mod minimax;
pub mod state;
pub mod validation;

pub use board::{CELL_COUNT, Cell, Grid, Mark};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{find_best_move, minimax};
pub use state::{GameOutcome, GameState, Move};
pub use validation::{
    validate_game_state, validate_grid, validate_number_of_marks, validate_players,
    validate_starting_mark, validate_winner,
};
