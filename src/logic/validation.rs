//! Consistency checks run when grids, game states and games are built

use super::{
    board::{CELL_COUNT, Cell, Grid, Mark},
    state::GameState,
};
use crate::ports::Player;

/// Check that `cells` has exactly 9 characters, each `X`, `O` or space.
pub fn validate_grid(cells: &str) -> Result<(), crate::Error> {
    let got = cells.chars().count();
    if got != CELL_COUNT {
        return Err(crate::Error::InvalidGridLength {
            expected: CELL_COUNT,
            got,
        });
    }

    if let Some((position, character)) = cells
        .chars()
        .enumerate()
        .find(|&(_, c)| Cell::from_char(c).is_none())
    {
        return Err(crate::Error::InvalidCellCharacter {
            character,
            position,
        });
    }

    Ok(())
}

/// Run every semantic check on a freshly built state
pub fn validate_game_state(state: &GameState) -> Result<(), crate::Error> {
    validate_number_of_marks(state.grid())?;
    validate_starting_mark(state.grid(), state.starting_mark())?;
    validate_winner(state.grid(), state.starting_mark(), state.winner())
}

/// No player may be more than one move ahead.
pub fn validate_number_of_marks(grid: &Grid) -> Result<(), crate::Error> {
    if grid.x_count().abs_diff(grid.o_count()) > 1 {
        return Err(crate::Error::WrongNumberOfMarks {
            x_count: grid.x_count(),
            o_count: grid.o_count(),
        });
    }
    Ok(())
}

/// Whoever has more marks on the grid must have started.
pub fn validate_starting_mark(grid: &Grid, starting_mark: Mark) -> Result<(), crate::Error> {
    let leader = if grid.x_count() > grid.o_count() {
        Some(Mark::Cross)
    } else if grid.o_count() > grid.x_count() {
        Some(Mark::Naught)
    } else {
        None
    };

    match leader {
        Some(mark) if mark != starting_mark => Err(crate::Error::WrongStartingMark {
            starting_mark,
            x_count: grid.x_count(),
            o_count: grid.o_count(),
        }),
        _ => Ok(()),
    }
}

/// The winner made the last move: one mark ahead if they started, level
/// with the opponent otherwise.
pub fn validate_winner(
    grid: &Grid,
    starting_mark: Mark,
    winner: Option<Mark>,
) -> Result<(), crate::Error> {
    let Some(winner) = winner else {
        return Ok(());
    };

    let own = grid.count(winner);
    let opponent = grid.count(winner.other());
    let consistent = if winner == starting_mark {
        own > opponent
    } else {
        own == opponent
    };

    if consistent {
        Ok(())
    } else {
        Err(crate::Error::WrongNumberOfWinnerMarks {
            winner,
            starting_mark,
            x_count: grid.x_count(),
            o_count: grid.o_count(),
        })
    }
}

/// Two players sharing a mark could never take turns.
pub fn validate_players(player1: &dyn Player, player2: &dyn Player) -> Result<(), crate::Error> {
    if player1.mark() == player2.mark() {
        return Err(crate::Error::DuplicatePlayerMarks {
            mark: player1.mark(),
        });
    }
    Ok(())
}
