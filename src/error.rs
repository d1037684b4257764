//! Error types for the tic-tac-toe crate

use thiserror::Error;

use crate::logic::Mark;

/// Main error type for the tic-tac-toe crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid must contain {expected} cells of: X, O, or space (got {got})")]
    InvalidGridLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position} (expected X, O, or space)")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("wrong number of Xs and Os: X={x_count}, O={o_count}")]
    WrongNumberOfMarks { x_count: usize, o_count: usize },

    #[error("wrong starting mark {starting_mark} for X={x_count}, O={o_count}")]
    WrongStartingMark {
        starting_mark: Mark,
        x_count: usize,
        o_count: usize,
    },

    #[error(
        "wrong number of {winner}s for a {winner} win when {starting_mark} started: X={x_count}, O={o_count}"
    )]
    WrongNumberOfWinnerMarks {
        winner: Mark,
        starting_mark: Mark,
        x_count: usize,
        o_count: usize,
    },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("cell {index} is not empty")]
    CellOccupied { index: usize },

    #[error("game already over")]
    GameOver,

    #[error("it's the other player's turn ({mark} cannot move now)")]
    NotPlayersTurn { mark: Mark },

    #[error("no more possible moves")]
    NoPossibleMoves,

    #[error("players must use different marks (both use {mark})")]
    DuplicatePlayerMarks { mark: Mark },

    #[error("unknown score: state '{state}' is not terminal")]
    UnknownScore { state: String },

    #[error("invalid mark '{input}' (expected 'X' or 'O')")]
    ParseMark { input: String },

    #[error("invalid player kind '{input}'. Expected one of: {expected}")]
    ParsePlayerKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Malformed grid shape or alphabet
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidGridLength { .. } | Error::InvalidCellCharacter { .. }
        )
    }

    /// Semantically impossible mark or winner counts.
    ///
    /// These only come out of `GameState` construction and indicate a bug in
    /// whatever produced the grid.
    pub fn is_invalid_game_state(&self) -> bool {
        matches!(
            self,
            Error::WrongNumberOfMarks { .. }
                | Error::WrongStartingMark { .. }
                | Error::WrongNumberOfWinnerMarks { .. }
        )
    }

    /// Illegal move attempt. The only kind a game loop may recover from.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            Error::InvalidPosition { .. }
                | Error::CellOccupied { .. }
                | Error::GameOver
                | Error::NotPlayersTurn { .. }
                | Error::NoPossibleMoves
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
