//! Winning line analysis

use super::board::{CELL_COUNT, Cell, Mark};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for matching winning lines against a board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// First line, in declared order, that either mark completes.
    ///
    /// For each line Cross is tried before Naught, so a degenerate board with
    /// two winners still resolves the same way every time.
    pub fn find_winner(cells: &[Cell; CELL_COUNT]) -> Option<(Mark, [usize; 3])> {
        WINNING_LINES.iter().find_map(|line| {
            Mark::ALL
                .into_iter()
                .find(|&mark| Self::completes(cells, mark, line))
                .map(|mark| (mark, *line))
        })
    }

    fn completes(cells: &[Cell; CELL_COUNT], mark: Mark, line: &[usize; 3]) -> bool {
        let target = mark.to_cell();
        line.iter().all(|&idx| cells[idx] == target)
    }
}
