//! Marks, cells and the 9-cell grid

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::validation::validate_grid;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "X")]
    Cross,
    #[serde(rename = "O")]
    Naught,
}

impl Mark {
    /// Both marks, in the order win detection checks them
    pub const ALL: [Mark; 2] = [Mark::Cross, Mark::Naught];

    /// Get the opposing mark
    pub fn other(self) -> Mark {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Cross => Cell::Cross,
            Mark::Naught => Cell::Naught,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Mark::Cross),
            "O" => Ok(Mark::Naught),
            _ => Err(crate::Error::ParseMark {
                input: s.to_string(),
            }),
        }
    }
}

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Cross,
    Naught,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Cross => 'X',
            Cell::Naught => 'O',
        }
    }

    /// Strict parse: only `X`, `O` and space are part of the alphabet.
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            ' ' => Some(Cell::Empty),
            'X' => Some(Cell::Cross),
            'O' => Some(Cell::Naught),
            _ => None,
        }
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Cross => Some(Mark::Cross),
            Cell::Naught => Some(Mark::Naught),
            Cell::Empty => None,
        }
    }
}

/// The 9 cells of the board in row-major order.
///
/// Piece counts are computed once at construction; a `Grid` never changes
/// afterwards, so they never need recomputing. Serializes as its 9-character
/// string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
    x_count: usize,
    o_count: usize,
    empty_count: usize,
}

impl Grid {
    /// Parse a grid from 9 characters of `X`, `O` or space.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the string does not have exactly 9
    /// characters or contains anything outside the alphabet.
    pub fn new(cells: &str) -> Result<Self, crate::Error> {
        validate_grid(cells)?;

        let mut parsed = [Cell::Empty; CELL_COUNT];
        for (slot, c) in parsed.iter_mut().zip(cells.chars()) {
            // validate_grid already rejected anything outside the alphabet
            *slot = Cell::from_char(c).unwrap_or(Cell::Empty);
        }
        Ok(Self::from_cells(parsed))
    }

    /// A grid of 9 empty cells
    pub fn empty() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        let mut grid = Grid {
            cells,
            x_count: 0,
            o_count: 0,
            empty_count: 0,
        };
        for cell in &cells {
            match cell {
                Cell::Cross => grid.x_count += 1,
                Cell::Naught => grid.o_count += 1,
                Cell::Empty => grid.empty_count += 1,
            }
        }
        grid
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Get cell at position (0-8)
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells[index] == Cell::Empty
    }

    pub fn x_count(&self) -> usize {
        self.x_count
    }

    pub fn o_count(&self) -> usize {
        self.o_count
    }

    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::Cross => self.x_count,
            Mark::Naught => self.o_count,
        }
    }

    /// Empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Copy of this grid with `index` holding `mark`. The caller checks the
    /// cell is empty.
    #[must_use = "with_mark returns a new grid; the original is unchanged"]
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Grid {
        let mut cells = self.cells;
        cells[index] = mark.to_cell();
        Grid::from_cells(cells)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Grid {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::new(s)
    }
}

impl TryFrom<String> for Grid {
    type Error = crate::Error;

    fn try_from(cells: String) -> Result<Self, Self::Error> {
        Grid::new(&cells)
    }
}

impl From<Grid> for String {
    fn from(grid: Grid) -> Self {
        grid.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_empty() {
        let grid = Grid::default();
        assert_eq!(grid.empty_count(), 9);
        assert_eq!(grid.x_count(), 0);
        assert_eq!(grid.o_count(), 0);
        assert_eq!(grid.to_string(), "         ");
    }

    #[test]
    fn test_counts() {
        let grid = Grid::new("OXXXXOOOX").unwrap();
        assert_eq!(grid.x_count(), 5);
        assert_eq!(grid.o_count(), 4);
        assert_eq!(grid.empty_count(), 0);

        let grid = Grid::new("XXOXO O  ").unwrap();
        assert_eq!(grid.x_count(), 3);
        assert_eq!(grid.o_count(), 3);
        assert_eq!(grid.empty_count(), 3);
    }

    #[test]
    fn test_counts_always_sum_to_nine() {
        for cells in ["         ", "X        ", "XOXOXOXOX", "  O  X  O", "OOOOOOOOO"] {
            let grid = Grid::new(cells).unwrap();
            assert_eq!(grid.x_count() + grid.o_count() + grid.empty_count(), 9);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        for cells in ["", "XO", "        ", "          ", "XOXOXOXOXO"] {
            let err = Grid::new(cells).unwrap_err();
            assert!(err.is_validation(), "expected validation error for {cells:?}");
        }
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        for cells in ["XOZ      ", "x        ", "........."] {
            let err = Grid::new(cells).unwrap_err();
            assert!(matches!(err, crate::Error::InvalidCellCharacter { .. }));
        }
    }

    #[test]
    fn test_display_round_trips() {
        let grid = Grid::new("XO  X  OX").unwrap();
        let parsed: Grid = grid.to_string().parse().unwrap();
        assert_eq!(parsed, grid);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let grid = Grid::empty();
        let next = grid.with_mark(4, Mark::Naught);
        assert_eq!(grid, Grid::empty());
        assert_eq!(next.cell(4), Cell::Naught);
        assert_eq!(next.o_count(), 1);
        assert_eq!(next.empty_count(), 8);
    }

    #[test]
    fn test_empty_positions_ascending() {
        let grid = Grid::new("X O  X  O").unwrap();
        assert_eq!(grid.empty_positions(), vec![1, 3, 4, 6, 7]);
    }

    #[test]
    fn test_mark_other_and_parse() {
        assert_eq!(Mark::Cross.other(), Mark::Naught);
        assert_eq!(Mark::Naught.other(), Mark::Cross);
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::Cross);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::Naught);
        assert!("Y".parse::<Mark>().is_err());
        assert_eq!(Mark::Cross.to_string(), "X");
    }
}
