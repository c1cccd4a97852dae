//! # Board
//!
//! An 8×8 occupancy grid together with a lazily computed, cached fitness score.
//!
//! The cache is an explicit [`FitnessState`]: every method that changes the grid resets it
//! to [`FitnessState::Unknown`], and [`Board::evaluate`] fills it on first access.
//!
//! ## Example
//!
//! ```rust
//! use knightga::board::Board;
//! use knightga::fitness::KnightChallenge;
//!
//! let mut board: Board = "\
//!     N . . . . . . .
//!     . . N . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . .
//!     . . . . . . . ."
//!     .parse()
//!     .unwrap();
//!
//! // Two knights attacking each other: 2 - 2 * 1
//! assert_eq!(board.evaluate(&KnightChallenge::default()), 0);
//! assert_eq!(board.cached_fitness(), Some(0));
//!
//! board.set(0, 0, false);
//! assert_eq!(board.cached_fitness(), None);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::KnightError;
use crate::evolution::Challenge;

/// Side length of the board.
pub const SIZE: usize = 8;

/// Fitness score of a board. Higher is better.
pub type Fitness = i32;

/// Raw occupancy grid, `true` marks a knight.
pub type Grid = [[bool; SIZE]; SIZE];

/// Cached fitness of a board.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitnessState {
    /// The grid changed since the last evaluation.
    #[default]
    Unknown,
    /// The fitness of the current grid.
    Computed(Fitness),
}

/// A candidate knight placement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Board {
    grid: Grid,
    fitness: FitnessState,
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a board from an existing grid. The fitness starts out unknown.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            fitness: FitnessState::Unknown,
        }
    }

    /// Returns the occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns a copy of the grid, detached from this board.
    pub fn snapshot(&self) -> Grid {
        self.grid
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.grid[row][col]
    }

    /// Places (`true`) or removes (`false`) a knight.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`SIZE`].
    pub fn set(&mut self, row: usize, col: usize, knight: bool) {
        self.grid[row][col] = knight;
        self.invalidate();
    }

    /// Number of knights on the board.
    pub fn knight_count(&self) -> usize {
        crate::fitness::knight_count(&self.grid)
    }

    /// Returns the cached fitness without computing it.
    pub fn cached_fitness(&self) -> Option<Fitness> {
        match self.fitness {
            FitnessState::Computed(value) => Some(value),
            FitnessState::Unknown => None,
        }
    }

    pub fn fitness_state(&self) -> FitnessState {
        self.fitness
    }

    /// Returns the fitness of the board, scoring it with `challenge` if the cache is empty.
    pub fn evaluate<C>(&mut self, challenge: &C) -> Fitness
    where
        C: Challenge<Board> + ?Sized,
    {
        match self.fitness {
            FitnessState::Computed(value) => value,
            FitnessState::Unknown => {
                let value = challenge.score(self);
                self.fitness = FitnessState::Computed(value);
                value
            }
        }
    }

    /// Marks the cached fitness as stale.
    pub fn invalidate(&mut self) {
        self.fitness = FitnessState::Unknown;
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        self.invalidate();
        &mut self.grid
    }
}

/// Boards compare by their grid only; the cache is derived data.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}

/// Renders one row per line, `N` for a knight and `.` for an empty cell, space-separated.
pub fn render_grid(grid: &Grid) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|&cell| if cell { "N" } else { "." })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_grid(&self.grid))
    }
}

impl FromStr for Board {
    type Err = KnightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != SIZE {
            return Err(KnightError::Parse(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut grid = [[false; SIZE]; SIZE];
        for (row_idx, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != SIZE {
                return Err(KnightError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row_idx,
                    cells.len(),
                    SIZE
                )));
            }

            for (col_idx, cell) in cells.into_iter().enumerate() {
                grid[row_idx][col_idx] = match cell {
                    "N" | "n" => true,
                    "." => false,
                    other => {
                        return Err(KnightError::Parse(format!(
                            "unexpected cell {:?} at row {}, column {}",
                            other, row_idx, col_idx
                        )))
                    }
                };
            }
        }

        Ok(Self::from_grid(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::KnightChallenge;

    #[test]
    fn test_display_round_trip() {
        let mut board = Board::empty();
        board.set(0, 0, true);
        board.set(3, 5, true);
        board.set(7, 7, true);

        let text = board.to_string();
        assert_eq!(text.lines().count(), SIZE);
        assert_eq!(text.lines().next().unwrap(), "N . . . . . . .");

        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            "N . .".parse::<Board>(),
            Err(KnightError::Parse(_))
        ));

        let bad_cell = ". . . . . . . x\n".repeat(SIZE);
        assert!(matches!(
            bad_cell.parse::<Board>(),
            Err(KnightError::Parse(_))
        ));
    }

    #[test]
    fn test_set_invalidates_cache() {
        let challenge = KnightChallenge::default();
        let mut board = Board::empty();
        assert_eq!(board.fitness_state(), FitnessState::Unknown);

        assert_eq!(board.evaluate(&challenge), 0);
        assert_eq!(board.fitness_state(), FitnessState::Computed(0));

        board.set(4, 4, true);
        assert_eq!(board.fitness_state(), FitnessState::Unknown);
        assert_eq!(board.evaluate(&challenge), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut board = Board::empty();
        let before = board.snapshot();
        board.set(1, 1, true);

        assert!(!before[1][1]);
        assert!(board.is_occupied(1, 1));
    }

    #[test]
    fn test_equality_ignores_cache() {
        let mut evaluated = Board::empty();
        evaluated.evaluate(&KnightChallenge::default());

        assert_eq!(evaluated, Board::empty());
    }
}
