//! # Fitness
//!
//! The fitness model rewards every placed knight and penalizes every pair of knights
//! that attack each other:
//!
//! ```text
//! F = knights - attack_penalty * attacking_pairs
//! ```
//!
//! Each attacking pair is seen once from each knight while scanning, so the raw count is
//! halved before the penalty applies.

use crate::board::{Board, Fitness, Grid, SIZE};
use crate::error::{KnightError, Result};
use crate::evolution::Challenge;

/// The eight relative `(row, col)` deltas of a knight's move.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Penalty applied per attacking pair unless configured otherwise.
pub const DEFAULT_ATTACK_PENALTY: Fitness = 2;

/// Attacking pairs on a completely filled board, the most any board can have.
pub const MAX_ATTACKING_PAIRS: Fitness = 168;

/// Largest penalty magnitude for which every board scores without overflowing.
pub const MAX_ATTACK_PENALTY: Fitness =
    (Fitness::MAX - (SIZE * SIZE) as Fitness) / MAX_ATTACKING_PAIRS;

/// Iterates over the in-bounds cells a knight on `(row, col)` attacks.
pub fn knight_targets(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    KNIGHT_MOVES.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < SIZE && c < SIZE).then_some((r, c))
    })
}

pub fn knight_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|&&cell| cell).count()
}

/// Returns `true` if a knight on the board attacks `(row, col)`.
pub fn is_attacked(grid: &Grid, row: usize, col: usize) -> bool {
    knight_targets(row, col).any(|(r, c)| grid[r][c])
}

/// Number of unordered knight pairs that attack each other.
pub fn attacking_pairs(grid: &Grid) -> usize {
    let mut raw = 0;
    for (row, cells) in grid.iter().enumerate() {
        for (col, &knight) in cells.iter().enumerate() {
            if knight {
                raw += knight_targets(row, col).filter(|&(r, c)| grid[r][c]).count();
            }
        }
    }
    raw / 2
}

/// Scores boards by knight count minus a weighted attack count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightChallenge {
    attack_penalty: Fitness,
}

impl KnightChallenge {
    /// Creates a challenge with the given per-pair penalty.
    ///
    /// # Errors
    ///
    /// Returns [`KnightError::Configuration`] if `|attack_penalty|` exceeds
    /// [`MAX_ATTACK_PENALTY`].
    pub fn new(attack_penalty: Fitness) -> Result<Self> {
        if !(-MAX_ATTACK_PENALTY..=MAX_ATTACK_PENALTY).contains(&attack_penalty) {
            return Err(KnightError::Configuration(format!(
                "Attack penalty {} is outside -{}..={}",
                attack_penalty, MAX_ATTACK_PENALTY, MAX_ATTACK_PENALTY
            )));
        }
        Ok(Self { attack_penalty })
    }

    pub fn attack_penalty(&self) -> Fitness {
        self.attack_penalty
    }

    /// Scores a raw grid.
    pub fn score_grid(&self, grid: &Grid) -> Fitness {
        let knights = knight_count(grid) as Fitness;
        let attacks = attacking_pairs(grid) as Fitness;
        knights - self.attack_penalty * attacks
    }
}

impl Default for KnightChallenge {
    fn default() -> Self {
        Self {
            attack_penalty: DEFAULT_ATTACK_PENALTY,
        }
    }
}

impl Challenge<Board> for KnightChallenge {
    fn score(&self, phenotype: &Board) -> Fitness {
        self.score_grid(phenotype.grid())
    }
}
