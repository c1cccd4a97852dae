//! # Genetic operators for boards
//!
//! - Randomization occupies each cell with probability one half.
//! - Crossover is uniform over rows: each row of the child is copied whole from one
//!   parent, never blended.
//! - Mutation flips each cell independently with the mutation rate.
//!
//! Every operator leaves the board's fitness cache [`Unknown`](crate::board::FitnessState::Unknown).

use crate::board::{Board, SIZE};
use crate::phenotype::Phenotype;
use crate::rng::RandomNumberGenerator;

/// Mutation rate used when none is configured.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

impl Phenotype for Board {
    fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
        for cell in self.grid_mut().iter_mut().flatten() {
            *cell = rng.coin_flip();
        }
    }

    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) {
        let grid = self.grid_mut();
        for (row, theirs) in grid.iter_mut().zip(other.grid().iter()) {
            if rng.coin_flip() {
                *row = *theirs;
            }
        }
    }

    fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator) {
        for cell in self.grid_mut().iter_mut().flatten() {
            if rng.chance(mutation_rate) {
                *cell = !*cell;
            }
        }
    }
}

/// Creates a board with every cell randomized.
pub fn random_board(rng: &mut RandomNumberGenerator) -> Board {
    let mut board = Board::empty();
    board.randomize(rng);
    board
}

/// Produces a child whose rows each come from `a` or `b`.
pub fn crossover(a: &Board, b: &Board, rng: &mut RandomNumberGenerator) -> Board {
    let mut child = a.clone();
    child.crossover(b, rng);
    child
}

/// Index of the parent each row of `child` was copied from, if it matches exactly one
/// (or both, when the parents agree on that row).
pub fn row_origins(child: &Board, a: &Board, b: &Board) -> [Option<RowOrigin>; SIZE] {
    let mut origins = [None; SIZE];
    for (idx, origin) in origins.iter_mut().enumerate() {
        let row = child.grid()[idx];
        *origin = match (row == a.grid()[idx], row == b.grid()[idx]) {
            (true, true) => Some(RowOrigin::Both),
            (true, false) => Some(RowOrigin::First),
            (false, true) => Some(RowOrigin::Second),
            (false, false) => None,
        };
    }
    origins
}

/// Which parent a child row matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrigin {
    First,
    Second,
    Both,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::KnightChallenge;

    fn full_board() -> Board {
        Board::from_grid([[true; SIZE]; SIZE])
    }

    #[test]
    fn test_crossover_takes_whole_rows() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let empty = Board::empty();
        let full = full_board();

        for _ in 0..50 {
            let child = crossover(&empty, &full, &mut rng);
            for row in child.grid() {
                assert!(row.iter().all(|&c| c) || row.iter().all(|&c| !c));
            }
            assert!(row_origins(&child, &empty, &full).iter().all(Option::is_some));
        }
    }

    #[test]
    fn test_crossover_uses_both_parents() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let empty = Board::empty();
        let full = full_board();

        let mut saw_first = false;
        let mut saw_second = false;
        for _ in 0..20 {
            let child = crossover(&empty, &full, &mut rng);
            for origin in row_origins(&child, &empty, &full).iter().flatten() {
                match origin {
                    RowOrigin::First => saw_first = true,
                    RowOrigin::Second => saw_second = true,
                    RowOrigin::Both => {}
                }
            }
        }
        assert!(saw_first && saw_second);
    }

    #[test]
    fn test_crossover_child_fitness_unknown() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let challenge = KnightChallenge::default();
        let mut a = random_board(&mut rng);
        let mut b = random_board(&mut rng);
        a.evaluate(&challenge);
        b.evaluate(&challenge);

        let child = crossover(&a, &b, &mut rng);
        assert_eq!(child.cached_fitness(), None);
    }

    #[test]
    fn test_randomize_is_roughly_half_full() {
        let mut rng = RandomNumberGenerator::from_seed(99);
        let total: usize = (0..100).map(|_| random_board(&mut rng).knight_count()).sum();
        let mean = total as f64 / 100.0;
        assert!((24.0..40.0).contains(&mean), "mean knight count {}", mean);
    }
}
