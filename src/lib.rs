pub mod board;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod greedy;
pub mod operators;
pub mod phenotype;
pub mod report;
pub mod rng;
pub mod strategy;

// Re-export commonly used types for convenience
pub use board::{Board, Fitness, FitnessState, Grid, SIZE};
pub use error::{KnightError, OptionExt, Result, ResultExt};
