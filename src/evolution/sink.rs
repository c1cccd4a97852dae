//! # Generation sinks
//!
//! After sorting each generation the engine hands a [`GenerationRecord`] of the best board
//! to a [`GenerationSink`]. The record owns a copy of the grid, so the live population
//! never leaks out of the engine.
//!
//! Implementations provided here:
//! - `Vec<GenerationRecord>` collects every record in order.
//! - `mpsc::Sender<GenerationRecord>` publishes records to another thread.
//! - `FnMut(&GenerationRecord) -> Result<()>` closures.
//! - [`NullSink`] discards everything.
//!
//! The console printer lives in [`crate::report::console`].

use std::sync::mpsc::Sender;

use crate::board::{render_grid, Board, Fitness, Grid};
use crate::error::{KnightError, Result};

/// Snapshot of the best board of one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRecord {
    /// Zero-based generation index.
    pub generation: usize,
    pub grid: Grid,
    pub fitness: Fitness,
    pub knights: usize,
}

impl GenerationRecord {
    /// Copies `board` into a record. `fitness` must be the board's evaluated score.
    pub fn capture(generation: usize, board: &Board, fitness: Fitness) -> Self {
        Self {
            generation,
            grid: board.snapshot(),
            fitness,
            knights: board.knight_count(),
        }
    }

    /// Rebuilds a board from the snapshot.
    pub fn to_board(&self) -> Board {
        Board::from_grid(self.grid)
    }

    pub fn render(&self) -> String {
        render_grid(&self.grid)
    }
}

/// Receives the best board of every generation.
pub trait GenerationSink {
    /// Called once per generation, in order.
    ///
    /// # Errors
    ///
    /// An error stops the run and is returned from the engine.
    fn on_generation(&mut self, record: &GenerationRecord) -> Result<()>;
}

impl GenerationSink for Vec<GenerationRecord> {
    fn on_generation(&mut self, record: &GenerationRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

impl GenerationSink for Sender<GenerationRecord> {
    fn on_generation(&mut self, record: &GenerationRecord) -> Result<()> {
        self.send(record.clone()).map_err(|_| {
            KnightError::Worker(format!(
                "receiver dropped before generation {}",
                record.generation
            ))
        })
    }
}

impl<F> GenerationSink for F
where
    F: FnMut(&GenerationRecord) -> Result<()>,
{
    fn on_generation(&mut self, record: &GenerationRecord) -> Result<()> {
        self(record)
    }
}

/// A sink that ignores every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl GenerationSink for NullSink {
    fn on_generation(&mut self, _record: &GenerationRecord) -> Result<()> {
        Ok(())
    }
}
