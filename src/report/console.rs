//! # Console report
//!
//! Text output in the format
//!
//! ```text
//! Generation 0:
//! N . N . . . . .
//! ...
//! Fitness: 12
//! Knights placed: 14
//!
//! ```

use std::io::Write;

use crate::board::{render_grid, Fitness, Grid};
use crate::error::{Result, ResultExt};
use crate::evolution::{EvolutionResult, GenerationRecord, GenerationSink};

/// Writes a board followed by its fitness and knight count.
pub fn write_board<W: Write + ?Sized>(
    out: &mut W,
    grid: &Grid,
    fitness: Fitness,
    knights: usize,
) -> Result<()> {
    writeln!(out, "{}", render_grid(grid)).context("Failed to write board")?;
    writeln!(out, "Fitness: {}", fitness).context("Failed to write fitness")?;
    writeln!(out, "Knights placed: {}", knights).context("Failed to write knight count")?;
    Ok(())
}

/// Prints every generation's best board to a writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    per_generation: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            per_generation: true,
        }
    }

    /// Only the final report is printed.
    pub fn final_only(out: W) -> Self {
        Self {
            out,
            per_generation: false,
        }
    }

    /// Prints the final best board.
    pub fn report_final(&mut self, result: &EvolutionResult) -> Result<()> {
        write_board(
            &mut self.out,
            result.best.grid(),
            result.fitness,
            result.knights,
        )?;
        self.out.flush().context("Failed to flush report")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationSink for ConsoleReporter<W> {
    fn on_generation(&mut self, record: &GenerationRecord) -> Result<()> {
        if !self.per_generation {
            return Ok(());
        }

        writeln!(self.out, "Generation {}:", record.generation)
            .context("Failed to write generation header")?;
        write_board(&mut self.out, &record.grid, record.fitness, record.knights)?;
        writeln!(self.out).context("Failed to write separator")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_generation_block_format() {
        let mut board = Board::empty();
        board.set(0, 1, true);
        let record = GenerationRecord::capture(3, &board, 1);

        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.on_generation(&record).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Generation 3:");
        assert_eq!(lines[1], ". N . . . . . .");
        assert_eq!(lines[2], ". . . . . . . .");
        assert_eq!(lines[9], "Fitness: 1");
        assert_eq!(lines[10], "Knights placed: 1");
        assert_eq!(lines[11], "");
        assert_eq!(lines.len(), 12);
    }

    #[test]
    fn test_final_only_skips_generations() {
        let record = GenerationRecord::capture(0, &Board::empty(), 0);
        let mut reporter = ConsoleReporter::final_only(Vec::new());
        reporter.on_generation(&record).unwrap();
        assert!(reporter.into_inner().is_empty());
    }
}
