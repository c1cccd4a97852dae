//! # GenerationPlayer
//!
//! A pull-based cursor over recorded generations. The front end decides when to advance;
//! the player only moves forward, one record at a time, unless told to skip.
//!
//! ```rust
//! use knightga::board::Board;
//! use knightga::evolution::GenerationRecord;
//! use knightga::report::GenerationPlayer;
//!
//! let records: Vec<GenerationRecord> = (0..3)
//!     .map(|g| GenerationRecord::capture(g, &Board::empty(), 0))
//!     .collect();
//!
//! let mut player = GenerationPlayer::new(records.into_iter(), 3);
//! assert_eq!(player.next_generation().unwrap().generation, 0);
//! assert_eq!(player.progress().to_string(), "1/3");
//! ```

use std::fmt;
use std::io::{BufRead, Write};

use crate::error::{Result, ResultExt};
use crate::evolution::GenerationRecord;
use crate::report::console::write_board;

/// Position of the player as `current/total`, `current` counting shown records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.total)
    }
}

#[derive(Debug)]
pub struct GenerationPlayer<I>
where
    I: Iterator<Item = GenerationRecord>,
{
    source: I,
    total: usize,
    shown: usize,
    current: Option<GenerationRecord>,
}

impl<I> GenerationPlayer<I>
where
    I: Iterator<Item = GenerationRecord>,
{
    /// Creates a player over `source`, which is expected to yield `total` records.
    pub fn new(source: I, total: usize) -> Self {
        Self {
            source,
            total,
            shown: 0,
            current: None,
        }
    }

    /// Advances to the next record and returns it, or `None` once the source is exhausted.
    ///
    /// With a channel-backed source this blocks until the producer publishes the next
    /// generation.
    pub fn next_generation(&mut self) -> Option<&GenerationRecord> {
        let record = self.source.next()?;
        self.shown += 1;
        self.current = Some(record);
        self.current.as_ref()
    }

    /// Skips `count` records and shows the one after them.
    pub fn skip_generations(&mut self, count: usize) -> Option<&GenerationRecord> {
        for _ in 0..count {
            self.source.next()?;
            self.shown += 1;
        }
        self.next_generation()
    }

    /// The record currently shown.
    pub fn current(&self) -> Option<&GenerationRecord> {
        self.current.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: self.shown,
            total: self.total,
        }
    }

    /// `true` once every expected record has been shown.
    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }
}

impl<I> Iterator for GenerationPlayer<I>
where
    I: Iterator<Item = GenerationRecord>,
{
    type Item = GenerationRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_generation().cloned()
    }
}

/// Why [`step_interactively`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Every record was shown.
    Finished,
    /// The user typed `q`.
    Quit,
    /// Input ended before the last record.
    InputClosed,
}

/// Shows one record per line read from `input`: an empty line advances, `q` quits.
///
/// Each record is written as a `Generation (i/n)` header, the board and a blank line.
pub fn step_interactively<I, R, W>(
    player: &mut GenerationPlayer<I>,
    input: R,
    out: &mut W,
) -> Result<StepOutcome>
where
    I: Iterator<Item = GenerationRecord>,
    R: BufRead,
    W: Write + ?Sized,
{
    writeln!(out, "Press Enter for the next generation, q to quit.")
        .context("Failed to write prompt")?;

    let mut lines = input.lines();
    while !player.is_done() {
        let Some(line) = lines.next() else {
            return Ok(StepOutcome::InputClosed);
        };
        if line.context("Failed to read input")?.trim() == "q" {
            return Ok(StepOutcome::Quit);
        }

        let Some(record) = player.next_generation().cloned() else {
            break;
        };
        writeln!(out, "Generation ({})", player.progress())
            .context("Failed to write generation header")?;
        write_board(out, &record.grid, record.fitness, record.knights)?;
        writeln!(out).context("Failed to write separator")?;
    }
    Ok(StepOutcome::Finished)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn records(count: usize) -> Vec<GenerationRecord> {
        (0..count)
            .map(|g| {
                let mut board = Board::empty();
                board.set(g % 8, 0, true);
                GenerationRecord::capture(g, &board, 1)
            })
            .collect()
    }

    #[test]
    fn test_advances_in_order() {
        let mut player = GenerationPlayer::new(records(4).into_iter(), 4);
        assert!(player.current().is_none());
        assert_eq!(player.progress(), Progress { current: 0, total: 4 });

        for expected in 0..4 {
            let record = player.next_generation().unwrap();
            assert_eq!(record.generation, expected);
        }
        assert!(player.is_done());
        assert!(player.next_generation().is_none());
        assert_eq!(player.current().unwrap().generation, 3);
    }

    #[test]
    fn test_skip_only_when_asked() {
        let mut player = GenerationPlayer::new(records(6).into_iter(), 6);
        player.next_generation();
        let record = player.skip_generations(2).unwrap();
        assert_eq!(record.generation, 3);
        assert_eq!(player.progress().to_string(), "4/6");

        assert!(player.skip_generations(10).is_none());
    }

    fn step(count: usize, input: &str) -> (StepOutcome, String, Progress) {
        let mut player = GenerationPlayer::new(records(count).into_iter(), count);
        let mut out = Vec::new();
        let outcome = step_interactively(&mut player, input.as_bytes(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap(), player.progress())
    }

    #[test]
    fn test_step_shows_one_record_per_line() {
        let (outcome, text, progress) = step(3, "\n\n\n");
        assert_eq!(outcome, StepOutcome::Finished);
        assert_eq!(progress.to_string(), "3/3");

        let headers: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with("Generation"))
            .collect();
        assert_eq!(
            headers,
            vec!["Generation (1/3)", "Generation (2/3)", "Generation (3/3)"]
        );
        assert!(text.contains("Knights placed: 1"));
    }

    #[test]
    fn test_step_quits_on_q() {
        let (outcome, text, progress) = step(5, "\n q \n\n");
        assert_eq!(outcome, StepOutcome::Quit);
        assert_eq!(progress.to_string(), "1/5");
        assert_eq!(text.matches("Generation (").count(), 1);
    }

    #[test]
    fn test_step_stops_when_input_ends() {
        let (outcome, text, progress) = step(4, "\n\n");
        assert_eq!(outcome, StepOutcome::InputClosed);
        assert_eq!(progress.to_string(), "2/4");
        assert!(text.starts_with("Press Enter"));
        assert!(!text.contains("Generation (3/4)"));
    }

    #[test]
    fn test_step_extra_input_is_ignored_once_done() {
        let (outcome, _, progress) = step(1, "\n\n\nq\n");
        assert_eq!(outcome, StepOutcome::Finished);
        assert_eq!(progress.to_string(), "1/1");
    }

    #[test]
    fn test_iterator_yields_everything() {
        let player = GenerationPlayer::new(records(5).into_iter(), 5);
        let generations: Vec<usize> = player.map(|r| r.generation).collect();
        assert_eq!(generations, vec![0, 1, 2, 3, 4]);
    }
}
