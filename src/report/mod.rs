//! Presentation of boards and generation records.
pub mod console;
pub mod player;

pub use console::ConsoleReporter;
pub use player::{step_interactively, GenerationPlayer, Progress, StepOutcome};
