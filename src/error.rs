//! # Error Types
//!
//! This module defines the error type shared by the optimizer, the reporters and the
//! command line front end.
//!
//! The genetic operators and the fitness model are total functions over a fixed-size
//! board, so errors only come from configuration, from driving the engine out of order,
//! from the reporting side (I/O, a closed channel) or from parsing a board.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knightga::error::{KnightError, Result};
//!
//! fn check_population(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(KnightError::Configuration("Population size cannot be zero".into()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_population(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use knightga::error::{KnightError, OptionExt};
//!
//! fn best_fitness(scores: &[i32]) -> knightga::error::Result<i32> {
//!     scores.iter().max().copied().ok_or_else_knight(|| KnightError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_fitness(&[3, 7, 5]).unwrap(), 7);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while optimizing or reporting knight placements.
#[derive(Error, Debug)]
pub enum KnightError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),

    /// Error that occurs when the engine is driven out of order.
    #[error("Evolution error: {0}")]
    Evolution(String),

    /// Error that occurs when a textual board cannot be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error that occurs when the background worker or its channel fails.
    #[error("Worker error: {0}")]
    Worker(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for knight placement operations.
pub type Result<T> = std::result::Result<T, KnightError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use knightga::error::ResultExt;
/// use std::io::Write;
///
/// fn write_banner(out: &mut impl Write) -> knightga::error::Result<()> {
///     writeln!(out, "Knights").context("Failed to write banner")?;
///     Ok(())
/// }
///
/// let mut buffer = Vec::new();
/// write_banner(&mut buffer).unwrap();
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `KnightError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| KnightError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, KnightError>` using `err_fn` for `None`.
    fn ok_or_else_knight<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> KnightError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_knight<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> KnightError,
    {
        self.ok_or_else(err_fn)
    }
}
