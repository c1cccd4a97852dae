//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the tunables of the genetic algorithm: the number of
//! generations, the population size, how many elites survive each generation, the
//! mutation rate, the logging level and the population size from which fitness evaluation
//! goes parallel.
//!
//! ## Example
//!
//! ```rust
//! use knightga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // 200 generations of 100 boards, 20 elites, mutation rate 0.1
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_elite_count(), 20);
//!
//! let small = EvolutionOptions::builder()
//!     .num_generations(1)
//!     .population_size(4)
//!     .elite_count(1)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(small.validate().is_ok());
//! ```
//!
//! ## Defaults
//!
//! | Option | Default |
//! |---|---|
//! | `num_generations` | 200 |
//! | `population_size` | 100 |
//! | `elite_count` | `population_size / 5` |
//! | `mutation_rate` | 0.1 |
//! | `log_level` | `LogLevel::None` |
//! | `parallel_threshold` | 1000 |

use crate::error::{KnightError, Result};
use crate::operators::DEFAULT_MUTATION_RATE;

pub const DEFAULT_GENERATIONS: usize = 200;
pub const DEFAULT_POPULATION_SIZE: usize = 100;
/// The elite set is `population_size / ELITE_DIVISOR` unless set explicitly.
pub const ELITE_DIVISOR: usize = 5;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How much the engine logs per generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// The best board of every generation, rendered.
    Verbose,
    /// One line per generation.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    elite_count: Option<usize>,
    mutation_rate: f64,
    /// Minimum population size for parallel fitness evaluation
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        mutation_rate: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            elite_count: None,
            mutation_rate,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Returns the number of boards kept unchanged each generation.
    ///
    /// Falls back to `population_size / 5` when no explicit count was set.
    pub fn get_elite_count(&self) -> usize {
        self.elite_count
            .unwrap_or(self.population_size / ELITE_DIVISOR)
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Returns the minimum population size for parallel fitness evaluation.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets an explicit elite count; `None` restores the `population_size / 5` default.
    pub fn set_elite_count(&mut self, elite_count: Option<usize>) {
        self.elite_count = elite_count;
    }

    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Checks that the options describe a runnable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KnightError::Configuration`] if:
    /// - the population size is zero
    /// - the elite count is zero, since refilling samples parents from the elites
    /// - the elite count exceeds the population size
    /// - the mutation rate is not a probability
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(KnightError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let elite_count = self.get_elite_count();
        if elite_count == 0 {
            return Err(KnightError::Configuration(format!(
                "Elite count cannot be zero (population size {})",
                self.population_size
            )));
        }

        if elite_count > self.population_size {
            return Err(KnightError::Configuration(format!(
                "Elite count ({}) exceeds population size ({})",
                elite_count, self.population_size
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(KnightError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: DEFAULT_GENERATIONS,
            log_level: LogLevel::None,
            population_size: DEFAULT_POPULATION_SIZE,
            elite_count: None,
            mutation_rate: DEFAULT_MUTATION_RATE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    elite_count: Option<usize>,
    mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn elite_count(mut self, value: usize) -> Self {
        self.elite_count = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Unset fields take their defaults.
    pub fn build(self) -> EvolutionOptions {
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(DEFAULT_GENERATIONS),
            log_level: self.log_level.unwrap_or_default(),
            population_size: self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE),
            elite_count: self.elite_count,
            mutation_rate: self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}
