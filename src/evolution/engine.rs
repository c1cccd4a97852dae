use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::{
    challenge::Challenge,
    options::{EvolutionOptions, LogLevel},
    sink::{GenerationRecord, GenerationSink},
};
use crate::{
    board::{Board, Fitness},
    error::{KnightError, OptionExt, Result},
    operators::random_board,
    rng::RandomNumberGenerator,
    strategy::BreedStrategy,
};

/// Phase of the generation loop the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No population exists yet.
    Initializing,
    /// The population is complete and waits to be scored and sorted.
    Evaluating,
    /// The population is sorted; losers are about to be dropped.
    Selecting,
    /// Only elites remain; offspring are being bred.
    Refilling,
    /// The final population has been ranked.
    Terminated,
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best board of the final population.
    pub best: Board,
    pub fitness: Fitness,
    pub knights: usize,
    /// Number of generations completed before the final ranking.
    pub generations: usize,
    /// Whether the run stopped early on request.
    pub cancelled: bool,
    /// Best fitness of every completed generation, in order.
    pub fitness_history: Vec<Fitness>,
}

/// Owns the population and drives the sort, elitism and refill cycle.
///
/// ```rust
/// use knightga::evolution::{EvolutionOptions, PopulationEngine};
/// use knightga::fitness::KnightChallenge;
/// use knightga::rng::RandomNumberGenerator;
/// use knightga::strategy::ElitePairingStrategy;
///
/// let options = EvolutionOptions::builder().num_generations(20).build();
/// let mut engine =
///     PopulationEngine::new(ElitePairingStrategy::new(), KnightChallenge::default(), options)
///         .unwrap();
///
/// let mut history = Vec::new();
/// let result = engine
///     .run(&mut RandomNumberGenerator::from_seed(42), &mut history)
///     .unwrap();
///
/// assert_eq!(history.len(), 20);
/// assert!(result.fitness >= history[0].fitness);
/// ```
#[derive(Debug, Clone)]
pub struct PopulationEngine<Strategy, Chall>
where
    Strategy: BreedStrategy<Board>,
    Chall: Challenge<Board>,
{
    strategy: Strategy,
    challenge: Chall,
    options: EvolutionOptions,
    population: Vec<Board>,
    generation: usize,
    fitness_history: Vec<Fitness>,
    state: EngineState,
}

impl<Strategy, Chall> PopulationEngine<Strategy, Chall>
where
    Strategy: BreedStrategy<Board>,
    Chall: Challenge<Board> + Sync,
{
    /// Creates an engine after validating `options`.
    ///
    /// # Errors
    ///
    /// Returns [`KnightError::Configuration`] if the options are not runnable, see
    /// [`EvolutionOptions::validate`].
    pub fn new(strategy: Strategy, challenge: Chall, options: EvolutionOptions) -> Result<Self> {
        options.validate()?;
        debug!(
            population_size = options.get_population_size(),
            elite_count = options.get_elite_count(),
            generations = options.get_num_generations(),
            mutation_rate = options.get_mutation_rate(),
            "configured population engine"
        );

        Ok(Self {
            strategy,
            challenge,
            options,
            population: Vec::new(),
            generation: 0,
            fitness_history: Vec::new(),
            state: EngineState::Initializing,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Read-only view of the current population.
    pub fn population(&self) -> &[Board] {
        &self.population
    }

    /// Fills the population with random boards.
    ///
    /// # Errors
    ///
    /// Fails unless the engine is still [`EngineState::Initializing`].
    pub fn initialize(&mut self, rng: &mut RandomNumberGenerator) -> Result<()> {
        self.expect_state(EngineState::Initializing, "initialize")?;

        self.population = (0..self.options.get_population_size())
            .map(|_| random_board(rng))
            .collect();
        self.state = EngineState::Evaluating;
        Ok(())
    }

    /// Runs one generation: evaluate, sort, record the best board, keep the elites and
    /// breed the rest of the population back.
    ///
    /// Returns the record that was handed to `sink`.
    pub fn step<S>(&mut self, rng: &mut RandomNumberGenerator, sink: &mut S) -> Result<GenerationRecord>
    where
        S: GenerationSink + ?Sized,
    {
        self.expect_state(EngineState::Evaluating, "step")?;

        self.rank();
        let record = self.record_best()?;
        self.log_generation(&record);
        sink.on_generation(&record)?;
        self.fitness_history.push(record.fitness);

        self.state = EngineState::Selecting;
        let elite_count = self.options.get_elite_count();
        self.population.truncate(elite_count);

        self.state = EngineState::Refilling;
        let missing = self.options.get_population_size() - self.population.len();
        let children = self
            .strategy
            .breed(&self.population, missing, &self.options, rng)
            .map_err(|e| {
                KnightError::Breeding(format!(
                    "Failed to breed offspring in generation {}: {}",
                    self.generation, e
                ))
            })?;
        self.population.extend(children);

        self.generation += 1;
        self.state = EngineState::Evaluating;
        Ok(record)
    }

    /// Ranks the final population and reports its best board.
    pub fn finish(&mut self) -> Result<EvolutionResult> {
        self.expect_state(EngineState::Evaluating, "finish")?;
        self.finish_with(false)
    }

    /// Runs `initialize`, every configured generation and `finish`.
    pub fn run<S>(&mut self, rng: &mut RandomNumberGenerator, sink: &mut S) -> Result<EvolutionResult>
    where
        S: GenerationSink + ?Sized,
    {
        self.run_with_cancel(rng, sink, None)
    }

    /// Like [`run`](Self::run), checking `cancel` at the top of every generation.
    ///
    /// Once the flag is set the engine stops breeding, ranks the population it has and
    /// returns with `cancelled` set.
    pub fn run_with_cancel<S>(
        &mut self,
        rng: &mut RandomNumberGenerator,
        sink: &mut S,
        cancel: Option<&AtomicBool>,
    ) -> Result<EvolutionResult>
    where
        S: GenerationSink + ?Sized,
    {
        self.initialize(rng)?;

        for _ in 0..self.options.get_num_generations() {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                warn!(generation = self.generation, "evolution cancelled");
                return self.finish_with(true);
            }
            self.step(rng, sink)?;
        }

        self.finish()
    }

    fn finish_with(&mut self, cancelled: bool) -> Result<EvolutionResult> {
        self.rank();
        let best = self
            .population
            .first()
            .cloned()
            .ok_or_else_knight(|| KnightError::EmptyPopulation)?;
        let fitness = best
            .cached_fitness()
            .ok_or_else_knight(|| KnightError::Evolution("best board was not evaluated".into()))?;
        self.state = EngineState::Terminated;

        info!(
            generations = self.generation,
            fitness,
            knights = best.knight_count(),
            cancelled,
            "evolution finished"
        );

        Ok(EvolutionResult {
            knights: best.knight_count(),
            fitness,
            best,
            generations: self.generation,
            cancelled,
            fitness_history: self.fitness_history.clone(),
        })
    }

    /// Fills every stale fitness cache, then sorts best first. The sort is stable, so
    /// equal boards keep their population order.
    fn rank(&mut self) {
        let challenge = &self.challenge;
        if self.population.len() >= self.options.get_parallel_threshold() {
            self.population.par_iter_mut().for_each(|board| {
                board.evaluate(challenge);
            });
        } else {
            self.population.iter_mut().for_each(|board| {
                board.evaluate(challenge);
            });
        }

        self.population
            .sort_by_key(|board| Reverse(board.cached_fitness()));
    }

    fn record_best(&self) -> Result<GenerationRecord> {
        let best = self
            .population
            .first()
            .ok_or_else_knight(|| KnightError::EmptyPopulation)?;
        let fitness = best
            .cached_fitness()
            .ok_or_else_knight(|| KnightError::Evolution("best board was not evaluated".into()))?;
        Ok(GenerationRecord::capture(self.generation, best, fitness))
    }

    fn log_generation(&self, record: &GenerationRecord) {
        match self.options.get_log_level() {
            LogLevel::Minimal => info!(
                generation = record.generation,
                fitness = record.fitness,
                knights = record.knights,
                "generation complete"
            ),
            LogLevel::Verbose => debug!(
                generation = record.generation,
                fitness = record.fitness,
                knights = record.knights,
                "best board:\n{}",
                record.render()
            ),
            LogLevel::None => {}
        }
    }

    fn expect_state(&self, expected: EngineState, operation: &str) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(KnightError::Evolution(format!(
                "cannot {} while engine is {:?}",
                operation, self.state
            )))
        }
    }
}
