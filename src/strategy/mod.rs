//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for refilling
//! a population from the individuals that survived selection.
pub mod elite_pairing;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces offspring from a set of surviving parents.
pub trait BreedStrategy<Pheno: Phenotype>
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `num_children` new individuals from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The individuals retained by selection, best first.
    /// - `num_children`: How many offspring to produce.
    /// - `evol_options`: The evolution options, e.g. the mutation rate.
    /// - `rng`: The random number generator driving parent choice, crossover and mutation.
    ///
    /// ## Errors
    ///
    /// Returns [`KnightError::EmptyPopulation`](crate::error::KnightError::EmptyPopulation)
    /// when children are requested from an empty parent slice.
    fn breed(
        &self,
        parents: &[Pheno],
        num_children: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>>;
}

pub use elite_pairing::ElitePairingStrategy;
