//! # Phenotype Trait
//!
//! The `Phenotype` trait defines the interface for individuals the engine evolves. It
//! provides the three stochastic operators of the genetic algorithm: randomization of a
//! fresh individual, crossover with a second parent and mutation.
//!
//! ## Example
//!
//! ```rust
//! use knightga::phenotype::Phenotype;
//! use knightga::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Bits {
//!     bits: [bool; 4],
//! }
//!
//! impl Phenotype for Bits {
//!     fn randomize(&mut self, rng: &mut RandomNumberGenerator) {
//!         for bit in self.bits.iter_mut() {
//!             *bit = rng.coin_flip();
//!         }
//!     }
//!
//!     fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator) {
//!         for (bit, theirs) in self.bits.iter_mut().zip(other.bits) {
//!             if rng.coin_flip() {
//!                 *bit = theirs;
//!             }
//!         }
//!     }
//!
//!     fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator) {
//!         for bit in self.bits.iter_mut() {
//!             if rng.chance(mutation_rate) {
//!                 *bit = !*bit;
//!             }
//!         }
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::rng::RandomNumberGenerator;

/// Trait for types that represent individuals in an evolutionary algorithm.
///
/// Types implementing this trait must also implement `Clone`, `Debug`, `Send`, and `Sync`
/// so populations can be evaluated in parallel and handed across threads.
pub trait Phenotype: Clone + Debug + Send + Sync {
    /// Replaces the genetic material of `self` with random material.
    fn randomize(&mut self, rng: &mut RandomNumberGenerator);

    /// Performs crossover with another individual of the same type.
    ///
    /// `self` starts as a copy of the first parent and ends as the child. Implementations
    /// decide, gene by gene or block by block, whether to take over material from `other`.
    fn crossover(&mut self, other: &Self, rng: &mut RandomNumberGenerator);

    /// Performs mutation on the individual, touching each gene with probability
    /// `mutation_rate`.
    fn mutate(&mut self, mutation_rate: f64, rng: &mut RandomNumberGenerator);
}
