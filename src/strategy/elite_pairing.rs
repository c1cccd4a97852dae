//! # ElitePairingStrategy
//!
//! Each child is bred from two parents drawn uniformly, with replacement, from the
//! survivors: the first parent is crossed over with the second and the result mutated.
//! A parent may be drawn twice, in which case the child is a mutated copy of it.
use super::BreedStrategy;
use crate::{
    error::{KnightError, Result},
    evolution::options::EvolutionOptions,
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

#[derive(Debug, Clone, Default)]
pub struct ElitePairingStrategy;

impl ElitePairingStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl<Pheno> BreedStrategy<Pheno> for ElitePairingStrategy
where
    Pheno: Phenotype,
{
    fn breed(
        &self,
        parents: &[Pheno],
        num_children: usize,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Pheno>> {
        if num_children == 0 {
            return Ok(Vec::new());
        }
        if parents.is_empty() {
            return Err(KnightError::EmptyPopulation);
        }

        let mutation_rate = evol_options.get_mutation_rate();
        let children = (0..num_children)
            .map(|_| {
                let first = &parents[rng.pick_index(parents.len())];
                let second = &parents[rng.pick_index(parents.len())];

                let mut child = first.clone();
                child.crossover(second, rng);
                child.mutate(mutation_rate, rng);
                child
            })
            .collect();

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::operators::row_origins;

    #[test]
    fn test_breed_produces_requested_count() {
        let strategy = ElitePairingStrategy::new();
        let options = EvolutionOptions::default();
        let mut rng = RandomNumberGenerator::from_seed(1);
        let parents = vec![Board::empty(), Board::empty()];

        let children = strategy.breed(&parents, 17, &options, &mut rng).unwrap();
        assert_eq!(children.len(), 17);
    }

    #[test]
    fn test_breed_with_empty_parents() {
        let strategy = ElitePairingStrategy::new();
        let options = EvolutionOptions::default();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let result = BreedStrategy::<Board>::breed(&strategy, &[], 3, &options, &mut rng);
        assert!(matches!(result, Err(KnightError::EmptyPopulation)));

        let nothing = BreedStrategy::<Board>::breed(&strategy, &[], 0, &options, &mut rng);
        assert!(nothing.unwrap().is_empty());
    }

    #[test]
    fn test_without_mutation_children_are_row_mixes() {
        let strategy = ElitePairingStrategy::new();
        let options = EvolutionOptions::builder().mutation_rate(0.0).build();
        let mut rng = RandomNumberGenerator::from_seed(8);

        let mut full = Board::empty();
        for row in 0..8 {
            for col in 0..8 {
                full.set(row, col, true);
            }
        }
        let parents = vec![Board::empty(), full.clone()];

        for child in strategy.breed(&parents, 30, &options, &mut rng).unwrap() {
            assert!(row_origins(&child, &parents[0], &parents[1])
                .iter()
                .all(Option::is_some));
            assert_eq!(child.cached_fitness(), None);
        }
    }
}
