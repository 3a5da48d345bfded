//! # OrdinaryStrategy
//!
//! The breeding scheme of the canonical real-valued genetic algorithm: for
//! every pair of offspring, two parents are drawn by roulette wheel selection,
//! recombined by uniform crossover, and both children are mutated and clamped
//! into the search box.
use super::{BreedStrategy, GaussianMutation, UniformCrossover};
use crate::{
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
    selection::{selection_weights, RouletteWheelSelection},
};

/// Roulette wheel selection, uniform crossover and Gaussian mutation.
///
/// Selection weights are derived once per call from the parents' costs with
/// the configured selection pressure. Parents are drawn with replacement, so
/// one individual may be both parents of a pair.
#[derive(Debug, Clone, Default)]
pub struct OrdinaryStrategy {
    selection: RouletteWheelSelection,
    crossover: UniformCrossover,
}

impl OrdinaryStrategy {
    /// Creates a new `OrdinaryStrategy` instance.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BreedStrategy for OrdinaryStrategy {
    /// ## Errors
    ///
    /// - `GeneticError::EmptyPopulation` if `parents` is empty.
    /// - `GeneticError::DegenerateSelection` if every selection weight is zero.
    /// - `GeneticError::InvalidConfiguration` if the mutation parameters are
    ///   invalid or the offspring cannot be allocated.
    /// - `GeneticError::DimensionMismatch` if the bounds do not fit the parents.
    fn breed(
        &self,
        parents: &Population,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        if parents.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let weights = selection_weights(&parents.costs()?, evol_options.get_selection_pressure());
        let cumulative = self.selection.cumulative_weights(&weights)?;
        let mutation = GaussianMutation::new(
            evol_options.get_mutation_rate(),
            evol_options.get_mutation_step(),
        )?;
        let bounds = evol_options.get_bounds();

        let mut children = Vec::new();
        children
            .try_reserve_exact(evol_options.get_num_children())
            .map_err(|e| {
                GeneticError::InvalidConfiguration(format!(
                    "Cannot allocate {} children: {}",
                    evol_options.get_num_children(),
                    e
                ))
            })?;
        for _ in 0..evol_options.get_num_children() / 2 {
            let first = &parents[self.selection.select_from_cumulative(&cumulative, rng)];
            let second = &parents[self.selection.select_from_cumulative(&cumulative, rng)];

            let (child1, child2) = self.crossover.crossover(first, second, rng)?;
            for child in [child1, child2] {
                let mut child = mutation.mutate(&child, rng);
                bounds.clamp(child.position_mut())?;
                children.push(child);
            }
        }

        Ok(children)
    }
}
