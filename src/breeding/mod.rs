//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies that turn
//! the current population into a batch of offspring for one generation.
//! Offspring are returned unevaluated; the engine scores them.
pub mod crossover;
pub mod mutation;
pub mod ordinary;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, individual::Individual,
    population::Population, rng::RandomNumberGenerator,
};

/// Produces the offspring of one generation.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `evol_options.get_num_children()` new individuals from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The current, fully evaluated population.
    /// - `evol_options`: The run configuration.
    /// - `rng`: The random stream of the run.
    ///
    /// ## Errors
    ///
    /// Implementations fail if the parents are empty, if no parent can be
    /// selected, or if an operator rejects its input.
    fn breed(
        &self,
        parents: &Population,
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>>;
}

pub use crossover::UniformCrossover;
pub use mutation::GaussianMutation;
pub use ordinary::OrdinaryStrategy;
