pub mod launcher;
pub mod options;
pub mod tracker;

pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use tracker::BestTracker;

use crate::{cost::CostFunction, error::Result, rng::RandomNumberGenerator};

/// Minimizes `cost_fn` with the ordinary strategy: roulette wheel selection,
/// uniform crossover, Gaussian mutation and elitist replacement.
///
/// Returns the final population, the best individual and the best cost of
/// every generation.
///
/// # Example
///
/// ```rust
/// use realga::{cost::sphere, run, EvolutionOptions, RandomNumberGenerator};
///
/// let options = EvolutionOptions::builder()
///     .num_var(2)
///     .num_generations(50)
///     .build()
///     .unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let result = run(sphere, &options, &mut rng).unwrap();
/// assert_eq!(result.population.len(), 20);
/// assert_eq!(result.best_costs.len(), 50);
/// ```
pub fn run<C>(
    cost_fn: C,
    options: &EvolutionOptions,
    rng: &mut RandomNumberGenerator,
) -> Result<EvolutionResult>
where
    C: CostFunction,
{
    EvolutionLauncher::with_ordinary_strategy(cost_fn).evolve(options, rng)
}
