use rayon::prelude::*;
use tracing::{debug, info, instrument};

use super::{
    options::{EvolutionOptions, LogLevel},
    tracker::BestTracker,
};
use crate::{
    breeding::{BreedStrategy, OrdinaryStrategy},
    cost::CostFunction,
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Outcome of a completed run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The final population: `npop` individuals, ascending by cost.
    pub population: Population,
    /// The lowest-cost individual evaluated during the run.
    pub best: Individual,
    /// Best cost at the end of each generation; one entry per generation.
    pub best_costs: Vec<f64>,
}

/// Progress data handed to an observer after every generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// Zero-based generation index.
    pub generation: usize,
    /// Lowest cost seen so far in the run.
    pub best_cost: f64,
    /// Lowest cost in the surviving population.
    pub population_best_cost: f64,
    /// Mean cost of the surviving population.
    pub mean_cost: f64,
    /// Number of survivors.
    pub population_size: usize,
}

/// Runs the generational loop: breed, evaluate, merge, rank, truncate.
///
/// Replacement is elitist ("mu + lambda"): after each generation the `npop`
/// lowest-cost individuals among parents and offspring survive.
pub struct EvolutionLauncher<Strategy, C>
where
    Strategy: BreedStrategy,
    C: CostFunction,
{
    strategy: Strategy,
    cost_fn: C,
}

impl<C> EvolutionLauncher<OrdinaryStrategy, C>
where
    C: CostFunction,
{
    /// Creates a launcher with roulette wheel selection, uniform crossover and
    /// Gaussian mutation.
    pub fn with_ordinary_strategy(cost_fn: C) -> Self {
        Self::new(OrdinaryStrategy::new(), cost_fn)
    }
}

impl<Strategy, C> EvolutionLauncher<Strategy, C>
where
    Strategy: BreedStrategy,
    C: CostFunction,
{
    /// Creates a new `EvolutionLauncher` instance with the specified breeding
    /// strategy and cost function.
    pub fn new(strategy: Strategy, cost_fn: C) -> Self {
        Self { strategy, cost_fn }
    }

    pub fn cost_fn(&self) -> &C {
        &self.cost_fn
    }

    /// Minimizes the cost function starting from a uniformly random population.
    ///
    /// # Errors
    ///
    /// - `GeneticError::InvalidConfiguration` if `options` is invalid; nothing is evaluated.
    /// - `GeneticError::DegenerateSelection` if every selection weight of a
    ///   generation is zero.
    /// - Any error returned by the cost function, unchanged.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_with_observer(options, rng, |_| {})
    }

    /// Like [`EvolutionLauncher::evolve`], calling `observer` after every generation.
    pub fn evolve_with_observer<O>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        observer: O,
    ) -> Result<EvolutionResult>
    where
        O: FnMut(&GenerationReport),
    {
        options.validate()?;

        let bounds = options.get_bounds();
        let positions = (0..options.get_population_size())
            .map(|_| bounds.sample(options.get_num_var(), rng))
            .collect::<Result<Vec<_>>>()?;

        self.evolve_from_with_observer(options, positions, rng, observer)
    }

    /// Minimizes the cost function starting from the given positions.
    ///
    /// Exactly `population_size` positions of length `num_var` are required.
    /// They are clamped into the bounds before evaluation.
    ///
    /// # Errors
    ///
    /// As [`EvolutionLauncher::evolve`]; a wrong number or length of initial
    /// positions is an `InvalidConfiguration`.
    pub fn evolve_from(
        &self,
        options: &EvolutionOptions,
        initial_positions: Vec<Vec<f64>>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        self.evolve_from_with_observer(options, initial_positions, rng, |_| {})
    }

    /// Like [`EvolutionLauncher::evolve_from`], calling `observer` after every generation.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            num_var = options.get_num_var(),
            npop = options.get_population_size(),
            maxit = options.get_num_generations()
        )
    )]
    pub fn evolve_from_with_observer<O>(
        &self,
        options: &EvolutionOptions,
        initial_positions: Vec<Vec<f64>>,
        rng: &mut RandomNumberGenerator,
        mut observer: O,
    ) -> Result<EvolutionResult>
    where
        O: FnMut(&GenerationReport),
    {
        options.validate()?;

        let population_size = options.get_population_size();
        if initial_positions.len() != population_size {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Expected {} initial positions, got {}",
                population_size,
                initial_positions.len()
            )));
        }
        if let Some(index) = initial_positions
            .iter()
            .position(|position| position.len() != options.get_num_var())
        {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Initial position {} has {} genes, expected {}",
                index,
                initial_positions[index].len(),
                options.get_num_var()
            )));
        }

        let bounds = options.get_bounds();
        let candidates = initial_positions
            .into_iter()
            .map(|mut position| {
                bounds.clamp(&mut position)?;
                Ok(Individual::new(position))
            })
            .collect::<Result<Vec<_>>>()?;

        let initial = self.evaluate(candidates, options)?;
        let mut tracker = BestTracker::with_capacity(options.get_num_generations());
        initial.iter().for_each(|individual| {
            tracker.observe(individual);
        });

        let mut population = Population::new(initial)?;
        population.rank();

        let log_level = options.get_log_level();
        for generation in 0..options.get_num_generations() {
            let offspring = self.strategy.breed(&population, options, rng)?;
            let offspring = self.evaluate(offspring, options)?;

            for child in &offspring {
                if tracker.observe(child) && *log_level == LogLevel::Verbose {
                    debug!(generation, cost = ?child.cost(), "new best individual");
                }
            }

            population.extend(offspring)?;
            population.rank();
            population.truncate(population_size);
            tracker.record_generation();

            let report = GenerationReport {
                generation,
                best_cost: tracker.best_cost().unwrap_or(f64::NAN),
                population_best_cost: population[0].cost().unwrap_or(f64::NAN),
                mean_cost: population.mean_cost()?,
                population_size: population.len(),
            };

            match log_level {
                LogLevel::Minimal => {
                    info!(generation, best_cost = report.best_cost, "generation complete")
                }
                LogLevel::Verbose => {
                    info!(
                        generation,
                        best_cost = report.best_cost,
                        mean_cost = report.mean_cost,
                        "generation complete"
                    );
                    population.iter().for_each(|individual| {
                        debug!(
                            generation,
                            position = ?individual.position(),
                            cost = ?individual.cost(),
                            "survivor"
                        );
                    });
                }
                LogLevel::None => {}
            }

            observer(&report);
        }

        let (best, best_costs) = tracker.into_parts();
        let best = best.ok_or_else_genetic(|| {
            GeneticError::Evolution("No individual was evaluated".to_string())
        })?;

        Ok(EvolutionResult {
            population,
            best,
            best_costs,
        })
    }

    /// Scores every candidate once, in parallel when the batch reaches the
    /// configured threshold. Output order matches input order.
    fn evaluate(
        &self,
        candidates: Vec<Individual>,
        options: &EvolutionOptions,
    ) -> Result<Vec<Individual>> {
        let score = |mut candidate: Individual| -> Result<Individual> {
            let cost = self.cost_fn.cost(candidate.position())?;
            candidate.set_cost(cost);
            Ok(candidate)
        };

        if candidates.len() >= options.get_parallel_threshold() {
            candidates.into_par_iter().map(score).collect()
        } else {
            candidates.into_iter().map(score).collect()
        }
    }
}
