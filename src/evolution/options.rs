//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the immutable configuration of one
//! optimization run: problem dimension and box bounds, generation count,
//! population and offspring sizes, mutation rate and step size, and the
//! selection pressure. It also carries the logging level and the batch size
//! from which offspring are evaluated in parallel.
//!
//! ## Example
//!
//! ```rust
//! use realga::bounds::Bounds;
//! use realga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .num_var(3)
//!     .bounds(Bounds::new(-5.0, 5.0))
//!     .num_generations(200)
//!     .population_size(30)
//!     .children_proportion(1.0)
//!     .mutation_rate(0.2)
//!     .mutation_step(0.1)
//!     .selection_pressure(1.0)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_num_children(), 30);
//!
//! // The defaults describe a 5-variable problem on [-10, 10].
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_num_var(), 5);
//! ```
//!
//! ## Validation
//!
//! [`EvolutionOptionsBuilder::build`] and [`EvolutionOptions::validate`]
//! reject, with `GeneticError::InvalidConfiguration`:
//!
//! - `num_var == 0`
//! - invalid bounds (see [`Bounds::validate`])
//! - `population_size < 2`
//! - an odd `num_children`
//! - a `population_size + num_children` too large to allocate
//! - `mutation_rate` outside `[0, 1]`
//! - a negative or non-finite `mutation_step`
//! - a non-positive or non-finite `selection_pressure`

use std::mem::size_of;

use crate::{
    bounds::Bounds,
    error::{GeneticError, Result},
    individual::Individual,
};

/// Largest number of individuals a merged population can hold.
fn max_individuals() -> usize {
    isize::MAX as usize / size_of::<Individual>()
}

/// How much the engine reports through `tracing` while it runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    /// Every improvement of the best individual and every survivor.
    Verbose,
    /// One event per generation.
    Minimal,
    /// No events.
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_var: usize,
    bounds: Bounds,
    num_generations: usize,
    population_size: usize,
    num_children: usize,
    mutation_rate: f64,
    mutation_step: f64,
    selection_pressure: f64,
    log_level: LogLevel,
    /// Minimum number of offspring to evaluate in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    /// Number of decision variables (`num_var`).
    pub fn get_num_var(&self) -> usize {
        self.num_var
    }

    pub fn get_bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Number of generations to run (`maxit`).
    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    /// Population size kept between generations (`npop`).
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    /// Offspring produced per generation.
    pub fn get_num_children(&self) -> usize {
        self.num_children
    }

    /// Per-gene mutation probability (`mu`).
    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    /// Standard deviation of the mutation noise (`sigma`).
    pub fn get_mutation_step(&self) -> f64 {
        self.mutation_step
    }

    /// Selection pressure coefficient (`beta`).
    pub fn get_selection_pressure(&self) -> f64 {
        self.selection_pressure
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum number of offspring to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` naming the first offending
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.num_var == 0 {
            return Err(GeneticError::InvalidConfiguration(
                "Number of variables must be at least 1".to_string(),
            ));
        }

        self.bounds.validate(self.num_var)?;

        if self.population_size < 2 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }

        if self.num_children % 2 != 0 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Number of children must be even, got {}",
                self.num_children
            )));
        }

        let merged = self.population_size.checked_add(self.num_children);
        if merged.map_or(true, |total| total > max_individuals()) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Population size {} plus {} children exceeds the limit of {} individuals",
                self.population_size,
                self.num_children,
                max_individuals()
            )));
        }

        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }

        if !self.mutation_step.is_finite() || self.mutation_step < 0.0 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Mutation step size must be finite and non-negative, got {}",
                self.mutation_step
            )));
        }

        if !self.selection_pressure.is_finite() || self.selection_pressure <= 0.0 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Selection pressure must be finite and positive, got {}",
                self.selection_pressure
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
            num_var: 5,
            bounds: Bounds::default(),
            num_generations: 501,
            population_size: 20,
            num_children: 20,
            mutation_rate: 0.2,
            mutation_step: 0.1,
            selection_pressure: 1.0,
            log_level: LogLevel::None,
            parallel_threshold: 1000, // Default parallel threshold
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset parameters take the values of [`EvolutionOptions::default`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_var: Option<usize>,
    bounds: Option<Bounds>,
    num_generations: Option<usize>,
    population_size: Option<usize>,
    num_children: Option<usize>,
    children_proportion: Option<f64>,
    mutation_rate: Option<f64>,
    mutation_step: Option<f64>,
    selection_pressure: Option<f64>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of decision variables.
    pub fn num_var(mut self, value: usize) -> Self {
        self.num_var = Some(value);
        self
    }

    /// Sets the box bounds.
    pub fn bounds(mut self, value: Bounds) -> Self {
        self.bounds = Some(value);
        self
    }

    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of offspring per generation. Overrides `children_proportion`.
    pub fn num_children(mut self, value: usize) -> Self {
        self.num_children = Some(value);
        self
    }

    /// Derives the number of offspring as `round(proportion * population_size / 2) * 2`,
    /// which is always even.
    pub fn children_proportion(mut self, value: f64) -> Self {
        self.children_proportion = Some(value);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the standard deviation of the mutation noise.
    pub fn mutation_step(mut self, value: f64) -> Self {
        self.mutation_step = Some(value);
        self
    }

    /// Sets the selection pressure.
    pub fn selection_pressure(mut self, value: f64) -> Self {
        self.selection_pressure = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` if the resulting options are
    /// invalid, or if `children_proportion` is negative or not finite.
    pub fn build(self) -> Result<EvolutionOptions> {
        let defaults = EvolutionOptions::default();
        let population_size = self.population_size.unwrap_or(defaults.population_size);

        let num_children = match (self.num_children, self.children_proportion) {
            (Some(num_children), _) => num_children,
            (None, Some(proportion)) => {
                if !proportion.is_finite() || proportion < 0.0 {
                    return Err(GeneticError::InvalidConfiguration(format!(
                        "Children proportion must be finite and non-negative, got {}",
                        proportion
                    )));
                }
                ((proportion * population_size as f64 / 2.0).round() as usize)
                    .checked_mul(2)
                    .ok_or_else(|| {
                        GeneticError::InvalidConfiguration(format!(
                            "Children proportion {} yields too many children",
                            proportion
                        ))
                    })?
            }
            (None, None) => defaults.num_children,
        };

        let options = EvolutionOptions {
            num_var: self.num_var.unwrap_or(defaults.num_var),
            bounds: self.bounds.unwrap_or(defaults.bounds),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            population_size,
            num_children,
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            mutation_step: self.mutation_step.unwrap_or(defaults.mutation_step),
            selection_pressure: self
                .selection_pressure
                .unwrap_or(defaults.selection_pressure),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };

        options.validate()?;
        Ok(options)
    }
}
