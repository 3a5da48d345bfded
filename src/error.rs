//! # Error Types
//!
//! This module defines the error type returned by every fallible operation of
//! the optimizer. Configuration problems are reported before the first
//! generation runs; a run that fails mid-way is aborted as a whole.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use realga::error::{GeneticError, Result};
//!
//! fn check_rate(mu: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&mu) {
//!         return Err(GeneticError::InvalidConfiguration(format!(
//!             "mutation rate must lie in [0, 1], got {}",
//!             mu
//!         )));
//!     }
//!     Ok(mu)
//! }
//!
//! assert!(check_rate(0.2).is_ok());
//! assert!(check_rate(1.5).is_err());
//! ```
//!
//! Using the `ResultExt` trait inside a fallible cost function:
//!
//! ```rust
//! use realga::error::{Result, ResultExt};
//!
//! fn weighted_cost(position: &[f64], weight: &str) -> Result<f64> {
//!     let weight: f64 = weight.parse().context("Failed to parse cost weight")?;
//!     Ok(weight * position.iter().map(|x| x * x).sum::<f64>())
//! }
//!
//! assert!(weighted_cost(&[1.0], "2.0").is_ok());
//! assert!(weighted_cost(&[1.0], "two").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use realga::error::{GeneticError, OptionExt};
//!
//! fn lowest(costs: &[f64]) -> realga::error::Result<f64> {
//!     costs.iter().cloned().reduce(f64::min).ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(lowest(&[3.0, 1.0]).unwrap(), 1.0);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the optimizer.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// The run configuration violates a precondition. Raised before any
    /// generation runs.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every selection weight of a generation is zero, so no parent can be drawn.
    #[error("Degenerate selection: {0}")]
    DegenerateSelection(String),

    /// Error reported by a fallible cost function.
    #[error("Cost function error: {0}")]
    CostFunction(String),

    /// Two position vectors that must have equal length do not.
    #[error("Dimension mismatch: expected {expected} genes, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// An invariant of the evolution process was broken.
    #[error("Evolution error: {0}")]
    Evolution(String),
}

/// A specialized Result type for optimizer operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// Meant for fallible cost functions: a foreign error is converted into
/// [`GeneticError::CostFunction`], which the engine then returns unchanged.
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// ## Arguments
    ///
    /// * `context` - A string providing context for the error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::CostFunction(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result, using `err_fn` to build the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
