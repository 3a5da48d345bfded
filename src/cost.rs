//! # CostFunction
//!
//! The objective being minimized. Lower cost is better.
//!
//! Any `Fn(&[f64]) -> f64` closure or function is a cost function. A cost
//! function that can fail is wrapped in [`Fallible`]; the error it returns is
//! handed back to the caller of the run unchanged.
//!
//! ## Example
//!
//! ```rust
//! use realga::cost::{sphere, CostFunction, Fallible};
//! use realga::error::GeneticError;
//!
//! assert_eq!(sphere.cost(&[1.0, 2.0]).unwrap(), 5.0);
//!
//! let guarded = Fallible(|x: &[f64]| {
//!     if x[0] < 0.0 {
//!         return Err(GeneticError::CostFunction("negative input".to_string()));
//!     }
//!     Ok(x[0].sqrt())
//! });
//! assert!(guarded.cost(&[-1.0]).is_err());
//! ```

use crate::error::Result;

/// An objective mapping a position to a scalar cost.
///
/// The engine evaluates each individual exactly once and may evaluate a batch
/// of offspring on several threads, hence the `Send + Sync` bound.
pub trait CostFunction: Send + Sync {
    fn cost(&self, position: &[f64]) -> Result<f64>;
}

impl<F> CostFunction for F
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn cost(&self, position: &[f64]) -> Result<f64> {
        Ok(self(position))
    }
}

/// Adapter for cost functions that return a `Result`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F> CostFunction for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn cost(&self, position: &[f64]) -> Result<f64> {
        (self.0)(position)
    }
}

/// The sphere function `sum(x_k^2)`, minimized at the origin.
pub fn sphere(position: &[f64]) -> f64 {
    position.iter().map(|x| x * x).sum()
}
