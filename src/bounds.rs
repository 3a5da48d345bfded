//! # Bounds
//!
//! Box bounds of the search space. Each side is either a scalar that applies
//! to every dimension or a vector with one value per dimension.
//!
//! ## Example
//!
//! ```rust
//! use realga::bounds::Bounds;
//!
//! let bounds = Bounds::new(-1.0, vec![1.0, 2.0]);
//! bounds.validate(2).unwrap();
//!
//! let mut position = vec![-3.0, 3.0];
//! bounds.clamp(&mut position).unwrap();
//! assert_eq!(position, vec![-1.0, 2.0]);
//! ```

use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// One side of the search box.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    /// The same limit for every dimension.
    Scalar(f64),
    /// One limit per dimension.
    PerDimension(Vec<f64>),
}

impl Bound {
    /// Returns the limit that applies to dimension `k`, or `None` if a
    /// per-dimension bound has no entry for it.
    pub fn at(&self, k: usize) -> Option<f64> {
        match self {
            Bound::Scalar(value) => Some(*value),
            Bound::PerDimension(values) => values.get(k).copied(),
        }
    }

    /// Number of dimensions a per-dimension bound covers.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Bound::Scalar(_) => None,
            Bound::PerDimension(values) => Some(values.len()),
        }
    }

    fn check_len(&self, side: &str, num_var: usize) -> Result<()> {
        match self {
            Bound::PerDimension(values) if values.len() != num_var => {
                Err(GeneticError::InvalidConfiguration(format!(
                    "{} bound has {} entries but the problem has {} variables",
                    side,
                    values.len(),
                    num_var
                )))
            }
            _ => Ok(()),
        }
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Scalar(value)
    }
}

impl From<Vec<f64>> for Bound {
    fn from(values: Vec<f64>) -> Self {
        Bound::PerDimension(values)
    }
}

impl From<&[f64]> for Bound {
    fn from(values: &[f64]) -> Self {
        Bound::PerDimension(values.to_vec())
    }
}

/// Lower (`varmin`) and upper (`varmax`) limits of the search box.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Bound,
    upper: Bound,
}

impl Bounds {
    pub fn new(lower: impl Into<Bound>, upper: impl Into<Bound>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    pub fn lower(&self) -> &Bound {
        &self.lower
    }

    pub fn upper(&self) -> &Bound {
        &self.upper
    }

    /// Checks the bounds against a problem with `num_var` variables.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` if a per-dimension side has
    /// the wrong length, a limit is not finite, or `lower > upper` in any dimension.
    pub fn validate(&self, num_var: usize) -> Result<()> {
        self.lower.check_len("Lower", num_var)?;
        self.upper.check_len("Upper", num_var)?;

        for (k, (lower, upper)) in self.limits(num_var).enumerate() {
            if !lower.is_finite() || !upper.is_finite() {
                return Err(GeneticError::InvalidConfiguration(format!(
                    "Bounds of variable {} must be finite, got [{}, {}]",
                    k, lower, upper
                )));
            }
            if lower > upper {
                return Err(GeneticError::InvalidConfiguration(format!(
                    "Lower bound exceeds upper bound for variable {}: {} > {}",
                    k, lower, upper
                )));
            }
        }

        Ok(())
    }

    /// Clamps every gene of `position` into its `[lower, upper]` interval.
    ///
    /// A NaN gene is moved to the lower bound.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::DimensionMismatch` if a per-dimension side does
    /// not cover exactly `position.len()` variables.
    pub fn clamp(&self, position: &mut [f64]) -> Result<()> {
        let num_var = position.len();
        self.check_dimension(num_var)?;
        for (gene, (lower, upper)) in position.iter_mut().zip(self.limits(num_var)) {
            *gene = gene.max(lower).min(upper);
        }
        Ok(())
    }

    /// Returns `true` if every gene lies inside the box.
    ///
    /// # Errors
    ///
    /// As [`Bounds::clamp`].
    pub fn contains(&self, position: &[f64]) -> Result<bool> {
        self.check_dimension(position.len())?;
        Ok(position
            .iter()
            .zip(self.limits(position.len()))
            .all(|(gene, (lower, upper))| *gene >= lower && *gene <= upper))
    }

    /// Draws a position uniformly from the box.
    ///
    /// # Errors
    ///
    /// As [`Bounds::clamp`], for a position of `num_var` variables.
    pub fn sample(&self, num_var: usize, rng: &mut RandomNumberGenerator) -> Result<Vec<f64>> {
        self.check_dimension(num_var)?;
        Ok(self
            .limits(num_var)
            .map(|(lower, upper)| rng.uniform(lower, upper))
            .collect())
    }

    fn check_dimension(&self, found: usize) -> Result<()> {
        for expected in [self.lower.dimension(), self.upper.dimension()]
            .into_iter()
            .flatten()
        {
            if expected != found {
                return Err(GeneticError::DimensionMismatch { expected, found });
            }
        }
        Ok(())
    }

    /// Pairs of `(lower, upper)` for the first `num_var` dimensions. Stops early
    /// at the end of a shorter per-dimension side.
    fn limits(&self, num_var: usize) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..num_var).map_while(|k| Some((self.lower.at(k)?, self.upper.at(k)?)))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}
