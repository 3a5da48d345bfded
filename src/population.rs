//! # Population
//!
//! The ordered set of individuals being evolved. A population handed out by
//! the engine always has exactly `npop` members, every one of them evaluated.
//! While offspring are merged in, it temporarily holds more; ranking and
//! truncation bring it back to `npop`.
//!
//! Ranking is a complete, stable sort ascending by cost. Individuals with a
//! NaN cost are placed after every other individual.

use std::cmp::Ordering;
use std::ops::Index;

use crate::{
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
};

/// Orders two costs ascending, with NaN after every number.
pub fn compare_costs(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| {
        if a.is_nan() && b.is_nan() {
            Ordering::Equal
        } else if a.is_nan() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    })
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a population from evaluated individuals, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Evolution` if any individual has no cost.
    pub fn new(individuals: Vec<Individual>) -> Result<Self> {
        if let Some(index) = individuals.iter().position(|ind| !ind.is_evaluated()) {
            return Err(GeneticError::Evolution(format!(
                "Individual {} has not been evaluated",
                index
            )));
        }
        Ok(Self { individuals })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn into_vec(self) -> Vec<Individual> {
        self.individuals
    }

    /// The cost of every member, in population order.
    pub fn costs(&self) -> Result<Vec<f64>> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(index, ind)| {
                ind.cost().ok_or_else_genetic(|| {
                    GeneticError::Evolution(format!(
                        "Individual {} has not been evaluated",
                        index
                    ))
                })
            })
            .collect()
    }

    /// Arithmetic mean of the member costs.
    pub fn mean_cost(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        let costs = self.costs()?;
        Ok(costs.iter().sum::<f64>() / costs.len() as f64)
    }

    /// The lowest-cost member, regardless of the current ordering.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().min_by(|a, b| {
            compare_costs(
                a.cost().unwrap_or(f64::NAN),
                b.cost().unwrap_or(f64::NAN),
            )
        })
    }

    /// Appends evaluated offspring after the current members.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Evolution` if any offspring has no cost; the
    /// population is left unchanged in that case.
    pub fn extend(&mut self, offspring: Vec<Individual>) -> Result<()> {
        if offspring.iter().any(|child| !child.is_evaluated()) {
            return Err(GeneticError::Evolution(
                "Cannot merge unevaluated offspring into the population".to_string(),
            ));
        }
        self.individuals.extend(offspring);
        Ok(())
    }

    /// Sorts the members ascending by cost. Equal costs keep their relative order.
    pub fn rank(&mut self) {
        self.individuals.sort_by(|a, b| {
            compare_costs(
                a.cost().unwrap_or(f64::NAN),
                b.cost().unwrap_or(f64::NAN),
            )
        });
    }

    /// Keeps the first `size` members.
    pub fn truncate(&mut self, size: usize) {
        self.individuals.truncate(size);
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
