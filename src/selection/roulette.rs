use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Fitness-proportional (roulette wheel) parent selection.
///
/// Each index is drawn with probability proportional to its weight. Draws
/// are made with replacement: the same index may come up any number of times.
///
/// Weights for a minimization problem come from [`selection_weights`], which
/// turns low costs into large weights.
///
/// # Examples
///
/// ```
/// use realga::rng::RandomNumberGenerator;
/// use realga::selection::{selection_weights, RouletteWheelSelection};
///
/// let weights = selection_weights(&[1.0, 2.0, 3.0], 1.0);
/// let mut rng = RandomNumberGenerator::from_seed(42);
///
/// let selection = RouletteWheelSelection::new();
/// let index = selection.select(&weights, &mut rng).unwrap();
/// assert!(index < weights.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    pub fn new() -> Self {
        Self
    }

    /// Computes the running sum of `weights`.
    ///
    /// # Errors
    ///
    /// - `GeneticError::EmptyPopulation` if `weights` is empty.
    /// - `GeneticError::InvalidConfiguration` if a weight is negative or NaN.
    /// - `GeneticError::DegenerateSelection` if every weight is zero.
    pub fn cumulative_weights(&self, weights: &[f64]) -> Result<Vec<f64>> {
        if weights.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if let Some(index) = weights.iter().position(|w| w.is_nan() || *w < 0.0) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Roulette wheel selection requires non-negative weights, weight {} is {}",
                index, weights[index]
            )));
        }

        let cumulative: Vec<f64> = weights
            .iter()
            .scan(0.0, |sum, w| {
                *sum += w;
                Some(*sum)
            })
            .collect();

        // Non-empty, checked above.
        let total = cumulative[cumulative.len() - 1];
        if total <= 0.0 {
            return Err(GeneticError::DegenerateSelection(format!(
                "All {} selection weights are zero",
                weights.len()
            )));
        }

        Ok(cumulative)
    }

    /// Returns the smallest index `i` with `cumulative[i] >= r`.
    ///
    /// `r` is expected in `[0, total)`. If rounding pushes it past every entry,
    /// the last index whose weight is positive is returned. An infinite total
    /// always selects the first infinite entry.
    pub fn pick(&self, cumulative: &[f64], r: f64) -> usize {
        if let Some(index) = cumulative.iter().position(|c| c.is_infinite()) {
            if r.is_nan() || r.is_infinite() {
                return index;
            }
        }

        if let Some(index) = cumulative.iter().position(|&c| c >= r) {
            return index;
        }

        // Last index where the running sum still grew.
        (1..cumulative.len())
            .rev()
            .find(|&i| cumulative[i] > cumulative[i - 1])
            .unwrap_or(0)
    }

    /// Draws an index from precomputed cumulative weights.
    ///
    /// Used by the engine, which computes the cumulative weights once per
    /// generation and draws many parents from them.
    pub fn select_from_cumulative(
        &self,
        cumulative: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> usize {
        let total = cumulative.last().copied().unwrap_or(0.0);
        let r = total * rng.unit();
        self.pick(cumulative, r)
    }

    /// Draws one index with probability proportional to its weight.
    ///
    /// # Errors
    ///
    /// See [`RouletteWheelSelection::cumulative_weights`].
    pub fn select(&self, weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        let cumulative = self.cumulative_weights(weights)?;
        Ok(self.select_from_cumulative(&cumulative, rng))
    }
}

/// Derives selection weights from costs: `exp(-beta * cost / mean_cost)`.
///
/// Unlike a plain population mean, the mean here is taken over the finite
/// costs only. When it is exactly zero, or no cost is finite, costs are used
/// without normalization. A weight that comes out as NaN (for example from an infinite cost) is replaced by zero, so a
/// non-finite cost is never preferred.
///
/// Larger `beta` concentrates the selection on the lowest costs.
pub fn selection_weights(costs: &[f64], beta: f64) -> Vec<f64> {
    let finite: Vec<f64> = costs.iter().copied().filter(|c| c.is_finite()).collect();
    let mean = if finite.is_empty() {
        0.0
    } else {
        finite.iter().sum::<f64>() / finite.len() as f64
    };

    costs
        .iter()
        .map(|&cost| {
            let normalized = if mean != 0.0 { cost / mean } else { cost };
            let weight = (-beta * normalized).exp();
            if weight.is_nan() {
                0.0
            } else {
                weight
            }
        })
        .collect()
}
