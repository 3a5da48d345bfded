use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Gaussian gene mutation.
///
/// Each gene is independently selected with probability `mu` and receives
/// additive noise drawn from `N(0, sigma^2)`. Genes that are not selected are
/// left untouched.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianMutation {
    mu: f64,
    sigma: f64,
}

impl GaussianMutation {
    /// Creates a mutation operator with gene rate `mu` and step size `sigma`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidConfiguration` if `mu` is outside `[0, 1]`
    /// or `sigma` is negative or not finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&mu) {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                mu
            )));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(GeneticError::InvalidConfiguration(format!(
                "Mutation step size must be finite and non-negative, got {}",
                sigma
            )));
        }
        Ok(Self { mu, sigma })
    }

    pub fn rate(&self) -> f64 {
        self.mu
    }

    pub fn step(&self) -> f64 {
        self.sigma
    }

    /// Returns a mutated copy of `individual`; the input is not modified.
    ///
    /// The copy keeps the input's cost only if no gene was touched.
    pub fn mutate(&self, individual: &Individual, rng: &mut RandomNumberGenerator) -> Individual {
        let mut mutant = individual.clone();
        let mut touched = false;

        for gene in mutant.position_mut() {
            // Strict comparison: mu = 0 never fires, mu = 1 always does.
            if rng.unit() < self.mu {
                *gene += self.sigma * rng.standard_normal();
                touched = true;
            }
        }

        if touched {
            mutant.clear_cost();
        }
        mutant
    }
}
