use crate::{
    error::{GeneticError, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
};

/// Uniform blend crossover.
///
/// For every gene `k` a coefficient `alpha_k` is drawn from `[0, 1)` and the
/// two children become
///
/// ```text
/// child1[k] = alpha_k * p1[k] + (1 - alpha_k) * p2[k]
/// child2[k] = alpha_k * p2[k] + (1 - alpha_k) * p1[k]
/// ```
///
/// Both children are unevaluated.
///
/// # Examples
///
/// ```
/// use realga::breeding::UniformCrossover;
/// use realga::individual::Individual;
///
/// let p1 = Individual::evaluated(vec![0.0, 10.0], 100.0);
/// let p2 = Individual::evaluated(vec![4.0, 0.0], 16.0);
///
/// let (c1, c2) = UniformCrossover::new().blend(&p1, &p2, &[0.25, 1.0]).unwrap();
/// assert_eq!(c1.position(), &[3.0, 10.0]);
/// assert_eq!(c2.position(), &[1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Recombines two parents with coefficients drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::DimensionMismatch` if the parents differ in length.
    pub fn crossover(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Individual, Individual)> {
        check_dimension(parent1.dimension(), parent2.dimension())?;
        let alphas = rng.fetch_uniform(0.0, 1.0, parent1.dimension());
        self.blend(parent1, parent2, &alphas)
    }

    /// Recombines two parents with the given per-gene coefficients.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::DimensionMismatch` if the parents or `alphas`
    /// differ in length.
    pub fn blend(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        alphas: &[f64],
    ) -> Result<(Individual, Individual)> {
        check_dimension(parent1.dimension(), parent2.dimension())?;
        check_dimension(parent1.dimension(), alphas.len())?;

        let (genes1, genes2): (Vec<f64>, Vec<f64>) = parent1
            .position()
            .iter()
            .zip(parent2.position())
            .zip(alphas)
            .map(|((&x1, &x2), &alpha)| {
                (
                    alpha * x1 + (1.0 - alpha) * x2,
                    alpha * x2 + (1.0 - alpha) * x1,
                )
            })
            .unzip();

        Ok((Individual::new(genes1), Individual::new(genes2)))
    }
}

fn check_dimension(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(GeneticError::DimensionMismatch { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swapping_parents_swaps_children() {
        let p1 = Individual::evaluated(vec![1.0, -2.0, 3.5], 1.0);
        let p2 = Individual::evaluated(vec![-4.0, 6.0, 0.25], 2.0);
        let alphas = [0.1, 0.5, 0.9];
        let crossover = UniformCrossover::new();

        let (a1, a2) = crossover.blend(&p1, &p2, &alphas).unwrap();
        let (b1, b2) = crossover.blend(&p2, &p1, &alphas).unwrap();

        assert_eq!(a1, b2);
        assert_eq!(a2, b1);
    }

    #[test]
    fn test_children_stay_between_parents() {
        let p1 = Individual::new(vec![-1.0, 5.0, 2.0]);
        let p2 = Individual::new(vec![1.0, 3.0, 2.0]);
        let mut rng = RandomNumberGenerator::from_seed(11);
        let crossover = UniformCrossover::new();

        for _ in 0..50 {
            let (c1, c2) = crossover.crossover(&p1, &p2, &mut rng).unwrap();
            for child in [&c1, &c2] {
                assert!(!child.is_evaluated());
                let x = child.position();
                assert!(x[0] >= -1.0 - 1e-12 && x[0] <= 1.0 + 1e-12);
                assert!(x[1] >= 3.0 - 1e-12 && x[1] <= 5.0 + 1e-12);
                assert!((x[2] - 2.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_gene_sum_is_preserved() {
        let p1 = Individual::new(vec![2.0, 7.0]);
        let p2 = Individual::new(vec![-3.0, 1.0]);
        let (c1, c2) = UniformCrossover::new()
            .blend(&p1, &p2, &[0.3, 0.8])
            .unwrap();

        for k in 0..2 {
            let parents = p1.position()[k] + p2.position()[k];
            let children = c1.position()[k] + c2.position()[k];
            assert!((parents - children).abs() < 1e-12);
        }
    }

    #[test]
    fn test_dimension_mismatch() {
        let p1 = Individual::new(vec![0.0, 1.0]);
        let p2 = Individual::new(vec![0.0]);
        let mut rng = RandomNumberGenerator::from_seed(0);
        let result = UniformCrossover::new().crossover(&p1, &p2, &mut rng);
        assert!(matches!(
            result,
            Err(GeneticError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }
}
