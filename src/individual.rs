//! # Individual
//!
//! An `Individual` is one candidate solution: a position vector and the cost
//! the cost function assigned to it. The cost is `None` until the individual
//! has been evaluated.
//!
//! Cloning an individual clones its position, so mutating one individual
//! never affects another.
//!
//! ## Example
//!
//! ```rust
//! use realga::individual::Individual;
//!
//! let child = Individual::new(vec![1.0, -2.0]);
//! assert!(!child.is_evaluated());
//!
//! let scored = Individual::evaluated(vec![1.0, -2.0], 5.0);
//! assert_eq!(scored.cost(), Some(5.0));
//! ```

/// A candidate solution of the optimization problem.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    position: Vec<f64>,
    cost: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual at `position`.
    pub fn new(position: Vec<f64>) -> Self {
        Self {
            position,
            cost: None,
        }
    }

    /// Creates an individual whose cost is already known.
    pub fn evaluated(position: Vec<f64>, cost: f64) -> Self {
        Self {
            position,
            cost: Some(cost),
        }
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Mutable access to the genes. Changing them does not reset the cost;
    /// callers that move an evaluated individual must call [`Individual::clear_cost`].
    pub fn position_mut(&mut self) -> &mut [f64] {
        &mut self.position
    }

    pub fn into_position(self) -> Vec<f64> {
        self.position
    }

    /// Number of genes.
    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = Some(cost);
    }

    pub fn clear_cost(&mut self) {
        self.cost = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_deep() {
        let original = Individual::evaluated(vec![1.0, 2.0, 3.0], 14.0);
        let mut copy = original.clone();
        copy.position_mut()[0] = 100.0;
        copy.clear_cost();

        assert_eq!(original.position(), &[1.0, 2.0, 3.0]);
        assert_eq!(original.cost(), Some(14.0));
        assert!(!copy.is_evaluated());
    }

    #[test]
    fn test_set_cost() {
        let mut individual = Individual::new(vec![0.5]);
        assert_eq!(individual.cost(), None);
        individual.set_cost(0.25);
        assert_eq!(individual.cost(), Some(0.25));
        assert_eq!(individual.dimension(), 1);
    }
}
