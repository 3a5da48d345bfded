use crate::{individual::Individual, population::compare_costs};

/// Keeps the lowest-cost individual seen during a run and the best cost at
/// the end of every generation.
///
/// The tracked cost never increases: an individual replaces the current best
/// only if its cost ranks strictly lower (NaN ranks after every number).
#[derive(Debug, Clone, Default)]
pub struct BestTracker {
    best: Option<Individual>,
    history: Vec<f64>,
}

impl BestTracker {
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            best: None,
            history: Vec::with_capacity(generations),
        }
    }

    /// Offers an evaluated individual. Returns `true` if it became the new best.
    ///
    /// Unevaluated individuals are ignored.
    pub fn observe(&mut self, candidate: &Individual) -> bool {
        let Some(cost) = candidate.cost() else {
            return false;
        };

        let improves = match self.best_cost() {
            None => true,
            Some(best) => compare_costs(cost, best).is_lt(),
        };

        if improves {
            self.best = Some(candidate.clone());
        }
        improves
    }

    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    pub fn best_cost(&self) -> Option<f64> {
        self.best.as_ref().and_then(Individual::cost)
    }

    /// Appends the current best cost to the history. Does nothing before the
    /// first observation.
    pub fn record_generation(&mut self) {
        if let Some(cost) = self.best_cost() {
            self.history.push(cost);
        }
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn into_parts(self) -> (Option<Individual>, Vec<f64>) {
        (self.best, self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_seeds_best() {
        let mut tracker = BestTracker::default();
        assert!(tracker.best().is_none());
        assert!(tracker.observe(&Individual::evaluated(vec![3.0], 9.0)));
        assert_eq!(tracker.best_cost(), Some(9.0));
    }

    #[test]
    fn test_only_strict_improvements_replace() {
        let mut tracker = BestTracker::default();
        tracker.observe(&Individual::evaluated(vec![3.0], 9.0));
        assert!(!tracker.observe(&Individual::evaluated(vec![-3.0], 9.0)));
        assert!(!tracker.observe(&Individual::evaluated(vec![4.0], 16.0)));
        assert_eq!(tracker.best().unwrap().position(), &[3.0]);

        assert!(tracker.observe(&Individual::evaluated(vec![1.0], 1.0)));
        assert_eq!(tracker.best().unwrap().position(), &[1.0]);
    }

    #[test]
    fn test_nan_best_is_replaced_by_number() {
        let mut tracker = BestTracker::default();
        tracker.observe(&Individual::evaluated(vec![0.0], f64::NAN));
        assert!(tracker.observe(&Individual::evaluated(vec![1.0], 1e9)));
        assert!(!tracker.observe(&Individual::evaluated(vec![2.0], f64::NAN)));
        assert_eq!(tracker.best_cost(), Some(1e9));
    }

    #[test]
    fn test_unevaluated_is_ignored() {
        let mut tracker = BestTracker::default();
        assert!(!tracker.observe(&Individual::new(vec![0.0])));
        tracker.record_generation();
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn test_best_is_a_copy() {
        let mut tracker = BestTracker::default();
        let mut individual = Individual::evaluated(vec![2.0], 4.0);
        tracker.observe(&individual);
        individual.position_mut()[0] = 100.0;
        assert_eq!(tracker.best().unwrap().position(), &[2.0]);
    }

    #[test]
    fn test_history_is_non_increasing() {
        let mut tracker = BestTracker::with_capacity(4);
        for cost in [5.0, 7.0, 2.0, 3.0] {
            tracker.observe(&Individual::evaluated(vec![cost], cost));
            tracker.record_generation();
        }
        assert_eq!(tracker.history(), &[5.0, 5.0, 2.0, 2.0]);
    }
}
