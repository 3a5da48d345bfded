use std::sync::Mutex;

use realga::{
    bounds::Bounds,
    cost::{sphere, Fallible},
    error::{GeneticError, Result, ResultExt},
    evolution::{EvolutionLauncher, EvolutionOptions},
    rng::RandomNumberGenerator,
};

/// Cost function that remembers every position it was asked to score.
struct RecordingSphere {
    seen: Mutex<Vec<Vec<f64>>>,
}

impl RecordingSphere {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl realga::cost::CostFunction for RecordingSphere {
    fn cost(&self, position: &[f64]) -> Result<f64> {
        self.seen.lock().unwrap().push(position.to_vec());
        Ok(sphere(position))
    }
}

fn aggressive_options(parallel_threshold: usize) -> EvolutionOptions {
    EvolutionOptions::builder()
        .num_var(3)
        .bounds(Bounds::new(vec![-1.0, 0.0, 2.0], vec![1.0, 0.5, 8.0]))
        .population_size(10)
        .num_children(8)
        .num_generations(25)
        .mutation_rate(0.8)
        .mutation_step(5.0)
        .parallel_threshold(parallel_threshold)
        .build()
        .unwrap()
}

#[test]
fn test_bounded() {
    for parallel_threshold in [usize::MAX, 0] {
        let options = aggressive_options(parallel_threshold);
        let launcher = EvolutionLauncher::with_ordinary_strategy(RecordingSphere::new());

        let result = launcher
            .evolve(&options, &mut RandomNumberGenerator::from_seed(31))
            .unwrap();

        let seen = launcher.cost_fn().seen.lock().unwrap();
        // Every individual is scored exactly once: the initial population plus
        // the offspring of every generation.
        assert_eq!(seen.len(), 10 + 25 * 8);
        for position in seen.iter() {
            assert!(
                options.get_bounds().contains(position).unwrap(),
                "evaluated out-of-bounds position {:?}",
                position
            );
        }
        for individual in result.population.iter() {
            assert!(options.get_bounds().contains(individual.position()).unwrap());
        }
    }
}

#[test]
fn test_population_size_is_restored_every_generation() {
    let options = aggressive_options(usize::MAX);
    let launcher = EvolutionLauncher::with_ordinary_strategy(sphere);
    let mut sizes = Vec::new();

    let result = launcher
        .evolve_with_observer(&options, &mut RandomNumberGenerator::from_seed(8), |report| {
            sizes.push(report.population_size)
        })
        .unwrap();

    assert_eq!(sizes, vec![10; 25]);
    assert_eq!(result.population.len(), 10);
}

#[test]
fn test_best_cost_history_never_increases() {
    let options = EvolutionOptions::builder()
        .num_var(4)
        .num_generations(100)
        .mutation_rate(0.5)
        .mutation_step(1.0)
        .build()
        .unwrap();
    let launcher = EvolutionLauncher::with_ordinary_strategy(sphere);
    let mut reports = Vec::new();

    let result = launcher
        .evolve_with_observer(&options, &mut RandomNumberGenerator::from_seed(12), |report| {
            reports.push(report.clone())
        })
        .unwrap();

    assert_eq!(result.best_costs.len(), 100);
    assert!(result.best_costs.windows(2).all(|w| w[0] >= w[1]));
    for (report, best) in reports.iter().zip(&result.best_costs) {
        assert_eq!(report.best_cost, *best);
        assert_eq!(report.population_best_cost, *best);
        assert!(report.mean_cost >= report.population_best_cost);
    }

    let costs = result.population.costs().unwrap();
    assert!(costs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_equal_costs_do_not_degenerate() {
    let options = EvolutionOptions::builder()
        .num_var(2)
        .num_generations(10)
        .selection_pressure(50.0)
        .build()
        .unwrap();
    let launcher = EvolutionLauncher::with_ordinary_strategy(|_: &[f64]| 3.0);

    let result = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(2))
        .unwrap();
    assert_eq!(result.best_costs, vec![3.0; 10]);
}

#[test]
fn test_underflowing_weights_are_degenerate() {
    let options = EvolutionOptions::builder()
        .num_var(2)
        .num_generations(10)
        .selection_pressure(1e4)
        .build()
        .unwrap();
    let launcher = EvolutionLauncher::with_ordinary_strategy(|_: &[f64]| 1.0);

    let result = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(2));
    assert!(matches!(result, Err(GeneticError::DegenerateSelection(_))));
}

#[test]
fn test_cost_function_error_is_propagated() {
    let options = EvolutionOptions::builder()
        .num_var(1)
        .num_generations(5)
        .build()
        .unwrap();
    let launcher = EvolutionLauncher::with_ordinary_strategy(Fallible(|x: &[f64]| -> Result<f64> {
        if x[0] > 0.0 {
            return Err(GeneticError::CostFunction(format!("rejected {}", x[0])));
        }
        Ok(x[0].abs())
    }));

    let result = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(6));
    match result {
        Err(GeneticError::CostFunction(msg)) => assert!(msg.starts_with("rejected ")),
        other => panic!("Expected CostFunction error, got {:?}", other),
    }
}

#[test]
fn test_cost_function_context_error() {
    let options = EvolutionOptions::builder().num_var(1).build().unwrap();
    let launcher = EvolutionLauncher::with_ordinary_strategy(Fallible(|x: &[f64]| -> Result<f64> {
        let scale: f64 = "not-a-number".parse::<f64>().context("Failed to read scale")?;
        Ok(scale * x[0])
    }));

    let result = launcher.evolve(&options, &mut RandomNumberGenerator::from_seed(6));
    match result {
        Err(GeneticError::CostFunction(msg)) => assert!(msg.contains("Failed to read scale")),
        other => panic!("Expected CostFunction error, got {:?}", other),
    }
}

#[test]
fn test_nan_costs_are_disfavored() {
    let options = EvolutionOptions::builder()
        .num_var(1)
        .num_generations(50)
        .build()
        .unwrap();
    let launcher = EvolutionLauncher::with_ordinary_strategy(|x: &[f64]| {
        if x[0] > 0.0 {
            f64::NAN
        } else {
            x[0].powi(2)
        }
    });

    let result = launcher
        .evolve(&options, &mut RandomNumberGenerator::from_seed(21))
        .unwrap();

    assert!(result.best.cost().unwrap().is_finite());
    assert!(result.best_costs.iter().all(|c| c.is_finite()));
}
