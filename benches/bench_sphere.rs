use criterion::{black_box, criterion_group, criterion_main, Criterion};
use realga::{cost::sphere, evolution::EvolutionOptions, rng::RandomNumberGenerator};

fn bench_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_run");
    for size in [10, 50, 200].iter() {
        let options = EvolutionOptions::builder()
            .num_var(5)
            .population_size(*size)
            .children_proportion(1.0)
            .num_generations(100)
            .build()
            .unwrap();

        group.bench_function(format!("sphere_npop_{}", size), |b| {
            let mut rng = RandomNumberGenerator::from_seed(42);
            b.iter(|| {
                let result = realga::run(sphere, black_box(&options), black_box(&mut rng));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sphere);
criterion_main!(benches);
