//! Whole-experiment benchmarks comparing trial scheduling strategies.
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use percolation_benches::{error::BenchSetupError, params::GridBenchParams};
use percolation_core::{ExecutionStrategy, ExperimentBuilder};

/// Base seed for every experiment.
const SEED: u64 = 0x5EED;

/// `(side, trials)` configurations to benchmark.
const CONFIGS: &[(usize, usize)] = &[(64, 32), (200, 16)];

fn experiment_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("experiment");
    group.sample_size(10);

    for &(side, trials) in CONFIGS {
        let params = GridBenchParams {
            side,
            trials: Some(trials),
        };
        for (label, strategy) in [
            ("sequential", ExecutionStrategy::Sequential),
            ("parallel", ExecutionStrategy::Parallel),
        ] {
            let experiment = ExperimentBuilder::new()
                .with_side(side)
                .with_trials(trials)
                .with_seed(SEED)
                .with_execution_strategy(strategy)
                .build()?;
            group.bench_with_input(BenchmarkId::new(label, &params), &experiment, |b, e| {
                b.iter(|| e.run());
            });
        }
    }

    group.finish();
    Ok(())
}

fn experiment(c: &mut Criterion) {
    if let Err(err) = experiment_impl(c) {
        panic!("experiment benchmark setup failed: {err}");
    }
}

criterion_group!(benches, experiment);
criterion_main!(benches);
