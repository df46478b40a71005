#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use payoff_core::{DebtRecord, Ledger, SimulationEngine};

fn sample_records() -> Vec<DebtRecord> {
    (0..16)
        .map(|i| {
            let i = i as f64;
            DebtRecord::new(
                format!("debt-{i}"),
                1_000.0 + 750.0 * i,
                0.02 * (i % 8.0),
                40.0 + 5.0 * i,
            )
        })
        .collect()
}

/// Benchmark a full payoff run over a sixteen-debt ledger.
fn benchmark_full_run(c: &mut Criterion) {
    let ledger = Ledger::build(sample_records()).unwrap();

    c.bench_function("avalanche_full_run", |b| {
        b.iter(|| {
            let engine = SimulationEngine::new(ledger.clone(), 150.0);
            black_box(engine.run());
        })
    });
}

criterion_group!(benches, benchmark_full_run);
criterion_main!(benches);
