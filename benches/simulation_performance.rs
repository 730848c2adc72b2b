use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use pitcool::simulation::{RACE_DURATION_MIN, metrics};
use pitcool::{circuits, simulate_with_rng};

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    group.bench_function("simulate_single_race", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| black_box(simulate_with_rng("Interlagos", &mut rng)));
    });

    group.bench_function("simulate_full_calendar", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            for circuit in circuits::all() {
                black_box(simulate_with_rng(circuit.name, &mut rng));
            }
        });
    });

    group.finish();
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    let mut rng = StdRng::seed_from_u64(0);
    let run = simulate_with_rng("Interlagos", &mut rng);

    group.bench_function("mean_and_performance", |b| {
        b.iter(|| {
            let mean = black_box(run.mean_with_cooling());
            black_box(metrics::performance_pct(mean));
        });
    });

    group.bench_function("co2_reduction", |b| {
        b.iter(|| black_box(metrics::co2_reduction_kg(3800, RACE_DURATION_MIN)));
    });

    group.finish();
}

criterion_group!(benches, bench_simulation, bench_metrics);
criterion_main!(benches);
