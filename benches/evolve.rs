//! Benchmarks for automaton evolution.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use toroidal_life::{
    compute::Neighborhood,
    schema::{BuiltinPattern, Pattern, Seed, SimulationConfig},
};

fn random_seed() -> Seed {
    Seed {
        pattern: Pattern::Random {
            density: 0.35,
            seed: Some(0x5eed),
        },
    }
}

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");

    for size in [64, 128, 256, 512] {
        let config = SimulationConfig {
            width: size,
            height: size,
            ..Default::default()
        };
        let mut automaton = random_seed().build(&config).expect("seed builds");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut automaton).evolve();
                });
            },
        );
    }

    group.finish();
}

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhood");

    for neighborhood in [Neighborhood::Moore, Neighborhood::VonNeumann] {
        let config = SimulationConfig {
            width: 256,
            height: 256,
            neighborhood,
            ..Default::default()
        };
        let mut automaton = random_seed().build(&config).expect("seed builds");

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", neighborhood)),
            &neighborhood,
            |b, _| {
                b.iter(|| {
                    black_box(&mut automaton).evolve();
                });
            },
        );
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [64, 256] {
        let config = SimulationConfig {
            width: size,
            height: size,
            ..Default::default()
        };
        let seed = Seed {
            pattern: Pattern::Builtin {
                name: BuiltinPattern::Pulsar,
            },
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| seed.build(black_box(&config)).expect("seed builds"));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_evolve, bench_neighborhood, bench_construction);
criterion_main!(benches);
