use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meeus_ephem::kepler::solve_kepler_equation;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn bench_cases(c: &mut Criterion, name: &str, seed: u64, ecc: std::ops::Range<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let samples = 10_000usize;

    c.bench_function(name, |b| {
        b.iter_batched(
            || {
                // inputs generated outside the timed section
                (0..samples)
                    .map(|_| (rng.random_range(ecc.clone()), rand_angle(&mut rng)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (e, m) in cases {
                    black_box(solve_kepler_equation(black_box(e), black_box(m)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Planetary regime: e ∈ [0.0, 0.25]
fn bench_planetary(c: &mut Criterion) {
    bench_cases(c, "solve_kepler_equation/planetary_e<0.25", 0xDEADBEEF, 0.0..0.25);
}

/// High eccentricity: e ∈ [0.7, 0.9]
fn bench_high_e(c: &mut Criterion) {
    bench_cases(c, "solve_kepler_equation/high_e_0.7..0.9", 0xBADF00D, 0.7..0.9);
}

/// Slow convergence near the perihelion of a very eccentric orbit
fn bench_fixed_stress(c: &mut Criterion) {
    let e = 0.97_f64;
    let m = 0.05_f64;

    c.bench_function("solve_kepler_equation/fixed_stress_case", |b| {
        b.iter(|| black_box(solve_kepler_equation(black_box(e), black_box(m))))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_fixed_stress
);
criterion_main!(benches);
