//! Benchmarks of the full ephemeris computation
//!
//!   cargo bench --bench ephem_bench
//!   cargo bench --bench ephem_bench -- ephem/all_bodies

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meeus_ephem::bodies::Body;
use meeus_ephem::ephem::{ephem, EphemParams};
use meeus_ephem::ephemeris::Ephemeris;
use meeus_ephem::ref_system::{CoordForm, RefFrame};

const JD_2000: f64 = 2451544.5;

/// Geocentric longitudes of every body, timestamp parsing included
fn bench_ephem_all(c: &mut Criterion) {
    c.bench_function("ephem/all_bodies", |b| {
        b.iter(|| black_box(ephem(black_box("2000-01-01 00:00:00"), &[])))
    });
}

fn bench_single_bodies(c: &mut Criterion) {
    let params = EphemParams::default();
    for body in [Body::Sun, Body::Moon, Body::Mars, Body::Saturn, Body::Pluto] {
        let eph = Ephemeris::new(JD_2000, &[body]);
        c.bench_function(&format!("ephem/single/{body}"), |b| {
            b.iter(|| black_box(eph.compute(black_box(&params))))
        });
    }
}

/// Random epochs over two centuries, cartesian output
fn bench_random_epochs(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 1_000usize;
    let params = EphemParams {
        frame: RefFrame::GeocentricEcliptic,
        form: CoordForm::Cartesian,
        only_longitude: false,
    };

    c.bench_function("ephem/random_epochs_cartesian", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rng.random_range(2415020.0..2488070.0))
                    .collect::<Vec<f64>>()
            },
            |epochs| {
                for jd in epochs {
                    black_box(Ephemeris::new(jd, &[]).compute(&params));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_ephem_all, bench_single_bodies, bench_random_epochs
);
criterion_main!(benches);
