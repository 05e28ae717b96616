//! Criterion benchmarks for stepping the reference profiles on each back-end.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_bench::{diffusion_profile, reference_profile, stress_profile};
use ripple_engine::{Backend, Stepper};

const PARALLEL: Backend = Backend::Parallel { threads: None };

fn bench_wave_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave_10k");
    for (label, backend) in [("serial", Backend::Serial), ("parallel", PARALLEL)] {
        let mut stepper = Stepper::new(reference_profile(42, backend).unwrap()).unwrap();
        // Warm up: first sub-step touches both buffers.
        stepper.step(1).unwrap();

        group.bench_function(label, |b| {
            b.iter(|| {
                let metrics = stepper.step(1).unwrap();
                black_box(&metrics);
            });
        });
    }
    group.finish();
}

fn bench_wave_100k(c: &mut Criterion) {
    let mut group = c.benchmark_group("wave_100k");
    group.sample_size(20);
    for (label, backend) in [("serial", Backend::Serial), ("parallel", PARALLEL)] {
        let mut stepper = Stepper::new(stress_profile(42, backend).unwrap()).unwrap();
        stepper.step(1).unwrap();

        group.bench_function(label, |b| {
            b.iter(|| {
                let metrics = stepper.step(1).unwrap();
                black_box(&metrics);
            });
        });
    }
    group.finish();
}

fn bench_diffusion_100_substeps(c: &mut Criterion) {
    c.bench_function("diffusion_10k_100_substeps", |b| {
        b.iter(|| {
            let mut stepper = Stepper::new(diffusion_profile(42, PARALLEL).unwrap()).unwrap();
            let metrics = stepper.step(100).unwrap();
            black_box(&metrics);
        });
    });
}

criterion_group!(
    benches,
    bench_wave_10k,
    bench_wave_100k,
    bench_diffusion_100_substeps
);
criterion_main!(benches);
