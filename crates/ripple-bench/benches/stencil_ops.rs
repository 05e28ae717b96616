//! Criterion micro-benchmarks for stencil evaluation and seeding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_core::Grid;
use ripple_seed::RandomLayout;
use ripple_stencil::Stencil;

fn make_grid(n: usize) -> Grid {
    Grid::from_fn(n, n, |r, c| ((r * 31 + c * 17) % 97) as f64 / 97.0).unwrap()
}

/// Benchmark: Laplacian over every cell of a 100x100 grid.
fn bench_laplacian_10k(c: &mut Criterion) {
    let grid = make_grid(100);
    let stencil = Stencil::new(&grid, 0.01);

    c.bench_function("laplacian_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..100i64 {
                for j in 0..100i64 {
                    acc += stencil.laplacian(i, j);
                }
            }
            black_box(acc);
        });
    });
}

/// Benchmark: first derivatives on the wrap-around border only.
fn bench_border_gradients(c: &mut Criterion) {
    let grid = make_grid(100);
    let stencil = Stencil::new(&grid, 0.01);

    c.bench_function("border_gradients_400", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for k in 0..100i64 {
                acc += stencil.ddx(0, k) + stencil.ddy(0, k);
                acc += stencil.ddx(99, k) + stencil.ddy(99, k);
                acc += stencil.ddx(k, 0) + stencil.ddy(k, 0);
                acc += stencil.ddx(k, 99) + stencil.ddy(k, 99);
            }
            black_box(acc);
        });
    });
}

/// Benchmark: default 100-peak layout sampled onto 100x100.
fn bench_seed_10k(c: &mut Criterion) {
    let layout = RandomLayout::builder().build().unwrap();

    c.bench_function("seed_100_peaks_10k", |b| {
        b.iter(|| {
            let grid = layout.generate(100, 100, 42).unwrap().to_grid(100, 100).unwrap();
            black_box(&grid);
        });
    });
}

criterion_group!(
    benches,
    bench_laplacian_10k,
    bench_border_gradients,
    bench_seed_10k
);
criterion_main!(benches);
