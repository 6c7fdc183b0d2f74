//! Benchmarks for solver setup.
//!
//! Run with: `cargo bench --bench setup_bench`
//!
//! Benchmarks stencil-width reconfiguration, limiter-table construction,
//! and the full 2D setup path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wavefv::grid::Patch2D;
use wavefv::limiters::{LimiterKind, LimiterTable};
use wavefv::solver::{SolverConfig2D, WaveSolver2D};
use wavefv::state::{Solution, Solutions, State2D};

/// Build a state partitioned into `n` square patches.
fn partitioned_state(n_partitions: usize, mx: usize) -> State2D {
    let patches = (0..n_partitions)
        .map(|_| Patch2D::new(mx, mx, 1.0, 1.0).unwrap())
        .collect();
    State2D::new(patches, 3, 0).unwrap()
}

/// Benchmark the collective ghost re-padding.
fn bench_set_stencil_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_stencil_width");

    for n_partitions in [1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::new("repad", format!("{}_partitions", n_partitions)),
            &n_partitions,
            |b, &n| {
                b.iter(|| {
                    let mut state = partitioned_state(n, 64);
                    state.set_stencil_width(black_box(2));
                    state
                });
            },
        );
    }

    group.finish();
}

/// Benchmark limiter-table construction.
fn bench_limiter_table(c: &mut Criterion) {
    c.bench_function("limiter_table_broadcast", |b| {
        b.iter(|| LimiterTable::build(black_box(&[LimiterKind::Minmod]), black_box(8)));
    });
}

/// Benchmark the full 2D setup path.
fn bench_setup_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("setup_2d");

    for mx in [32, 128] {
        group.bench_with_input(BenchmarkId::new("fortran", mx), &mx, |b, &mx| {
            b.iter(|| {
                let state = partitioned_state(4, mx);
                let mut solutions = Solutions::with_current(Solution::new(state));
                let mut solver = WaveSolver2D::new(SolverConfig2D::new(3, 3));
                solver.setup(black_box(&mut solutions)).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_stencil_width,
    bench_limiter_table,
    bench_setup_2d
);
criterion_main!(benches);
