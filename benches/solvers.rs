//! Solver benchmarks.
//!
//! Both solvers share the O(N^2) least-block precompute; the table fill is
//! O(M*N^2) while the tree fill stays under O(N*M), so the gap widens with
//! the budget.
//!
//! Run with:
//! ```bash
//! cargo bench --bench solvers
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use boundnet::network::Network;
use boundnet::normalize::normalize;

/// Generate `count` disjoint valid blocks of mixed sizes, deterministically.
fn random_blocks(count: usize, seed: u64) -> Vec<Network> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut blocks = Vec::new();
    while blocks.len() < count {
        let k = rng.gen_range(0..12u32);
        let a = rng.gen_range(0..(1u64 << 20));
        blocks.push(Network::new(a << k, (a + 1) << k));
        // Built from dyadic form, so only overlaps need weeding out.
        blocks = normalize(&blocks);
    }
    blocks.truncate(count);
    blocks
}

fn bench_solver_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers/scaling");

    let m = 8;
    for n in [16, 64, 256] {
        let input = random_blocks(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("dp", n), &input, |b, input| {
            b.iter(|| boundnet::dp::solve(input, m).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("tree", n), &input, |b, input| {
            b.iter(|| boundnet::tree::solve(input, m).unwrap());
        });
    }

    group.finish();
}

fn bench_budget_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers/budget_sweep");

    let input = random_blocks(128, 42);
    for m in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::new("dp", m), &m, |b, &m| {
            b.iter(|| boundnet::dp::solve(&input, m).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("tree", m), &m, |b, &m| {
            b.iter(|| boundnet::tree::solve(&input, m).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solver_scaling, bench_budget_sweep);
criterion_main!(benches);
