//! Criterion benchmarks for the four evolutionary solvers.
//!
//! Every run uses a fixed seed and a generation cap so that the measured
//! work does not depend on how quickly a solution is found.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evolve::knapsack::{KnapsackProblem, KnapsackSolver};
use u_evolve::queens::{QueensProblem, QueensSolver};
use u_evolve::random::create_rng;
use u_evolve::rebuild::{RebuildProblem, RebuildSolver};
use u_evolve::tsp::{TspProblem, TspSolver};
use u_evolve::Solver;

/// Random symmetric distance matrix with integer distances in 1..=100.
fn random_matrix(n: usize, seed: u64) -> Vec<Vec<f64>> {
    use rand::Rng;
    let mut rng = create_rng(seed);
    let mut m = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let d = rng.random_range(1..=100) as f64;
            m[i][j] = d;
            m[j][i] = d;
        }
    }
    m
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    group.sample_size(10);

    for &items in &[16usize, 32, 64] {
        let problem = KnapsackProblem::random(items, &mut create_rng(42)).unwrap();
        let config = problem.default_config().with_max_generations(50);
        let solver = KnapsackSolver::new(problem).with_config(config);
        group.bench_with_input(BenchmarkId::from_parameter(items), &solver, |b, s| {
            b.iter(|| black_box(s.run(&mut create_rng(7), |_| {})))
        });
    }
    group.finish();
}

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("queens");
    group.sample_size(10);

    for &n in &[8usize, 12, 16] {
        let problem = QueensProblem::new(n).unwrap();
        let config = problem
            .default_config()
            .with_stop_when_solved(false)
            .with_max_generations(20);
        let solver = QueensSolver::new(problem).with_config(config);
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, s| {
            b.iter(|| black_box(s.run(&mut create_rng(7), |_| {})))
        });
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    group.sample_size(10);

    for target in ["Hello", "Hello, World!", "The quick brown fox jumps over"] {
        let problem = RebuildProblem::new(target).unwrap();
        let config = problem
            .default_config()
            .with_stop_when_solved(false)
            .with_max_generations(100);
        let solver = RebuildSolver::new(problem).with_config(config);
        group.bench_with_input(
            BenchmarkId::new("len", target.len()),
            &solver,
            |b, s| b.iter(|| black_box(s.run(&mut create_rng(7), |_| {}))),
        );
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    group.sample_size(10);

    for &n in &[10usize, 25, 50] {
        let problem = TspProblem::new(random_matrix(n, 42)).unwrap();
        let config = problem
            .default_config()
            .with_convergence_leaders(0)
            .with_max_generations(200);
        let solver = TspSolver::new(problem).with_config(config);
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, s| {
            b.iter(|| black_box(s.run(&mut create_rng(7), |_| {})))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_queens, bench_rebuild, bench_tsp);
criterion_main!(benches);
