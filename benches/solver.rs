//! Benchmarks comparing the search algorithms on a reference instance.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eight_puzzle::board::Board;
use eight_puzzle::heuristic::{Estimator, Heuristic};
use eight_puzzle::search;

const START: &str = "208135467";
const GOAL: &str = "123456780";

fn fixture() -> (Board, Board) {
    (START.parse().unwrap(), GOAL.parse().unwrap())
}

/// Benchmark uniform cost search on the reference instance.
fn bench_uniform_cost(c: &mut Criterion) {
    let (start, goal) = fixture();
    let mut group = c.benchmark_group("uniform_cost");
    group.sample_size(10);
    group.bench_function("solve", |b| {
        b.iter(|| search::uniform_cost(black_box(start), black_box(goal)))
    });
    group.finish();
}

/// Benchmark A* with each heuristic on the reference instance.
fn bench_astar(c: &mut Criterion) {
    let (start, goal) = fixture();
    let mut group = c.benchmark_group("astar");
    group.bench_function("misplaced_tiles", |b| {
        b.iter(|| search::astar(black_box(start), black_box(goal), Heuristic::MisplacedTiles))
    });
    group.bench_function("manhattan_distance", |b| {
        b.iter(|| search::astar(black_box(start), black_box(goal), Heuristic::ManhattanDistance))
    });
    group.finish();
}

/// Benchmark a single heuristic evaluation.
fn bench_estimate(c: &mut Criterion) {
    let (start, goal) = fixture();
    let estimator = Estimator::new(Heuristic::ManhattanDistance, &goal);
    c.bench_function("manhattan_estimate", |b| {
        b.iter(|| estimator.estimate(black_box(&start)))
    });
}

criterion_group!(benches, bench_uniform_cost, bench_astar, bench_estimate);
criterion_main!(benches);
