use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use grafo::DirectedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build a graph with `n` vertices and roughly `edges` distinct random edges.
fn random_graph(n: usize, edges: usize, seed: u64) -> DirectedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = DirectedGraph::with_natural_order();
    for v in 0..n {
        g.insert(v).unwrap();
    }
    let mut added = 0;
    let mut attempts = 0;
    while added < edges && attempts < edges * 4 {
        attempts += 1;
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if g.connect(&a, &b).is_ok() {
            added += 1;
        }
    }
    g
}

/// Benchmark vertex insertion throughput
fn bench_vertex_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_insertion");

    for size in [100usize, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut g = DirectedGraph::with_natural_order();
                for v in 0..size {
                    g.insert(v).unwrap();
                }
                black_box(g.len());
            });
        });
    }
    group.finish();
}

/// Benchmark edge creation into an existing vertex set
fn bench_connect(c: &mut Criterion) {
    let mut group = c.benchmark_group("connect");

    for size in [100usize, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut g = DirectedGraph::with_natural_order();
                for v in 0..size {
                    g.insert(v).unwrap();
                }
                // Chain plus a fan from the root.
                for v in 0..size - 1 {
                    g.connect(&v, &(v + 1)).unwrap();
                }
                black_box(g.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark reachability queries over random graphs
fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");

    for size in [100usize, 1000].iter() {
        let g = random_graph(*size, size * 3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                black_box(g.reachable(&0, &(size - 1)));
            });
        });
    }
    group.finish();
}

/// Benchmark cycle detection over random graphs
fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");

    for size in [100usize, 1000].iter() {
        let g = random_graph(*size, size * 3, 7);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                black_box(g.has_cycle());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vertex_insertion,
    bench_connect,
    bench_reachability,
    bench_cycle_detection
);
criterion_main!(benches);
