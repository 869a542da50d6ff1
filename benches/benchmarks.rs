//! Criterion benchmarks for undigraph.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use undigraph::{Graph, GraphBuilder, VertexId};

/// Build a random graph through the builder for fast construction.
fn make_random_graph(vertex_count: usize, edges_per_vertex: usize) -> Graph<u64> {
    let mut rng = rand::thread_rng();

    let mut builder = GraphBuilder::new();
    let ids: Vec<VertexId> = (0..vertex_count as u64).map(|v| builder.vertex(v)).collect();
    for i in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != i {
                builder.edge(ids[i], ids[target]);
            }
        }
    }

    builder.build().unwrap()
}

/// Build a long path graph (worst case for reachability misses).
fn make_path_graph(vertex_count: usize) -> (Graph<u64>, Vec<VertexId>) {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..vertex_count as u64).map(|v| graph.add_vertex(v)).collect();
    for window in ids.windows(2) {
        graph.add_edge(window[0], window[1]);
    }
    (graph, ids)
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("build_10k_nodes_3_edges", |b| {
        b.iter(|| make_random_graph(black_box(10_000), 3));
    });

    c.bench_function("add_vertex_1k", |b| {
        b.iter(|| {
            let mut graph = Graph::new();
            for i in 0..1_000u64 {
                graph.add_vertex(black_box(i));
            }
            graph
        });
    });
}

fn bench_mutation(c: &mut Criterion) {
    let (mut graph, ids) = make_path_graph(1_000);
    let mut rng = rand::thread_rng();

    c.bench_function("add_remove_edge_1k_graph", |b| {
        b.iter(|| {
            let a = ids[rng.gen_range(0..ids.len())];
            let z = ids[rng.gen_range(0..ids.len())];
            if graph.add_edge(a, z) {
                graph.remove_edge(a, z);
            }
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 3);

    c.bench_function("search_10k_worst_case", |b| {
        b.iter(|| graph.search(black_box(&9_999u64)));
    });
}

fn bench_traversal(c: &mut Criterion) {
    let (path, ids) = make_path_graph(10_000);
    let first = ids[0];
    let last = *ids.last().unwrap();

    c.bench_function("path_exists_10k_chain", |b| {
        b.iter(|| path.path_exists(black_box(first), black_box(last)));
    });

    let random = make_random_graph(10_000, 3);
    c.bench_function("has_cycle_10k_random", |b| {
        b.iter(|| random.has_cycle());
    });

    c.bench_function("has_cycle_10k_chain_acyclic", |b| {
        b.iter(|| path.has_cycle());
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_mutation,
    bench_search,
    bench_traversal
);
criterion_main!(benches);
