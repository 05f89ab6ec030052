use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spantree::mst::{self, Frontier, Prim};
use spantree::Graph;

fn make_line_graph(size: usize) -> Graph<usize, usize> {
    let mut graph = Graph::with_capacity(size);
    for node in 0..size {
        graph.add_node(node);
    }

    for node in 1..size {
        graph
            .add_undirected_edge(&(node - 1), node % 7, &node)
            .unwrap();
    }

    graph
}

fn make_grid_graph(side: usize) -> Graph<(usize, usize), usize> {
    let mut graph = Graph::with_capacity(side * side);
    for x in 0..side {
        for y in 0..side {
            graph.add_node((x, y));
        }
    }

    for x in 0..side {
        for y in 0..side {
            if x + 1 < side {
                graph
                    .add_undirected_edge(&(x, y), (x * 31 + y * 17) % 13, &(x + 1, y))
                    .unwrap();
            }
            if y + 1 < side {
                graph
                    .add_undirected_edge(&(x, y), (x * 7 + y * 29) % 11, &(x, y + 1))
                    .unwrap();
            }
        }
    }

    graph
}

const FRONTIERS: [Frontier; 3] = [Frontier::Map, Frontier::Heap, Frontier::Hybrid];

fn bench_prim_line(c: &mut Criterion) {
    let mut g = c.benchmark_group("prim on line graphs");

    for size in [10, 100, 1_000] {
        let graph = make_line_graph(size);
        for frontier in FRONTIERS {
            g.bench_with_input(
                BenchmarkId::new(format!("{frontier:?}"), size),
                &graph,
                |b, graph| b.iter(|| black_box(Prim::with_frontier(frontier).run(graph))),
            );
        }
    }
}

fn bench_prim_grid(c: &mut Criterion) {
    let mut g = c.benchmark_group("prim on grid graphs");

    for side in [4, 16, 64] {
        let graph = make_grid_graph(side);
        for frontier in FRONTIERS {
            g.bench_with_input(
                BenchmarkId::new(format!("{frontier:?}"), side * side),
                &graph,
                |b, graph| b.iter(|| black_box(Prim::with_frontier(frontier).run(graph))),
            );
        }
    }
}

fn bench_kruskal_grid(c: &mut Criterion) {
    let mut g = c.benchmark_group("kruskal on grid graphs");

    for side in [4, 16, 64] {
        let graph = make_grid_graph(side);
        g.bench_with_input(BenchmarkId::new("kruskal", side * side), &graph, |b, graph| {
            b.iter(|| black_box(mst::kruskal(graph)))
        });
    }
}

criterion_group!(benches, bench_prim_line, bench_prim_grid, bench_kruskal_grid);
criterion_main!(benches);
