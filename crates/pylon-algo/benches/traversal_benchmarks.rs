//! Performance benchmarks for path queries and structural analysis
//!
//! Grids are synthetic square lattices with deterministic line lengths, so
//! results are comparable across runs without fixture files.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench -p pylon-algo
//!
//! # Only Dijkstra
//! cargo bench -p pylon-algo -- dijkstra
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pylon_algo::{bfs, critical_nodes, dfs, shortest_path, shortest_paths_from, simulate_shutdown};
use pylon_core::{Kilometers, LineSpec, Megawatts, Network, Substation};

/// Lattice sizes (side length); node count is the square
const SIDES: &[usize] = &[10, 32, 100];

fn node_id(row: usize, col: usize) -> String {
    format!("R{row:03}C{col:03}")
}

/// Square lattice with pseudo-random lengths in 1..=9 km and a few missing
/// rungs so that articulation points exist.
fn lattice(side: usize) -> Network {
    let mut stations = Vec::with_capacity(side * side);
    let mut lines = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let id = node_id(row, col);
            stations.push(Substation::new(id.clone(), id, "110kV", Megawatts(50.0)));
            let length = Kilometers(((row * 7 + col * 13) % 9 + 1) as f64);
            if col + 1 < side {
                lines.push(LineSpec::new(
                    node_id(row, col),
                    node_id(row, col + 1),
                    length,
                    Megawatts(100.0),
                ));
            }
            if row + 1 < side && (col % 5 != 0 || row % 3 == 0) {
                lines.push(LineSpec::new(
                    node_id(row, col),
                    node_id(row + 1, col),
                    length,
                    Megawatts(100.0),
                ));
            }
        }
    }
    Network::from_specs(stations, lines).unwrap()
}

fn corners(side: usize) -> (String, String) {
    (node_id(0, 0), node_id(side - 1, side - 1))
}

fn bench_point_to_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_to_point");

    for &side in SIDES {
        let network = lattice(side);
        let (start, end) = corners(side);
        let nodes = side * side;

        group.bench_with_input(BenchmarkId::new("dfs", nodes), &network, |b, network| {
            b.iter(|| black_box(dfs(network, &start, &end).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("bfs", nodes), &network, |b, network| {
            b.iter(|| black_box(bfs(network, &start, &end).unwrap()))
        });
        group.bench_with_input(
            BenchmarkId::new("dijkstra", nodes),
            &network,
            |b, network| b.iter(|| black_box(shortest_path(network, &start, &end).unwrap())),
        );
    }

    group.finish();
}

fn bench_single_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for &side in SIDES {
        let network = lattice(side);
        let (start, _) = corners(side);
        group.bench_with_input(
            BenchmarkId::new("dijkstra_all", side * side),
            &network,
            |b, network| b.iter(|| black_box(shortest_paths_from(network, &start).unwrap())),
        );
    }

    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");

    for &side in SIDES {
        let network = lattice(side);
        let nodes = side * side;
        group.bench_with_input(
            BenchmarkId::new("critical_nodes", nodes),
            &network,
            |b, network| b.iter(|| black_box(critical_nodes(network))),
        );
        group.bench_with_input(
            BenchmarkId::new("shutdown_k3", nodes),
            &network,
            |b, network| b.iter(|| black_box(simulate_shutdown(network, 3).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_point_to_point, bench_single_source, bench_structure);
criterion_main!(benches);
