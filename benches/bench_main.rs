use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use railnet::RailwayGraph;
use railnet::maintenance::{RouteStrategy, maintenance_route};

/// Ring of `n` stations, an Eulerian circuit by construction.
fn ring(n: usize) -> RailwayGraph {
    let names: Vec<String> = (0..n).map(|i| format!("S_{i:03}")).collect();
    let mut graph = RailwayGraph::new();
    for i in 0..n {
        graph
            .add_line(&names[i], &names[(i + 1) % n], 1.0, false)
            .unwrap();
    }
    graph
}

fn bench_route_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("eulerian_route");
    for n in [16, 64, 256] {
        let graph = ring(n);
        group.bench_function(format!("bridge_aware/{n}"), |b| {
            b.iter(|| {
                maintenance_route(black_box(&graph), "S_000", false, RouteStrategy::BridgeAware)
            })
        });
        group.bench_function(format!("edge_stack/{n}"), |b| {
            b.iter(|| {
                maintenance_route(black_box(&graph), "S_000", false, RouteStrategy::EdgeStack)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_route_strategies);
criterion_main!(benches);
