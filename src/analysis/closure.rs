//! Full-network connectivity via Warshall's transitive closure

use fixedbitset::FixedBitSet;

use crate::model::RailwayGraph;

/// Boolean reachability matrix over all stations, in station-id order.
/// Cell `(i, j)` is set iff some path exists from station `i` to
/// station `j`. Exposed as data for external presentation; nothing is
/// rendered here.
#[derive(Debug, Clone)]
pub struct ClosureMatrix {
    names: Vec<String>,
    rows: Vec<FixedBitSet>,
}

impl ClosureMatrix {
    /// Station names in matrix index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether station `j` is reachable from station `i`.
    pub fn reachable(&self, i: usize, j: usize) -> bool {
        self.rows.get(i).is_some_and(|row| row.contains(j))
    }

    /// Matrix lookup by station name; `None` if either name is unknown.
    pub fn reachable_by_name(&self, from: &str, to: &str) -> Option<bool> {
        let i = self.names.iter().position(|n| n == from)?;
        let j = self.names.iter().position(|n| n == to)?;
        Some(self.rows[i].contains(j))
    }

    /// Connected iff every off-diagonal cell is set.
    pub fn is_fully_connected(&self) -> bool {
        let n = self.names.len();
        (0..n).all(|i| (0..n).all(|j| i == j || self.rows[i].contains(j)))
    }
}

/// Transitive closure of the network via Warshall's algorithm, O(n^3).
/// Seeded from the direct arcs, then `reach[i][j] |= reach[i][k] &
/// reach[k][j]` for every intermediate `k`, realized as a row-wise OR.
pub fn transitive_closure(graph: &RailwayGraph) -> ClosureMatrix {
    let n = graph.station_count();
    let mut rows: Vec<FixedBitSet> = (0..n).map(|_| FixedBitSet::with_capacity(n)).collect();

    for station in graph.stations() {
        for line in graph.neighbors(station.id) {
            rows[line.from].insert(line.to);
        }
    }

    for k in 0..n {
        let row_k = rows[k].clone();
        for row in &mut rows {
            if row.contains(k) {
                row.union_with(&row_k);
            }
        }
    }

    let names = graph.stations().iter().map(|s| s.name.clone()).collect();
    ClosureMatrix { names, rows }
}

/// Whether every pair of stations is mutually reachable. An empty
/// network is trivially connected.
pub fn is_connected_by_closure(graph: &RailwayGraph) -> bool {
    transitive_closure(graph).is_fully_connected()
}
