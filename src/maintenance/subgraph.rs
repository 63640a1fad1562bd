//! Relevant-subgraph construction for maintenance-route queries

use fixedbitset::FixedBitSet;
use hashbrown::{HashMap, HashSet};

use crate::model::{RailwayGraph, StationId};

/// Slot in the working adjacency: a neighbor plus the arena index of the
/// undirected edge leading there. Both directions of a line share one
/// arena index, so marking that index used consumes the line as a whole.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeSlot {
    pub to: StationId,
    pub edge: usize,
}

/// Filtered copy of the network built for one Eulerian query: one
/// canonical arena entry per undirected line satisfying the
/// electrification filter, adjacency in both directions, and per-node
/// degrees. Owned by the query that built it and discarded afterwards.
#[derive(Debug, Clone)]
pub struct RelevantSubgraph {
    edges: Vec<(StationId, StationId)>,
    adjacency: HashMap<StationId, Vec<EdgeSlot>>,
    degrees: HashMap<StationId, usize>,
}

impl RelevantSubgraph {
    /// Filters the network by electrification, deduplicating the two
    /// stored arcs of every line into a single canonical edge. Parallel
    /// lines between the same pair collapse to one edge, so the
    /// traversal works over a simple graph.
    pub fn build(graph: &RailwayGraph, only_electrified: bool) -> Self {
        let mut edges = Vec::new();
        let mut adjacency: HashMap<StationId, Vec<EdgeSlot>> = HashMap::new();
        let mut degrees: HashMap<StationId, usize> = HashMap::new();
        let mut seen: HashSet<(StationId, StationId)> = HashSet::new();

        for station in graph.stations() {
            for line in graph.neighbors(station.id) {
                if only_electrified && !line.electrified {
                    continue;
                }
                let id = line.edge_id();
                if !seen.insert(id) {
                    continue;
                }
                let edge = edges.len();
                edges.push(id);
                adjacency.entry(line.from).or_default().push(EdgeSlot { to: line.to, edge });
                adjacency.entry(line.to).or_default().push(EdgeSlot { to: line.from, edge });
                *degrees.entry(line.from).or_default() += 1;
                *degrees.entry(line.to).or_default() += 1;
            }
        }

        Self { edges, adjacency, degrees }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Number of relevant lines incident to the node; zero for nodes
    /// outside the subgraph.
    pub fn degree(&self, node: StationId) -> usize {
        self.degrees.get(&node).copied().unwrap_or(0)
    }

    pub(crate) fn degrees(&self) -> impl Iterator<Item = (StationId, usize)> + '_ {
        self.degrees.iter().map(|(&n, &d)| (n, d))
    }

    /// Nodes carrying at least one relevant line.
    pub(crate) fn positive_degree_nodes(&self) -> impl Iterator<Item = StationId> + '_ {
        self.degrees
            .iter()
            .filter(|&(_, &d)| d > 0)
            .map(|(&n, _)| n)
    }

    pub(crate) fn slots(&self, node: StationId) -> &[EdgeSlot] {
        self.adjacency.get(&node).map_or(&[], Vec::as_slice)
    }

    /// Fresh traversal state with no edge used yet.
    pub(crate) fn fresh_usage(&self) -> FixedBitSet {
        FixedBitSet::with_capacity(self.edges.len())
    }

    /// Connected means every node with degree > 0 is reachable from any
    /// one of them; isolated nodes carry no lines and are ignored. An
    /// edgeless subgraph is trivially connected.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.positive_degree_nodes().next() else {
            return true;
        };
        let total = self.positive_degree_nodes().count();
        self.reachable_count(start, &self.fresh_usage()) == total
    }

    /// Number of nodes reachable from `start` over unused edges.
    pub(crate) fn reachable_count(&self, start: StationId, used: &FixedBitSet) -> usize {
        let mut visited: HashSet<StationId> = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(u) = stack.pop() {
            for slot in self.slots(u) {
                if used.contains(slot.edge) {
                    continue;
                }
                if visited.insert(slot.to) {
                    stack.push(slot.to);
                }
            }
        }
        visited.len()
    }
}
