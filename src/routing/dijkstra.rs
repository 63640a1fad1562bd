use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::warn;
use serde::Serialize;

use crate::model::{RailwayGraph, StationId};

/// Outcome of a shortest-path query.
///
/// `feasible == false` means no route exists or a station name failed to
/// resolve; the path is then empty and the distance carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<String>,
    pub distance: f64,
    pub feasible: bool,
}

impl PathResult {
    pub(crate) fn found(path: Vec<String>, distance: f64) -> Self {
        Self { path, distance, feasible: true }
    }

    pub(crate) fn infeasible() -> Self {
        Self { path: Vec::new(), distance: 0.0, feasible: false }
    }
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: StationId,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Costs are
// finite positives, so total_cmp agrees with the usual order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm between two named stations, with lazy deletion:
/// a popped entry worse than the recorded best for its node is stale and
/// discarded. Terminates as soon as the target itself is popped, which
/// is safe because all line lengths are non-negative.
pub fn shortest_path(graph: &RailwayGraph, start: &str, end: &str) -> PathResult {
    let (Some(start_id), Some(end_id)) = (graph.resolve(start), graph.resolve(end)) else {
        warn!("shortest-path query with unresolved station name ({start} -> {end})");
        return PathResult::infeasible();
    };

    let mut distances: HashMap<StationId, f64> = HashMap::new();
    let mut predecessors: HashMap<StationId, StationId> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start_id, 0.0);
    heap.push(State { cost: 0.0, node: start_id });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry, a better path was already recorded
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        if node == end_id {
            break;
        }

        for line in graph.neighbors(node) {
            let next_cost = cost + line.length;
            match distances.entry(line.to) {
                Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    predecessors.insert(line.to, node);
                    heap.push(State { cost: next_cost, node: line.to });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(line.to, node);
                        heap.push(State { cost: next_cost, node: line.to });
                    }
                }
            }
        }
    }

    let Some(&total) = distances.get(&end_id) else {
        return PathResult::infeasible();
    };

    // Walk predecessors backward from the target
    let mut path = Vec::new();
    let mut current = end_id;
    loop {
        match graph.station_name(current) {
            Some(name) => path.push(name.to_string()),
            None => return PathResult::infeasible(),
        }
        match predecessors.get(&current) {
            Some(&prev) => current = prev,
            None => break,
        }
    }
    path.reverse();

    // The reconstruction must land on the requested start
    if path.first().map(String::as_str) != Some(start) {
        return PathResult::infeasible();
    }

    PathResult::found(path, total)
}
