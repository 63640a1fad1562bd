//! Train-type-constrained reachability between stations

use std::fmt;

use hashbrown::HashSet;
use log::{debug, warn};
use serde::Serialize;

use crate::model::{RailwayGraph, StationId, TrainType};

/// Why a reachability query failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnreachableReason {
    UnknownSource,
    UnknownDestination,
    /// No route exists even when traction constraints are ignored.
    StructuralDisconnection,
    /// A route exists topologically, but not for the requested train type.
    TrainTypeRestriction,
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::UnknownSource => "source station does not exist",
            Self::UnknownDestination => "destination station does not exist",
            Self::StructuralDisconnection => {
                "there is no topological connection between the stations"
            }
            Self::TrainTypeRestriction => "there is no path accessible for this train type",
        };
        f.write_str(msg)
    }
}

/// Whether `to` can be reached from `from` by the given train type.
/// Electric trains may only use electrified lines; the other types
/// ignore electrification. Unknown station names yield `false`.
pub fn is_reachable(graph: &RailwayGraph, from: &str, to: &str, train_type: TrainType) -> bool {
    let (Some(src), Some(dst)) = (graph.resolve(from), graph.resolve(to)) else {
        return false;
    };
    search(graph, src, dst, Some(train_type))
}

/// Diagnoses a failed reachability query; meant to be called after
/// [`is_reachable`] returned `false`. A second traversal ignoring
/// electrification separates structural disconnection from an
/// obstruction specific to the train type.
pub fn unreachability_reason(
    graph: &RailwayGraph,
    from: &str,
    to: &str,
    train_type: TrainType,
) -> UnreachableReason {
    let Some(src) = graph.resolve(from) else {
        return UnreachableReason::UnknownSource;
    };
    let Some(dst) = graph.resolve(to) else {
        return UnreachableReason::UnknownDestination;
    };
    if search(graph, src, dst, None) {
        debug!("{from} -> {to} is connected, but not for {train_type:?} traction");
        UnreachableReason::TrainTypeRestriction
    } else {
        UnreachableReason::StructuralDisconnection
    }
}

/// Every ordered pair within the set must be mutually reachable for the
/// given train type; fails fast on the first pair that is not.
pub fn all_pairs_reachable(graph: &RailwayGraph, stations: &[&str], train_type: TrainType) -> bool {
    for (i, from) in stations.iter().enumerate() {
        for (j, to) in stations.iter().enumerate() {
            if i != j && !is_reachable(graph, from, to, train_type) {
                warn!("{from} -> {to} is not reachable with train type {train_type:?}");
                return false;
            }
        }
    }
    true
}

/// Iterative DFS; `constraint == None` ignores electrification.
fn search(
    graph: &RailwayGraph,
    src: StationId,
    dst: StationId,
    constraint: Option<TrainType>,
) -> bool {
    if src == dst {
        return true;
    }
    let mut visited: HashSet<StationId> = HashSet::new();
    let mut stack = vec![src];
    visited.insert(src);
    while let Some(u) = stack.pop() {
        for line in graph.neighbors(u) {
            if constraint.is_some_and(|tt| !tt.can_traverse(line)) {
                continue;
            }
            if line.to == dst {
                return true;
            }
            if visited.insert(line.to) {
                stack.push(line.to);
            }
        }
    }
    false
}
