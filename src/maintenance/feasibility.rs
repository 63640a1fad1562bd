//! Eulerian feasibility analysis and start-station enumeration

use itertools::Itertools;
use serde::Serialize;

use super::subgraph::RelevantSubgraph;
use crate::model::StationId;

/// Degree-parity analysis of a connected relevant subgraph.
///
/// `is_circuit` and `is_path` are mutually exclusive and
/// `feasible == is_circuit || is_path`. When feasible the odd-degree
/// node list has zero or exactly two entries, otherwise more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EulerianInfo {
    pub feasible: bool,
    pub is_circuit: bool,
    pub is_path: bool,
    /// Sorted ids of the odd-degree nodes.
    pub odd_degree_nodes: Vec<StationId>,
}

/// Feasibility state of a maintenance-route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaintenanceVerdict {
    /// Nothing to traverse; the empty route is trivially valid.
    NoRelevantEdges,
    /// A station or group of stations has no relevant lines connecting
    /// it to the rest of the network; no single pass can exist.
    Disconnected,
    /// Connected subgraph with its degree-parity analysis.
    Analyzed(EulerianInfo),
}

/// Classifies the relevant subgraph: trivial, disconnected, or analyzed
/// for degree parity. `EulerianInfo` is only produced for connected
/// subgraphs, which is what keeps its odd-count invariant meaningful.
pub fn analyze(subgraph: &RelevantSubgraph) -> MaintenanceVerdict {
    if !subgraph.has_edges() {
        return MaintenanceVerdict::NoRelevantEdges;
    }
    if !subgraph.is_connected() {
        return MaintenanceVerdict::Disconnected;
    }

    let odd_degree_nodes: Vec<StationId> = subgraph
        .degrees()
        .filter(|&(_, d)| d % 2 != 0)
        .map(|(n, _)| n)
        .sorted_unstable()
        .collect();
    let is_circuit = odd_degree_nodes.is_empty();
    let is_path = odd_degree_nodes.len() == 2;

    MaintenanceVerdict::Analyzed(EulerianInfo {
        feasible: is_circuit || is_path,
        is_circuit,
        is_path,
        odd_degree_nodes,
    })
}

/// Station ids eligible to start the route: every positive-degree node
/// for a circuit, exactly the two odd-degree nodes for a path, nothing
/// otherwise.
pub(crate) fn valid_start_ids(
    subgraph: &RelevantSubgraph,
    verdict: &MaintenanceVerdict,
) -> Vec<StationId> {
    match verdict {
        MaintenanceVerdict::Analyzed(info) if info.is_circuit => {
            subgraph.positive_degree_nodes().sorted_unstable().collect()
        }
        MaintenanceVerdict::Analyzed(info) if info.is_path => info.odd_degree_nodes.clone(),
        _ => Vec::new(),
    }
}
