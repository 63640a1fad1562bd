//! Eulerian maintenance-route construction
//!
//! A maintenance pass must traverse every relevant line (all lines, or
//! only the electrified ones) exactly once. Feasibility follows the
//! classic conditions: the relevant subgraph must be connected over its
//! positive-degree nodes, with zero odd-degree nodes (circuit, start
//! anywhere with lines) or exactly two (path, start at one of them).
//! Two interchangeable strategies build the route itself.

mod feasibility;
mod fleury;
mod hierholzer;
mod subgraph;

pub use feasibility::{EulerianInfo, MaintenanceVerdict, analyze};
pub use subgraph::RelevantSubgraph;

use log::warn;

use crate::Error;
use crate::model::RailwayGraph;

/// Route-building algorithm selection. Both produce a walk using every
/// relevant line exactly once from a validated start; they are
/// interchangeable implementations of the same contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteStrategy {
    /// Fleury-style traversal that avoids bridges unless forced, O(m^2).
    BridgeAware,
    /// Hierholzer-style stack traversal, O(n+m), preferred for
    /// performance.
    #[default]
    EdgeStack,
}

/// Connectivity and degree-parity verdict for the relevant subgraph.
pub fn eulerian_analysis(graph: &RailwayGraph, only_electrified: bool) -> MaintenanceVerdict {
    analyze(&RelevantSubgraph::build(graph, only_electrified))
}

/// Sorted names of every station a maintenance route may start from;
/// empty when no route exists in the current network scenario.
pub fn potential_start_stations(graph: &RailwayGraph, only_electrified: bool) -> Vec<String> {
    let subgraph = RelevantSubgraph::build(graph, only_electrified);
    let verdict = analyze(&subgraph);

    match &verdict {
        MaintenanceVerdict::NoRelevantEdges => {
            warn!("no relevant lines in the network, no maintenance route possible");
            return Vec::new();
        }
        MaintenanceVerdict::Disconnected => {
            warn!("relevant subgraph is disconnected, no maintenance route possible");
            return Vec::new();
        }
        MaintenanceVerdict::Analyzed(info) if !info.feasible => {
            warn!(
                "no single pass exists: {} stations have an odd number of relevant lines",
                info.odd_degree_nodes.len()
            );
            return Vec::new();
        }
        MaintenanceVerdict::Analyzed(_) => {}
    }

    let mut names: Vec<String> = feasibility::valid_start_ids(&subgraph, &verdict)
        .into_iter()
        .filter_map(|id| graph.station_name(id).map(str::to_string))
        .collect();
    names.sort_unstable();
    names
}

/// Builds a maintenance route starting at `start`, or the empty route
/// when none exists or the start is not a valid one (both are expected
/// negatives, not errors). Leaving relevant lines untraversed despite a
/// feasible analysis is an internal inconsistency and fails loudly.
pub fn maintenance_route(
    graph: &RailwayGraph,
    start: &str,
    only_electrified: bool,
    strategy: RouteStrategy,
) -> Result<Vec<String>, Error> {
    let Some(start_id) = graph.resolve(start) else {
        warn!("unknown start station {start}");
        return Ok(Vec::new());
    };

    let subgraph = RelevantSubgraph::build(graph, only_electrified);
    let info = match analyze(&subgraph) {
        MaintenanceVerdict::NoRelevantEdges => return Ok(Vec::new()),
        MaintenanceVerdict::Disconnected => {
            warn!("relevant subgraph is disconnected, no maintenance route possible");
            return Ok(Vec::new());
        }
        MaintenanceVerdict::Analyzed(info) => info,
    };
    if !info.feasible {
        warn!(
            "no single pass exists: {} stations have an odd number of relevant lines",
            info.odd_degree_nodes.len()
        );
        return Ok(Vec::new());
    }

    // Reject an invalid start before any traversal begins
    if info.is_path && subgraph.degree(start_id) % 2 == 0 {
        warn!(
            "a maintenance route exists but must start at a station with an odd \
             number of relevant lines, not {start}"
        );
        return Ok(Vec::new());
    }
    if info.is_circuit && subgraph.degree(start_id) == 0 {
        warn!("{start} is not connected to any relevant lines");
        return Ok(Vec::new());
    }

    let route = match strategy {
        RouteStrategy::BridgeAware => fleury::traverse(&subgraph, start_id),
        RouteStrategy::EdgeStack => hierholzer::traverse(&subgraph, start_id),
    };

    // A walk over all m relevant lines visits exactly m + 1 stations;
    // anything else means edges were stranded despite a feasible analysis
    if route.len() != subgraph.edge_count() + 1 {
        return Err(Error::InternalInconsistency(format!(
            "maintenance route covers {} of {} relevant lines",
            route.len().saturating_sub(1),
            subgraph.edge_count()
        )));
    }

    Ok(route
        .into_iter()
        .filter_map(|id| graph.station_name(id).map(str::to_string))
        .collect())
}
