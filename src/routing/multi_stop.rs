use itertools::Itertools;
use log::warn;

use super::dijkstra::{PathResult, shortest_path};
use crate::model::RailwayGraph;

/// Cheapest route visiting the given stations in order: one Dijkstra run
/// per consecutive pair, concatenated without duplicating the shared
/// junction stations. If any segment is infeasible the whole route is
/// infeasible; partial routes are never returned.
pub fn route_through(graph: &RailwayGraph, stops: &[&str]) -> PathResult {
    if stops.len() < 2 {
        warn!("multi-stop route requires at least two stations");
        return PathResult::infeasible();
    }

    let mut total_path: Vec<String> = Vec::new();
    let mut total_distance = 0.0;

    for (i, (start, end)) in stops.iter().tuple_windows().enumerate() {
        let segment = shortest_path(graph, start, end);
        if !segment.feasible {
            warn!("no path from {start} to {end}, the whole route is infeasible");
            return PathResult::infeasible();
        }
        total_distance += segment.distance;
        if i == 0 {
            total_path.extend(segment.path);
        } else {
            // Skip the junction station the previous segment already ends on
            total_path.extend(segment.path.into_iter().skip(1));
        }
    }

    PathResult::found(total_path, total_distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> RailwayGraph {
        let mut graph = RailwayGraph::new();
        graph.add_line("S_A", "S_B", 10.0, true).unwrap();
        graph.add_line("S_B", "S_C", 5.0, false).unwrap();
        graph.add_line("S_C", "S_D", 7.0, false).unwrap();
        graph
    }

    #[test]
    fn concatenates_segments_without_duplicating_junctions() {
        let result = route_through(&chain(), &["S_A", "S_C", "S_D"]);
        assert!(result.feasible);
        assert_eq!(result.path, vec!["S_A", "S_B", "S_C", "S_D"]);
        assert_eq!(result.distance, 22.0);
    }

    #[test]
    fn total_distance_is_sum_of_segment_distances() {
        let graph = chain();
        let whole = route_through(&graph, &["S_A", "S_B", "S_D"]);
        let first = shortest_path(&graph, "S_A", "S_B");
        let second = shortest_path(&graph, "S_B", "S_D");
        assert_eq!(whole.distance, first.distance + second.distance);
    }

    #[test]
    fn fewer_than_two_stops_is_infeasible() {
        let graph = chain();
        assert!(!route_through(&graph, &[]).feasible);
        assert!(!route_through(&graph, &["S_A"]).feasible);
    }

    #[test]
    fn any_infeasible_segment_fails_the_whole_route() {
        let mut graph = chain();
        graph.add_line("S_X", "S_Y", 1.0, false).unwrap();
        let result = route_through(&graph, &["S_A", "S_X", "S_D"]);
        assert!(!result.feasible);
        assert!(result.path.is_empty());
    }
}
