//! Stack-based Eulerian traversal (Hierholzer's algorithm)

use super::subgraph::RelevantSubgraph;
use crate::model::StationId;

/// Linear-time walk: from the top of the stack follow any unused edge;
/// once a node has none left, pop it into the route. No bridge test is
/// needed, a subgraph that passed the feasibility analysis cannot strand
/// this traversal whatever order the edges are taken in.
pub(crate) fn traverse(subgraph: &RelevantSubgraph, start: StationId) -> Vec<StationId> {
    let mut used = subgraph.fresh_usage();
    let mut stack = vec![start];
    let mut route = Vec::with_capacity(subgraph.edge_count() + 1);

    while let Some(&u) = stack.last() {
        let next = subgraph
            .slots(u)
            .iter()
            .find(|slot| !used.contains(slot.edge))
            .copied();
        match next {
            Some(slot) => {
                // One bit covers both arc directions of the line
                used.insert(slot.edge);
                stack.push(slot.to);
            }
            None => {
                stack.pop();
                route.push(u);
            }
        }
    }

    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RailwayGraph;

    #[test]
    fn closes_the_circuit_on_a_cycle() {
        let mut graph = RailwayGraph::new();
        for (a, b) in [("S_A", "S_B"), ("S_B", "S_C"), ("S_C", "S_A")] {
            graph.add_line(a, b, 1.0, false).unwrap();
        }
        let subgraph = RelevantSubgraph::build(&graph, false);
        let route = traverse(&subgraph, 0);
        assert_eq!(route.len(), 4);
        assert_eq!(route.first(), route.last());
    }

    #[test]
    fn handles_subtours_spliced_into_the_walk() {
        // A figure-eight: two cycles sharing S_B force a sub-tour splice
        let mut graph = RailwayGraph::new();
        for (a, b) in [
            ("S_A", "S_B"),
            ("S_B", "S_C"),
            ("S_C", "S_A"),
            ("S_B", "S_X"),
            ("S_X", "S_Y"),
            ("S_Y", "S_B"),
        ] {
            graph.add_line(a, b, 1.0, false).unwrap();
        }
        let subgraph = RelevantSubgraph::build(&graph, false);
        let a = graph.resolve("S_A").unwrap();
        let route = traverse(&subgraph, a);
        assert_eq!(route.len(), subgraph.edge_count() + 1);
        assert_eq!(route.first(), Some(&a));
        assert_eq!(route.last(), Some(&a));
    }
}
