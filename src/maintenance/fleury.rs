//! Bridge-aware Eulerian traversal (Fleury's algorithm)

use fixedbitset::FixedBitSet;

use super::subgraph::RelevantSubgraph;
use crate::model::StationId;

/// Walks the relevant subgraph from `start`, preferring non-bridge edges
/// so the traversal is never stranded on the far side of a cut. The
/// bridge test recounts reachability per candidate, making this strategy
/// O(m^2); it is kept as the reference alternative to the linear stack
/// strategy and must produce a route over the same edge set.
pub(crate) fn traverse(subgraph: &RelevantSubgraph, start: StationId) -> Vec<StationId> {
    let mut used = subgraph.fresh_usage();
    let mut stack = vec![start];
    let mut route = Vec::with_capacity(subgraph.edge_count() + 1);

    while let Some(&u) = stack.last() {
        match pick_edge(subgraph, u, &mut used) {
            Some((to, edge)) => {
                // One bit covers both arc directions of the line
                used.insert(edge);
                stack.push(to);
            }
            None => {
                stack.pop();
                route.push(u);
            }
        }
    }

    // Pops accumulate the walk back to front
    route.reverse();
    route
}

/// First unused edge at `u` that is not a bridge; a bridge is taken only
/// when no alternative remains.
fn pick_edge(
    subgraph: &RelevantSubgraph,
    u: StationId,
    used: &mut FixedBitSet,
) -> Option<(StationId, usize)> {
    let unused: Vec<(StationId, usize)> = subgraph
        .slots(u)
        .iter()
        .filter(|slot| !used.contains(slot.edge))
        .map(|slot| (slot.to, slot.edge))
        .collect();

    match unused.as_slice() {
        [] => None,
        [only] => Some(*only),
        candidates => candidates
            .iter()
            .copied()
            .find(|&(_, edge)| !is_bridge(subgraph, u, edge, used))
            .or_else(|| candidates.first().copied()),
    }
}

/// The edge is a bridge iff tentatively consuming it shrinks the set of
/// nodes reachable from `u`. The tentative mark is undone before
/// returning.
fn is_bridge(
    subgraph: &RelevantSubgraph,
    u: StationId,
    edge: usize,
    used: &mut FixedBitSet,
) -> bool {
    let before = subgraph.reachable_count(u, used);
    used.insert(edge);
    let after = subgraph.reachable_count(u, used);
    used.set(edge, false);
    after < before
}
