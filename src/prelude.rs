//! Convenience re-exports of the main query surface.

pub use crate::analysis::{
    ClosureMatrix, UnreachableReason, all_pairs_reachable, is_connected_by_closure, is_reachable,
    transitive_closure, unreachability_reason,
};
pub use crate::error::Error;
pub use crate::loading::{load_lines, load_network, load_stations};
pub use crate::maintenance::{
    EulerianInfo, MaintenanceVerdict, RouteStrategy, eulerian_analysis, maintenance_route,
    potential_start_stations,
};
pub use crate::model::{Line, RailwayGraph, Station, StationId, StationKind, TrainType};
pub use crate::routing::{PathResult, route_through, shortest_path};
