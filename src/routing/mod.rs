//! Shortest-path routing over the railway graph

mod dijkstra;
mod multi_stop;

pub use dijkstra::{PathResult, shortest_path};
pub use multi_stop::route_through;
