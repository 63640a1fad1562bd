//! Data model for the railway network
//!
//! Contains the types representing stations and lines, and the graph
//! structure every query operates on.

pub mod network;
pub mod types;

pub use network::RailwayGraph;
pub use types::{Line, Station, StationId, StationKind, TrainType};
