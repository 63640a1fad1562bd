//! Railway network analysis
//!
//! Models a railway network as a weighted, undirected multigraph and
//! answers four classes of questions over it: cheapest routes between
//! two or more ordered stations, train-type-constrained reachability,
//! full-network connectivity, and Eulerian maintenance routes that
//! traverse every relevant line exactly once.
//!
//! The graph is populated once (see [`loading`]) and is read-only for
//! every query. Queries return plain data values; nothing is printed or
//! rendered from this crate.

pub mod analysis;
pub mod error;
pub mod loading;
pub mod maintenance;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::{Line, RailwayGraph, Station, StationId, StationKind, TrainType};
