//! Reachability and connectivity analysis

mod closure;
mod reachability;

pub use closure::{ClosureMatrix, is_connected_by_closure, transitive_closure};
pub use reachability::{
    UnreachableReason, all_pairs_reachable, is_reachable, unreachability_reason,
};
