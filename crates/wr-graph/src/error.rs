//! Graph-subsystem error type.

use thiserror::Error;

use wr_core::ZoneId;

/// Errors produced by `wr-graph`.
///
/// All of these describe a malformed graph or query, never a missing path:
/// unreachable pairs are reported with the [`UNREACHABLE`](crate::UNREACHABLE)
/// sentinel.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("zone {0} not found in graph")]
    NodeNotFound(ZoneId),

    #[error("road {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: ZoneId, to: ZoneId, weight: i64 },

    #[error("road {from} -> {to} weight {weight} exceeds the supported range")]
    WeightTooLarge { from: ZoneId, to: ZoneId, weight: i64 },

    #[error("cannot build a distance matrix over an empty graph")]
    EmptyGraph,
}

pub type GraphResult<T> = Result<T, GraphError>;
