//! Error types for the undigraph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the undigraph library.
///
/// Expected "not applicable" outcomes (missing member, missing edge) are
/// reported through `bool`/`Option` returns on the operations themselves;
/// these variants are reserved for contract violations and failed lookups
/// the caller asked to be surfaced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An operation named a vertex id that is not a member of the graph.
    #[error("vertex {0} not found in graph")]
    VertexNotFound(VertexId),

    /// A value-based lookup found no vertex holding the requested value.
    #[error("no vertex holds the requested value")]
    ValueNotFound,

    /// Attempted to insert a vertex that still carries incident edges.
    #[error("vertex {0} still has incident edges")]
    HasNeighbors(VertexId),

    /// Attempted to insert a vertex whose id is already a member.
    #[error("vertex {0} is already present in graph")]
    DuplicateVertex(VertexId),
}

/// Convenience result type for undigraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
