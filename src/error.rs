//! Error types for graph operations.
//!
//! Every checked operation validates its arguments before touching any state,
//! so a returned error means the graph is exactly as it was before the call.

use core::fmt;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Which positional argument of an operation failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexRole {
    /// A plain node position (`at`, `isolate`, `remove`, degree queries).
    Node,
    /// The head endpoint of an edge operation.
    From,
    /// The tail endpoint of an edge operation.
    To,
    /// An outgoing-neighbor selector on a cursor step.
    Neighbor,
}

impl fmt::Display for IndexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Node => "node",
            Self::From => "from-node",
            Self::To => "to-node",
            Self::Neighbor => "neighbor",
        })
    }
}

/// The error type for all checked graph and cursor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A position argument was at or beyond the valid range.
    #[error("{role} index {index} is out of range ({len} valid)")]
    IndexOutOfRange {
        /// Which argument was invalid.
        role: IndexRole,
        /// The offending index.
        index: usize,
        /// Number of valid indices at the time of the call.
        len: usize,
    },

    /// A cursor was requested from a graph with no nodes.
    #[error("cannot create a cursor into an empty graph")]
    EmptyGraph,

    /// The node a cursor points at has been removed from the graph.
    #[error("cursor refers to a node that is no longer in the graph")]
    StaleCursor,

    /// A cursor was used with a graph other than the one that created it.
    #[error("cursor does not belong to this graph")]
    ForeignCursor,
}

impl GraphError {
    /// Builds an out-of-range error for the given argument role.
    pub(crate) fn out_of_range(role: IndexRole, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { role, index, len }
    }
}
