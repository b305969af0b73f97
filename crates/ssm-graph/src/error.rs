//! Graph-construction and loader error types.

use thiserror::Error;

use ssm_core::{NodeId, WayId};

/// Errors raised while building a [`StreetMap`](crate::StreetMap).
///
/// Construction fails as a unit: any of these aborts the whole build and
/// the partially-filled builder is dropped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("a street map needs at least one node and one way")]
    ZeroCapacity,

    #[error("node id {id} is outside the node capacity {capacity}")]
    NodeIdOutOfRange { id: NodeId, capacity: usize },

    #[error("way id {id} is outside the way capacity {capacity}")]
    WayIdOutOfRange { id: WayId, capacity: usize },

    #[error("node {0} added more than once")]
    DuplicateNode(NodeId),

    #[error("way {0} added more than once")]
    DuplicateWay(WayId),

    #[error("way {0} has an empty node sequence")]
    EmptyWay(WayId),

    #[error("way {0} has a negative or non-finite speed limit")]
    InvalidSpeed(WayId),

    #[error("way {way} lists node {node} more than once")]
    RepeatedNodeInWay { way: WayId, node: NodeId },

    #[error("node {0} was never added")]
    MissingNode(NodeId),

    #[error("way {0} was never added")]
    MissingWay(WayId),

    #[error("node {node} and way {way} disagree about incidence")]
    InconsistentIncidence { node: NodeId, way: WayId },
}

/// Errors raised by the "Simple Street Map" text loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type GraphResult<T> = Result<T, GraphError>;
