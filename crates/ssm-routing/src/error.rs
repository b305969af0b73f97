//! Routing error taxonomy.
//!
//! Every variant is an expected, recoverable query outcome: the caller
//! (typically the REPL) renders it and carries on. Nothing here ever
//! aborts the process, and no query can invalidate the map it ran
//! against.

use thiserror::Error;

use ssm_core::NodeId;

/// Why a route was rejected or a search came up empty.
#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("node {0} appeared more than once")]
    DuplicateNode(NodeId),

    #[error("there are no roads between node {0} and node {1}")]
    NoConnectingRoad(NodeId, NodeId),

    /// The two nodes share a way but sit on non-consecutive positions of
    /// its chain: the step would skip intermediate nodes.
    #[error("cannot go directly from node {0} to node {1}")]
    NotAdjacentInWay(NodeId, NodeId),

    #[error("cannot go in reverse from node {0} to node {1}")]
    AgainstOneWay(NodeId, NodeId),

    #[error("must specify at least two nodes")]
    TooShort,

    #[error("no path found from node {0} to node {1}")]
    NoPath(NodeId, NodeId),
}

pub type RouteResult<T> = Result<T, RouteError>;
