//! Time-optimal routing: Dijkstra's algorithm over the implicit graph.
//!
//! Ways act as weighted edges, weight = leg travel time in minutes.
//! Weights are non-negative (time at a non-negative speed), which is what
//! makes an extracted node's time final and lets the search stop the
//! moment the target leaves the queue. A settled node is never relaxed
//! again, so zero-length legs cannot loop.
//!
//! All per-search state (heap, tentative times, predecessors, visited
//! flags) is owned by the call frame: searches against the same map may
//! run concurrently, and every exit path releases everything.

use log::debug;

use ssm_core::NodeId;
use ssm_graph::StreetMap;

use crate::error::{RouteError, RouteResult};
use crate::heap::MinHeap;
use crate::travel;

/// A search result: the node sequence and its total travel time.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Visited nodes in travel order, start and end inclusive.
    pub nodes: Vec<NodeId>,
    /// Total travel time in minutes; consistent with
    /// [`travel_time`](crate::travel_time) applied to `nodes`.
    pub minutes: f64,
}

/// Compute the minimum-travel-time route from `start` to `end`.
///
/// Both ids are validated against the node population up front. A
/// search from a node to itself is trivially the single-node route.
pub fn shortest_path(map: &StreetMap, start: NodeId, end: NodeId) -> RouteResult<Route> {
    if map.node(start).is_none() {
        return Err(RouteError::UnknownNode(start));
    }
    if map.node(end).is_none() {
        return Err(RouteError::UnknownNode(end));
    }
    if start == end {
        return Ok(Route { nodes: vec![start], minutes: 0.0 });
    }

    let n = map.node_count();
    let mut times = vec![f64::INFINITY; n];
    let mut prev = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];
    let mut heap = MinHeap::with_capacity(n);

    times[start.index()] = 0.0;
    for i in 0..n {
        let id = NodeId(i as u32);
        heap.insert(id, times[id.index()]);
    }

    let mut reached = None;
    while let Some((current, time)) = heap.extract_min() {
        if time.is_infinite() {
            // Everything still queued is unreachable, the target included.
            break;
        }
        if current == end {
            reached = Some(time);
            break;
        }
        visited[current.index()] = true;

        let Some(from) = map.node(current) else {
            continue;
        };
        for neighbor in map.neighbors(current) {
            if visited[neighbor.node.index()] {
                continue;
            }
            let (Some(way), Some(to)) = (map.way(neighbor.via), map.node(neighbor.node)) else {
                continue;
            };
            let candidate = time + travel::minutes(from.position, to.position, way.speed_kmh);
            if candidate < times[neighbor.node.index()] {
                times[neighbor.node.index()] = candidate;
                prev[neighbor.node.index()] = current;
                heap.decrease_key(neighbor.node, candidate);
            }
        }
    }

    let Some(minutes) = reached else {
        return Err(RouteError::NoPath(start, end));
    };

    // Walk the predecessor chain back from the target.
    let mut nodes = vec![end];
    let mut at = end;
    while at != start {
        at = prev[at.index()];
        if at == NodeId::INVALID {
            return Err(RouteError::NoPath(start, end));
        }
        nodes.push(at);
    }
    nodes.reverse();

    debug!(
        "path {start} -> {end}: {} nodes, {minutes:.4} min",
        nodes.len()
    );
    Ok(Route { nodes, minutes })
}
