//! Route validation and travel-time computation.
//!
//! A route is an explicit ordered list of node ids supplied by the
//! caller. Validation walks the list front to back: ids must exist, no
//! node may repeat (routes are simple paths), and every consecutive pair
//! must be a single legal step along some way — consecutive chain
//! positions, in the permitted direction. The first failure aborts the
//! computation; no partial sum escapes.

use rustc_hash::FxHashSet;

use ssm_core::{GeoPoint, NodeId};
use ssm_graph::StreetMap;

use crate::error::{RouteError, RouteResult};

/// Total travel time of `route` in minutes.
///
/// Each leg is timed at the speed limit of the way that carries it: no
/// traffic, no acceleration, instantaneous turns.
pub fn travel_time(map: &StreetMap, route: &[NodeId]) -> RouteResult<f64> {
    if route.len() < 2 {
        return Err(RouteError::TooShort);
    }
    for &id in route {
        if map.node(id).is_none() {
            return Err(RouteError::UnknownNode(id));
        }
    }
    let mut seen = FxHashSet::default();
    for &id in route {
        if !seen.insert(id) {
            return Err(RouteError::DuplicateNode(id));
        }
    }

    let mut total = 0.0;
    for pair in route.windows(2) {
        total += leg_time(map, pair[0], pair[1])?;
    }
    Ok(total)
}

/// Validate one step `a → b` and return its travel time in minutes.
///
/// The step is judged against the first way incident to both nodes (in
/// `a`'s incident order); sharing a way is not enough — the nodes must
/// occupy consecutive chain positions, and a one-way chain only permits
/// the increasing-index direction.
pub(crate) fn leg_time(map: &StreetMap, a: NodeId, b: NodeId) -> RouteResult<f64> {
    let an = map.node(a).ok_or(RouteError::UnknownNode(a))?;
    let bn = map.node(b).ok_or(RouteError::UnknownNode(b))?;

    let shared = an.way_ids.iter().copied().find(|w| bn.way_ids.contains(w));
    let Some(way) = shared.and_then(|w| map.way(w)) else {
        return Err(RouteError::NoConnectingRoad(a, b));
    };

    // Both positions exist: incidence was cross-checked at build.
    let (Some(pa), Some(pb)) = (way.position_of(a), way.position_of(b)) else {
        return Err(RouteError::NoConnectingRoad(a, b));
    };
    if pa.abs_diff(pb) != 1 {
        return Err(RouteError::NotAdjacentInWay(a, b));
    }
    if way.one_way && pb != pa + 1 {
        return Err(RouteError::AgainstOneWay(a, b));
    }

    Ok(minutes(an.position, bn.position, way.speed_kmh))
}

/// Minutes to cover the great-circle distance at `speed_kmh`.
pub(crate) fn minutes(from: GeoPoint, to: GeoPoint, speed_kmh: f64) -> f64 {
    let metres = from.distance_km(to) * 1000.0;
    let metres_per_sec = speed_kmh / 3.6;
    metres / metres_per_sec / 60.0
}
