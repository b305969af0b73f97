//! R-tree spatial index over node coordinates.
//!
//! Lets callers resolve a raw `(lat, lon)` to the nearest graph node
//! before issuing routing queries. Distance is squared planar degrees,
//! which preserves nearest-neighbor order well enough at city scale.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use ssm_core::NodeId;

use crate::map::Node;

/// Entry stored in the R-tree: a `[lat, lon]` point with its node id.
#[derive(Clone, Debug)]
pub(crate) struct NodeEntry {
    point: [f64; 2],
    pub(crate) id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

/// Bulk-load the index from the finished node arena.
pub(crate) fn build_index(nodes: &[Node]) -> RTree<NodeEntry> {
    let entries: Vec<NodeEntry> = nodes
        .iter()
        .map(|n| NodeEntry {
            point: [n.position.lat, n.position.lon],
            id: n.id,
        })
        .collect();
    RTree::bulk_load(entries)
}
