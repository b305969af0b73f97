//! The street-map graph store.
//!
//! # Data layout
//!
//! Nodes and ways live in two arena `Vec`s sized once at construction and
//! addressed by their dense integer ids, so every lookup is a bounds check
//! plus an index. The store is frozen after [`StreetMapBuilder`] finishes:
//! no query mutates it, and it is `Send + Sync` for free.
//!
//! # Edge semantics
//!
//! There is no explicit edge list. An edge exists between two nodes iff
//! they occupy *consecutive* positions in some way's node sequence;
//! co-membership in a way is not enough. Traversal direction along a
//! one-way sequence is increasing-index only. Adjacency is derived on
//! demand in [`neighbors`](StreetMap::neighbors).
//!
//! [`StreetMapBuilder`]: crate::StreetMapBuilder

use rstar::RTree;

use ssm_core::{GeoPoint, NodeId, WayId};

use crate::spatial::NodeEntry;

/// An intersection (or isolated point) of the street map.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub position: GeoPoint,
    /// Ways whose node sequence contains this node, in input order.
    /// The order carries no meaning.
    pub way_ids: Vec<WayId>,
}

/// A named road segment: an ordered chain of nodes with a speed limit.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Way {
    pub id: WayId,
    pub name: String,
    /// Speed limit in km/h, non-negative.
    pub speed_kmh: f64,
    /// When set, travel is legal only in increasing-index order along
    /// `node_ids`.
    pub one_way: bool,
    /// The physical chain of the road. Adjacent entries are directly
    /// connected; each node appears at most once (enforced at build).
    pub node_ids: Vec<NodeId>,
}

impl Way {
    /// Position of `node` within this way's chain, if present.
    ///
    /// At most one position exists because the builder rejects ways that
    /// repeat a node.
    #[inline]
    pub fn position_of(&self, node: NodeId) -> Option<usize> {
        self.node_ids.iter().position(|&n| n == node)
    }

    /// Whether `node` is part of this way's chain.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node_ids.contains(&node)
    }
}

/// The frozen street-map graph: all nodes and ways, plus a spatial index.
///
/// Built once by [`StreetMapBuilder`](crate::StreetMapBuilder); every
/// method on this type is read-only.
#[derive(Debug)]
pub struct StreetMap {
    pub(crate) nodes: Vec<Node>,
    pub(crate) ways: Vec<Way>,
    pub(crate) spatial_idx: RTree<NodeEntry>,
}

impl StreetMap {
    // ── Lookup ────────────────────────────────────────────────────────────

    /// O(1) node lookup; `None` when `id` is out of range.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// O(1) way lookup; `None` when `id` is out of range.
    #[inline]
    pub fn way(&self, id: WayId) -> Option<&Way> {
        self.ways.get(id.index())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn ways(&self) -> impl Iterator<Item = &Way> {
        self.ways.iter()
    }

    // ── Name search ───────────────────────────────────────────────────────

    /// Ids of all ways whose name contains `keyword`, ascending.
    pub fn find_ways_by_name(&self, keyword: &str) -> Vec<WayId> {
        self.ways
            .iter()
            .filter(|w| w.name.contains(keyword))
            .map(|w| w.id)
            .collect()
    }

    /// Ids of all nodes that touch a way matching `first` — and, when
    /// `second` is given, a *different* way matching `second`.
    ///
    /// The two-keyword form exists to find intersections ("Yonge and
    /// Bloor"), so one way matching both keywords does not qualify: each
    /// keyword must be satisfied by a distinct incident way.
    pub fn find_nodes_by_names(&self, first: &str, second: Option<&str>) -> Vec<NodeId> {
        let Some(second) = second else {
            return self
                .nodes
                .iter()
                .filter(|n| self.incident_ways(n).any(|w| w.name.contains(first)))
                .map(|n| n.id)
                .collect();
        };

        self.nodes
            .iter()
            .filter(|n| {
                let m1: Vec<WayId> = self
                    .incident_ways(n)
                    .filter(|w| w.name.contains(first))
                    .map(|w| w.id)
                    .collect();
                let m2: Vec<WayId> = self
                    .incident_ways(n)
                    .filter(|w| w.name.contains(second))
                    .map(|w| w.id)
                    .collect();
                // A distinct pair exists unless both match-sets collapse to
                // the same single way.
                !m1.is_empty()
                    && !m2.is_empty()
                    && !(m1.len() == 1 && m2.len() == 1 && m1[0] == m2[0])
            })
            .map(|n| n.id)
            .collect()
    }

    // ── Spatial ───────────────────────────────────────────────────────────

    /// The node closest to `position` (planar degree distance).
    ///
    /// `None` only when the map has no nodes, which `build()` rules out.
    pub fn nearest_node(&self, position: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[position.lat, position.lon])
            .map(|e| e.id)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The ways incident to `node`, in the node's stored order.
    ///
    /// Incidence ids were validated at build, hence the infallible lookup.
    pub(crate) fn incident_ways<'a>(&'a self, node: &'a Node) -> impl Iterator<Item = &'a Way> {
        node.way_ids.iter().map(|&w| &self.ways[w.index()])
    }
}
