//! Slot-filling construction of a [`StreetMap`].
//!
//! Capacities are fixed up front; nodes and ways may then be added in any
//! order (ways are free to reference nodes that arrive later). Per-entry
//! checks run at insertion; cross-entry checks — every slot filled, node
//! and way incidence lists mutually consistent — run once in
//! [`build`](StreetMapBuilder::build).

use rustc_hash::FxHashSet;

use ssm_core::{GeoPoint, NodeId, WayId};

use crate::error::{GraphError, GraphResult};
use crate::map::{Node, StreetMap, Way};
use crate::spatial;

/// Construct a [`StreetMap`] incrementally, then call [`build`](Self::build).
#[derive(Debug)]
pub struct StreetMapBuilder {
    nodes: Vec<Option<Node>>,
    ways: Vec<Option<Way>>,
}

impl StreetMapBuilder {
    /// Fix the store capacities. Both must be non-zero.
    pub fn new(nr_nodes: usize, nr_ways: usize) -> GraphResult<Self> {
        if nr_nodes == 0 || nr_ways == 0 {
            return Err(GraphError::ZeroCapacity);
        }
        Ok(Self {
            nodes: vec![None; nr_nodes],
            ways: vec![None; nr_ways],
        })
    }

    /// Add the node with dense id `id`. Each id may be used exactly once.
    pub fn add_node(
        &mut self,
        id: NodeId,
        position: GeoPoint,
        way_ids: Vec<WayId>,
    ) -> GraphResult<()> {
        let capacity = self.nodes.len();
        let slot = self
            .nodes
            .get_mut(id.index())
            .ok_or(GraphError::NodeIdOutOfRange { id, capacity })?;
        if slot.is_some() {
            return Err(GraphError::DuplicateNode(id));
        }
        *slot = Some(Node { id, position, way_ids });
        Ok(())
    }

    /// Add the way with dense id `id`.
    ///
    /// The node sequence must be non-empty and free of repeats, and the
    /// speed limit non-negative. Entries are *not* range-checked here;
    /// they are validated against the node population in `build()`.
    pub fn add_way(
        &mut self,
        id: WayId,
        name: impl Into<String>,
        speed_kmh: f64,
        one_way: bool,
        node_ids: Vec<NodeId>,
    ) -> GraphResult<()> {
        let capacity = self.ways.len();
        let slot = self
            .ways
            .get_mut(id.index())
            .ok_or(GraphError::WayIdOutOfRange { id, capacity })?;
        if slot.is_some() {
            return Err(GraphError::DuplicateWay(id));
        }
        if node_ids.is_empty() {
            return Err(GraphError::EmptyWay(id));
        }
        if !(speed_kmh >= 0.0) || !speed_kmh.is_finite() {
            return Err(GraphError::InvalidSpeed(id));
        }

        // A node repeated within one way would make its adjacency
        // ambiguous; reject rather than guess.
        let mut seen = FxHashSet::default();
        for &node in &node_ids {
            if !seen.insert(node) {
                return Err(GraphError::RepeatedNodeInWay { way: id, node });
            }
        }

        *slot = Some(Way {
            id,
            name: name.into(),
            speed_kmh,
            one_way,
            node_ids,
        });
        Ok(())
    }

    /// Finish construction.
    ///
    /// Verifies that every slot was filled and that incidence agrees in
    /// both directions: each way's chain entries list that way back, and
    /// each node's incident ways contain that node. Then bulk-loads the
    /// spatial index and freezes the map.
    pub fn build(self) -> GraphResult<StreetMap> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for (i, slot) in self.nodes.into_iter().enumerate() {
            nodes.push(slot.ok_or(GraphError::MissingNode(NodeId(i as u32)))?);
        }
        let mut ways = Vec::with_capacity(self.ways.len());
        for (i, slot) in self.ways.into_iter().enumerate() {
            ways.push(slot.ok_or(GraphError::MissingWay(WayId(i as u32)))?);
        }

        for way in &ways {
            for &node_id in &way.node_ids {
                let ok = nodes
                    .get(node_id.index())
                    .is_some_and(|n| n.way_ids.contains(&way.id));
                if !ok {
                    return Err(GraphError::InconsistentIncidence {
                        node: node_id,
                        way: way.id,
                    });
                }
            }
        }
        for node in &nodes {
            for &way_id in &node.way_ids {
                let ok = ways
                    .get(way_id.index())
                    .is_some_and(|w| w.contains(node.id));
                if !ok {
                    return Err(GraphError::InconsistentIncidence {
                        node: node.id,
                        way: way_id,
                    });
                }
            }
        }

        let spatial_idx = spatial::build_index(&nodes);
        Ok(StreetMap { nodes, ways, spatial_idx })
    }
}
