//! Adjacency derived from way geometry.
//!
//! Neighbors are read straight off the way chains, so the rules in one
//! place govern both route validation and the shortest-path search:
//! consecutive positions only (no skipping), and one-way chains traversable
//! in increasing-index order only.

use ssm_core::{NodeId, WayId};

use crate::map::StreetMap;

/// One directly reachable node, together with the way that provides the
/// connection. The same neighbor may appear once per connecting way;
/// consumers price each occurrence with its own way's speed limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: NodeId,
    pub via: WayId,
}

impl StreetMap {
    /// All nodes directly reachable from `node` in one legal step.
    ///
    /// For each incident way, the chain position of `node` decides:
    /// the next entry is always reachable (forward travel), the previous
    /// entry only when the way is not one-way. A node appears at most
    /// once per way chain (builder invariant), so one position lookup per
    /// way suffices.
    ///
    /// Unknown ids yield an empty list; callers that must distinguish
    /// "unknown" from "isolated" check the id first.
    pub fn neighbors(&self, node: NodeId) -> Vec<Neighbor> {
        let Some(n) = self.node(node) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        for way in self.incident_ways(n) {
            let chain = &way.node_ids;
            if chain.len() < 2 {
                continue;
            }
            let Some(at) = way.position_of(node) else {
                continue;
            };

            if at + 1 < chain.len() {
                out.push(Neighbor { node: chain[at + 1], via: way.id });
            }
            if at > 0 && !way.one_way {
                out.push(Neighbor { node: chain[at - 1], via: way.id });
            }
        }
        out
    }
}
