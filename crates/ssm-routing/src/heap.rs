//! Indexed binary min-heap keyed by node id.
//!
//! The heap drives Dijkstra relaxation, so it supports decrease-key by
//! node identity. Keys are dense ids in `[0, capacity)`, which lets a
//! plain `Vec` map each node to its current heap slot: decrease-key is a
//! direct lookup plus a sift-up, O(log n) total, instead of a linear scan
//! for the entry.
//!
//! Entries with equal priority have no defined relative order; callers
//! must not rely on tie-breaking. Priorities are `f64` and must not be
//! NaN (`+inf` is fine and is how Dijkstra seeds unreached nodes).

use ssm_core::NodeId;

const ABSENT: u32 = u32::MAX;

#[derive(Clone, Copy)]
struct Entry {
    node: NodeId,
    priority: f64,
}

/// A fixed-capacity min-heap of `(node, priority)` pairs, at most one
/// entry per node.
pub struct MinHeap {
    entries: Vec<Entry>,
    /// `pos[node]` = the node's slot in `entries`, or `ABSENT`.
    pos: Vec<u32>,
}

impl MinHeap {
    /// An empty heap accepting node ids in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            pos: vec![ABSENT; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `node` currently has an entry.
    pub fn contains(&self, node: NodeId) -> bool {
        self.pos.get(node.index()).is_some_and(|&p| p != ABSENT)
    }

    /// Add an entry for `node`. Returns `false` (and changes nothing) if
    /// the id is out of range or already present — one entry per node is
    /// what bounds the heap at its capacity.
    pub fn insert(&mut self, node: NodeId, priority: f64) -> bool {
        match self.pos.get(node.index()) {
            Some(&ABSENT) => {}
            _ => return false,
        }
        let slot = self.entries.len();
        self.entries.push(Entry { node, priority });
        self.pos[node.index()] = slot as u32;
        self.sift_up(slot);
        true
    }

    /// Remove and return the minimum-priority entry, or `None` when
    /// empty. Never yields a stale or partial element.
    pub fn extract_min(&mut self) -> Option<(NodeId, f64)> {
        let root = *self.entries.first()?;
        self.pos[root.node.index()] = ABSENT;

        let last = self.entries.pop().filter(|_| !self.entries.is_empty());
        if let Some(last) = last {
            self.entries[0] = last;
            self.pos[last.node.index()] = 0;
            self.sift_down(0);
        }
        Some((root.node, root.priority))
    }

    /// Lower `node`'s priority to `new_priority` and restore heap order.
    /// Returns `false` if the node has no entry or the new priority is
    /// not strictly lower.
    pub fn decrease_key(&mut self, node: NodeId, new_priority: f64) -> bool {
        let Some(&slot) = self.pos.get(node.index()) else {
            return false;
        };
        if slot == ABSENT {
            return false;
        }
        let slot = slot as usize;
        if new_priority >= self.entries[slot].priority {
            return false;
        }
        self.entries[slot].priority = new_priority;
        self.sift_up(slot);
        true
    }

    // ── Heap order maintenance ────────────────────────────────────────────

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].priority <= self.entries[i].priority {
                break;
            }
            self.swap_slots(i, parent);
            i = parent;
        }
    }

    /// Iterative sift-down from slot `i`.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let mut smallest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < len
                    && self.entries[child].priority < self.entries[smallest].priority
                {
                    smallest = child;
                }
            }
            if smallest == i {
                return;
            }
            self.swap_slots(i, smallest);
            i = smallest;
        }
    }

    /// Swap two entries and keep the slot index in sync.
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.pos[self.entries[a].node.index()] = a as u32;
        self.pos[self.entries[b].node.index()] = b as u32;
    }
}
