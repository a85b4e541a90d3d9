//! Core data structures for the note graph

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Handle of a node inside the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct NodeId(pub u64);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Uids of the export's two built-in task-status marker pages. Every
/// checkbox block references one of them, so they are dropped from ref
/// tracking.
pub const RESERVED_MARKER_UIDS: [&str; 2] = ["KVGudD7AP", "e2rS3SVH7"];

/// Immutable set of uids excluded from `direct_refs` during construction.
#[derive(Debug, Clone)]
pub struct RefFilter {
    excluded: HashSet<String>,
}

impl RefFilter {
    pub fn new(excluded: impl IntoIterator<Item = String>) -> Self {
        RefFilter {
            excluded: excluded.into_iter().collect(),
        }
    }

    pub fn is_excluded(&self, uid: &str) -> bool {
        self.excluded.contains(uid)
    }
}

impl Default for RefFilter {
    fn default() -> Self {
        Self::new(RESERVED_MARKER_UIDS.iter().map(|uid| uid.to_string()))
    }
}

/// A single node in the note graph: a page root (depth 0, titled) or a
/// block (depth > 0, text content).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphNode {
    pub id: NodeId,
    /// Stable identifier from the export, unique across the graph.
    pub uid: String,
    /// Present on page roots only.
    pub title: Option<String>,
    /// Text content; always present on blocks.
    pub string: Option<String>,
    pub create_time: Option<i64>,
    pub edit_time: Option<i64>,
    /// Root = 0, each child one deeper.
    pub depth: u32,
    /// Back handle to the owning node; `None` for page roots.
    pub parent: Option<NodeId>,
    /// Referenced uids in input order, duplicates preserved, reserved
    /// markers excluded.
    pub direct_refs: Vec<String>,
    /// Union of this node's `direct_refs` and every descendant's.
    pub recursive_refs: HashSet<String>,
    /// Owned children, input order.
    pub children: Vec<NodeId>,
}

impl GraphNode {
    /// Page roots are the only titled nodes.
    pub fn is_page(&self) -> bool {
        self.title.is_some()
    }
}
