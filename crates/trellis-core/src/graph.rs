//! Arena-backed page trees with handle-based parent/child links

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GraphError;
use crate::model::{GraphNode, NodeId, RefFilter};

/// Node storage for every page tree in one export.
///
/// Ownership runs strictly parent to children; the `parent` back handle is
/// an index into this arena, never a second ownership edge.
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("node_count", &self.nodes.len())
            .finish()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    /// Total number of nodes across all page trees.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes in construction order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// Handles of every ancestor of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id).and_then(|n| n.parent);
        while let Some(parent_id) = current {
            ancestors.push(parent_id);
            current = self.node(parent_id).and_then(|n| n.parent);
        }
        ancestors
    }

    /// Borrow a node together with the arena, for tree walks.
    pub fn view(&self, id: NodeId) -> Option<NodeView<'_>> {
        self.nodes.get(id.index()).map(|node| NodeView { graph: self, node })
    }

    /// Build one node from a raw record, recursing into its children.
    ///
    /// Children finish before their parent's aggregation step runs, so by
    /// the time this call returns the node's `recursive_refs` covers its
    /// whole subtree; the final step folds that closure into `parent`.
    pub(crate) fn build_node(
        &mut self,
        raw: &Value,
        parent: Option<NodeId>,
        depth: u32,
        filter: &RefFilter,
    ) -> Result<NodeId, GraphError> {
        let obj = raw.as_object().ok_or_else(|| {
            GraphError::InvalidInput(format!(
                "node record must be a JSON object, got {}",
                value_kind(raw)
            ))
        })?;

        let uid = obj
            .get("uid")
            .and_then(Value::as_str)
            .ok_or_else(|| GraphError::InvalidInput("node record has no string `uid`".into()))?
            .to_string();

        let ref_entries: &[Value] = match obj.get("refs") {
            Some(value) => value
                .as_array()
                .ok_or_else(|| {
                    GraphError::InvalidInput(format!("`refs` of {uid:?} must be an array"))
                })?
                .as_slice(),
            None => &[],
        };
        let child_records: &[Value] = match obj.get("children") {
            Some(value) => value
                .as_array()
                .ok_or_else(|| {
                    GraphError::InvalidInput(format!("`children` of {uid:?} must be an array"))
                })?
                .as_slice(),
            None => &[],
        };

        let mut direct_refs = Vec::with_capacity(ref_entries.len());
        for entry in ref_entries {
            let ref_uid = entry.get("uid").and_then(Value::as_str).ok_or_else(|| {
                GraphError::InvalidInput(format!("ref entry of {uid:?} has no string `uid`"))
            })?;
            if !filter.is_excluded(ref_uid) {
                direct_refs.push(ref_uid.to_string());
            }
        }

        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(GraphNode {
            id,
            uid,
            title: obj.get("title").and_then(Value::as_str).map(str::to_string),
            string: obj.get("string").and_then(Value::as_str).map(str::to_string),
            create_time: obj.get("create-time").and_then(Value::as_i64),
            edit_time: obj.get("edit-time").and_then(Value::as_i64),
            depth,
            parent,
            recursive_refs: direct_refs.iter().cloned().collect(),
            direct_refs,
            children: Vec::new(),
        });

        for child in child_records {
            let child_id = self.build_node(child, Some(id), depth + 1, filter)?;
            self.nodes[id.index()].children.push(child_id);
        }

        if let Some(parent_id) = parent {
            let closure: Vec<String> = self.nodes[id.index()]
                .recursive_refs
                .iter()
                .cloned()
                .collect();
            self.nodes[parent_id.index()].recursive_refs.extend(closure);
        }

        Ok(id)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A node borrowed together with its arena, so child and parent handles
/// can be resolved during a walk.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    graph: &'a Graph,
    node: &'a GraphNode,
}

impl<'a> NodeView<'a> {
    pub fn node(&self) -> &'a GraphNode {
        self.node
    }

    pub fn child_views(&self) -> Vec<NodeView<'a>> {
        self.node
            .children
            .iter()
            .filter_map(|&child| self.graph.view(child))
            .collect()
    }
}
