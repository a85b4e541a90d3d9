//! Top-level index over a parsed export

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GraphError;
use crate::graph::{Graph, NodeView};
use crate::model::{GraphNode, NodeId, RefFilter};

/// The whole parsed export: every page tree in one arena, the original raw
/// records for positional lookup, and a reverse uid index over page roots.
///
/// Read-only once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphIndex {
    raw_records: Vec<Value>,
    graph: Graph,
    pages: HashMap<String, NodeId>,
    uid_to_title: HashMap<String, String>,
}

impl GraphIndex {
    /// Parse a sequence of top-level page records.
    ///
    /// Duplicate page titles are not an error: the later record silently
    /// replaces the earlier mapping entry, and colliding root uids resolve
    /// the same way. `uid_to_title` is derived by walking the records in
    /// order against the final `pages` map, which keeps the last-write-wins
    /// outcome deterministic.
    pub fn from_records(raw_records: Vec<Value>, filter: &RefFilter) -> Result<Self, GraphError> {
        let mut graph = Graph::new();
        let mut pages = HashMap::with_capacity(raw_records.len());

        for record in &raw_records {
            let root = graph.build_node(record, None, 0, filter)?;
            let title = match graph.node(root).and_then(|n| n.title.clone()) {
                Some(title) => title,
                None => {
                    return Err(GraphError::InvalidInput(
                        "top-level record has no string `title`".into(),
                    ));
                }
            };
            if pages.insert(title.clone(), root).is_some() {
                tracing::warn!("Duplicate page title {:?}, keeping the later record", title);
            }
        }

        let mut uid_to_title = HashMap::with_capacity(pages.len());
        for record in &raw_records {
            if let Some(title) = record.get("title").and_then(Value::as_str) {
                if let Some(node) = pages.get(title).and_then(|&root| graph.node(root)) {
                    uid_to_title.insert(node.uid.clone(), title.to_string());
                }
            }
        }

        Ok(GraphIndex {
            raw_records,
            graph,
            pages,
            uid_to_title,
        })
    }

    /// Number of distinct page titles.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn pages(&self) -> &HashMap<String, NodeId> {
        &self.pages
    }

    pub fn uid_to_title(&self) -> &HashMap<String, String> {
        &self.uid_to_title
    }

    pub fn raw_records(&self) -> &[Value] {
        &self.raw_records
    }

    /// Get an original raw record by its position in the export.
    pub fn raw_record(&self, position: usize) -> Result<&Value, GraphError> {
        self.raw_records
            .get(position)
            .ok_or(GraphError::PositionOutOfRange {
                position,
                len: self.raw_records.len(),
            })
    }

    /// Get a page's root node by title.
    pub fn page(&self, title: &str) -> Result<&GraphNode, GraphError> {
        self.pages
            .get(title)
            .and_then(|&root| self.graph.node(root))
            .ok_or_else(|| GraphError::PageNotFound(title.to_string()))
    }

    /// Get a page's root node by its position in the export, resolving
    /// through the record's title.
    ///
    /// Sharp edge: when a later record reused this record's title, the
    /// title map holds the later node and that is what comes back here;
    /// position and title map can desynchronize after an overwrite.
    pub fn page_by_position(&self, position: usize) -> Result<&GraphNode, GraphError> {
        let record = self.raw_record(position)?;
        let title = record.get("title").and_then(Value::as_str).ok_or_else(|| {
            GraphError::InvalidInput(format!("record at position {position} has no string `title`"))
        })?;
        self.page(title)
    }

    /// Borrow a page root together with the arena, for tree walks.
    pub fn page_view(&self, title: &str) -> Result<NodeView<'_>, GraphError> {
        let node = self.page(title)?;
        self.graph
            .view(node.id)
            .ok_or_else(|| GraphError::PageNotFound(title.to_string()))
    }
}
