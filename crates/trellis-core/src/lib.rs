//! Trellis Core — note-graph node model, graph index, and page classifier

pub mod classify;
pub mod date;
pub mod error;
pub mod graph;
pub mod index;
pub mod model;
pub mod treelike;


#[cfg(test)]
pub mod test_utils;

pub use classify::{CategorySets, classify_pages};
pub use date::is_valid_date;
pub use error::GraphError;
pub use graph::{Graph, NodeView};
pub use index::GraphIndex;
pub use model::{GraphNode, NodeId, RESERVED_MARKER_UIDS, RefFilter};
pub use treelike::TreeLike;
