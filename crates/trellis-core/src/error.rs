//! Typed errors for graph construction and lookup

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The raw input for a node was not a structured key-value record, or
    /// a required field inside one was malformed.
    #[error("invalid node input: {0}")]
    InvalidInput(String),

    #[error("no page titled {0:?}")]
    PageNotFound(String),

    #[error("record position {position} out of range (export has {len} records)")]
    PositionOutOfRange { position: usize, len: usize },

    /// A reference pointed at a uid that no page root carries.
    #[error("uid {0:?} does not resolve to any page")]
    UnknownUid(String),
}
