//! Crate-level error taxonomy
//!
//! Local validation errors (`UnsupportedNodeType`, `MissingDatabaseName`,
//! `Format`) are detected and reported before any network interaction.
//! Transport failures are relayed unchanged - no local retry, no fallback
//! statement.

use thiserror::Error;

use crate::format::FormatError;
use crate::node::NodeType;
use crate::templates::QueryPurpose;
use crate::transport::TransportError;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("no {purpose} query is defined for {node_type} nodes")]
    UnsupportedNodeType {
        purpose: QueryPurpose,
        node_type: NodeType,
    },

    #[error("{node_type} node '{key}' has no parent database name")]
    MissingDatabaseName { node_type: NodeType, key: String },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
