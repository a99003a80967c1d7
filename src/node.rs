//! Navigation hierarchy descriptors
//!
//! A [`NavigationNode`] identifies where in the server → database → table →
//! column hierarchy a metadata query applies. Nodes are produced by the
//! caller (typically a navigation tree) and never mutated by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a navigation node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// A physical disk attached to the server
    Disk,
    /// The server itself (root of the metadata tree)
    Server,
    Database,
    Table,
    Column,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Disk => "disk",
            NodeType::Server => "server",
            NodeType::Database => "database",
            NodeType::Table => "table",
            NodeType::Column => "column",
        };
        write!(f, "{}", name)
    }
}

/// A position in the metadata hierarchy that a query targets.
///
/// `key` is the identifying name at this level (database name for a
/// `Database` node, table name for a `Table` node, and so on). `database`
/// carries the parent database name and is only meaningful for `Table` and
/// `Column` nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub key: String,
    pub database: Option<String>,
}

impl NavigationNode {
    pub fn new(node_type: NodeType, key: impl Into<String>) -> Self {
        NavigationNode {
            node_type,
            key: key.into(),
            database: None,
        }
    }

    /// Node with an explicit parent database, for `Table` and `Column` levels.
    pub fn with_database(
        node_type: NodeType,
        key: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        NavigationNode {
            node_type,
            key: key.into(),
            database: Some(database.into()),
        }
    }
}
