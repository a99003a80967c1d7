//! Fixed query-template table and selection logic
//!
//! [`QueryTemplates`] holds the literal SQL templates, one per semantic query
//! purpose, constructed once at startup and read-only afterwards.
//! [`QueryTemplates::resolve`] is the single dispatch point from
//! `(purpose, node type)` to a fully substituted statement; a combination
//! with no template is an explicit miss, never a silent empty statement.

use std::fmt;

use crate::error::MetadataError;
use crate::format::format_positional;
use crate::node::{NavigationNode, NodeType};

/// Denominator for disk-usage ratio expressions, baked into the call site.
const PERCENT_SCALE: u32 = 100;

/// Semantic purpose of a metadata query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryPurpose {
    DiskUsage,
    Children,
}

impl fmt::Display for QueryPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryPurpose::DiskUsage => write!(f, "disk usage"),
            QueryPurpose::Children => write!(f, "child enumeration"),
        }
    }
}

/// Read-only table of ClickHouse metadata query templates.
///
/// Placeholders are positional (`{0}`, `{1}`, ...) and resolved through
/// [`crate::format::format_positional`]. The SQL text is versioned with the
/// crate and never mutated at runtime.
#[derive(Debug, Clone)]
pub struct QueryTemplates {
    /// Server-wide disk usage, one row per disk.
    pub disk_used_ratio: &'static str,
    /// Disk usage aggregated per database.
    pub database_disk_used_ratio: &'static str,
    /// Disk usage per table within a database. Args: `[database]`
    pub table_disk_used_ratio: &'static str,
    /// Disk usage per column within a table. Args: `[database, table, scale]`
    pub column_disk_used_ratio: &'static str,
    /// List databases on the server.
    pub database_items: &'static str,
    /// List tables of a database. Args: `[database]`
    pub table_items: &'static str,
    /// List columns of a table. Args: `[database, table]`
    pub column_items: &'static str,
    /// Server build and uptime summary.
    pub server_info: &'static str,
}

impl QueryTemplates {
    /// The ClickHouse system-table query set.
    pub fn clickhouse() -> Self {
        QueryTemplates {
            disk_used_ratio: "SELECT name, path, \
                 formatReadableSize(total_space - free_space) AS used, \
                 formatReadableSize(total_space) AS total, \
                 round((total_space - free_space) / total_space * 100, 2) AS used_ratio \
                 FROM system.disks \
                 ORDER BY name",
            database_disk_used_ratio: "SELECT database AS name, \
                 formatReadableSize(sum(bytes_on_disk)) AS used, \
                 sum(bytes_on_disk) AS used_bytes \
                 FROM system.parts \
                 WHERE active \
                 GROUP BY database \
                 ORDER BY used_bytes DESC",
            table_disk_used_ratio: "SELECT table AS name, \
                 formatReadableSize(sum(bytes_on_disk)) AS used, \
                 sum(bytes_on_disk) AS used_bytes \
                 FROM system.parts \
                 WHERE active AND database = '{0}' \
                 GROUP BY table \
                 ORDER BY used_bytes DESC",
            column_disk_used_ratio: "SELECT column AS name, \
                 formatReadableSize(sum(column_bytes_on_disk)) AS used, \
                 round(sum(column_bytes_on_disk) / max(total.bytes) * {2}, 2) AS used_ratio \
                 FROM system.parts_columns, \
                 (SELECT sum(bytes_on_disk) AS bytes FROM system.parts \
                 WHERE active AND database = '{0}' AND table = '{1}') AS total \
                 WHERE active AND database = '{0}' AND table = '{1}' \
                 GROUP BY column \
                 ORDER BY used_ratio DESC",
            database_items: "SELECT name FROM system.databases ORDER BY name",
            table_items: "SELECT name FROM system.tables WHERE database = '{0}' ORDER BY name",
            column_items: "SELECT name, type FROM system.columns \
                 WHERE database = '{0}' AND table = '{1}' \
                 ORDER BY position",
            server_info: "SELECT version() AS version, uptime() AS uptime, now() AS now",
        }
    }

    /// Select and substitute the template for `purpose` at `node`.
    ///
    /// This is the whole dispatch table in one place: every supported
    /// `(purpose, node type)` pair maps to a template plus its argument
    /// list, and everything else is `UnsupportedNodeType`, surfaced before
    /// any transport interaction.
    pub fn resolve(
        &self,
        purpose: QueryPurpose,
        node: &NavigationNode,
    ) -> Result<String, MetadataError> {
        let (template, args): (&str, Vec<String>) = match (purpose, node.node_type) {
            (QueryPurpose::DiskUsage, NodeType::Disk) => (self.disk_used_ratio, vec![]),
            (QueryPurpose::DiskUsage, NodeType::Server) => (self.database_disk_used_ratio, vec![]),
            (QueryPurpose::DiskUsage, NodeType::Database) => {
                (self.table_disk_used_ratio, vec![node.key.clone()])
            }
            (QueryPurpose::DiskUsage, NodeType::Table | NodeType::Column) => (
                self.column_disk_used_ratio,
                vec![
                    self.parent_database(node)?.to_string(),
                    node.key.clone(),
                    PERCENT_SCALE.to_string(),
                ],
            ),
            (QueryPurpose::Children, NodeType::Server) => (self.database_items, vec![]),
            (QueryPurpose::Children, NodeType::Database) => {
                (self.table_items, vec![node.key.clone()])
            }
            (QueryPurpose::Children, NodeType::Table) => (
                self.column_items,
                vec![self.parent_database(node)?.to_string(), node.key.clone()],
            ),
            (purpose, node_type) => {
                return Err(MetadataError::UnsupportedNodeType { purpose, node_type })
            }
        };

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let sql = format_positional(template, &arg_refs)?;
        log::debug!("resolved {} query for {} node: {}", purpose, node.node_type, sql);
        Ok(sql)
    }

    /// The server-info query: fixed, argument-free, always resolvable.
    pub fn server_info_query(&self) -> &'static str {
        self.server_info
    }

    fn parent_database<'a>(&self, node: &'a NavigationNode) -> Result<&'a str, MetadataError> {
        node.database
            .as_deref()
            .ok_or_else(|| MetadataError::MissingDatabaseName {
                node_type: node.node_type,
                key: node.key.clone(),
            })
    }
}
