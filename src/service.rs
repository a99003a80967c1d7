//! Metadata service - the outbound surface of the crate
//!
//! Combines the read-only template table with a transport. Every operation
//! synthesizes its statement synchronously first, so unsupported node types
//! and formatting defects surface before any network interaction, then hands
//! the statement to the transport and relays the response unmodified.

use crate::ddl::{build_create_database, DatabaseDescriptor};
use crate::error::MetadataError;
use crate::node::NavigationNode;
use crate::templates::{QueryPurpose, QueryTemplates};
use crate::transport::{QueryTransport, ResponsePayload, ServerTarget};

/// Stateless metadata query dispatcher.
///
/// Holds no per-call state; concurrent callers need no coordination.
pub struct MetadataService<T: QueryTransport> {
    templates: QueryTemplates,
    transport: T,
}

impl<T: QueryTransport> MetadataService<T> {
    /// Service over the standard ClickHouse template table.
    pub fn new(transport: T) -> Self {
        MetadataService {
            templates: QueryTemplates::clickhouse(),
            transport,
        }
    }

    /// Service over a caller-supplied template table.
    pub fn with_templates(templates: QueryTemplates, transport: T) -> Self {
        MetadataService {
            templates,
            transport,
        }
    }

    /// Disk usage (and usage ratio) at the granularity `node` selects.
    pub async fn fetch_disk_usage_ratio(
        &self,
        target: &ServerTarget,
        node: &NavigationNode,
    ) -> Result<ResponsePayload, MetadataError> {
        let sql = self.templates.resolve(QueryPurpose::DiskUsage, node)?;
        Ok(self.transport.send(target, &sql).await?)
    }

    /// Enumerate the children of `node` in the metadata hierarchy.
    pub async fn fetch_children(
        &self,
        target: &ServerTarget,
        node: &NavigationNode,
    ) -> Result<ResponsePayload, MetadataError> {
        let sql = self.templates.resolve(QueryPurpose::Children, node)?;
        Ok(self.transport.send(target, &sql).await?)
    }

    /// Server version and uptime summary.
    pub async fn fetch_server_info(
        &self,
        target: &ServerTarget,
    ) -> Result<ResponsePayload, MetadataError> {
        let sql = self.templates.server_info_query();
        Ok(self.transport.send(target, sql).await?)
    }

    /// Create a database described by `descriptor`.
    pub async fn create_database(
        &self,
        target: &ServerTarget,
        descriptor: &DatabaseDescriptor,
    ) -> Result<ResponsePayload, MetadataError> {
        let ddl = build_create_database(descriptor)?;
        log::debug!("creating database '{}': {}", descriptor.name, ddl);
        Ok(self.transport.send(target, &ddl).await?)
    }
}
