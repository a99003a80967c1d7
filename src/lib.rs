//! ClickMeta - Metadata navigation and DDL synthesis for ClickHouse
//!
//! This crate turns a position in the server/database/table/column hierarchy
//! into the right metadata SQL statement and dispatches it:
//! - Navigation node descriptors and a fixed table of query templates
//! - Positional `{0}`, `{1}`, ... template substitution
//! - Disk-usage and child-enumeration query selection
//! - `CREATE DATABASE` DDL building (Atomic / Lazy engines)
//! - An async transport seam over the ClickHouse HTTP interface

pub mod ddl;
pub mod error;
pub mod format;
pub mod node;
pub mod service;
pub mod templates;
pub mod transport;

pub use ddl::{build_create_database, DatabaseDescriptor, DatabaseEngine};
pub use error::MetadataError;
pub use format::{format_positional, FormatError};
pub use node::{NavigationNode, NodeType};
pub use service::MetadataService;
pub use templates::{QueryPurpose, QueryTemplates};
pub use transport::{HttpTransport, QueryTransport, ResponsePayload, ServerTarget, TransportError};
