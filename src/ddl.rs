//! CREATE DATABASE statement building
//!
//! Synthesizes the DDL for the three supported database-engine variants.
//! The two non-empty suffixes share the engine-assignment template shape;
//! `Lazy` appends a parenthesized expiration parameter.

use serde::{Deserialize, Serialize};

use crate::format::{format_positional, FormatError};

const ENGINE_WORD: &str = "ENGINE";

const CREATE_DATABASE: &str = "CREATE DATABASE {0}";
const ENGINE_ASSIGNMENT: &str = "{0} = {1}";
const ENGINE_ASSIGNMENT_WITH_PARAM: &str = "{0} = {1}({2})";

/// Database engine variant governing the DDL suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    /// Server default engine, no ENGINE clause emitted.
    None,
    Atomic,
    /// Lazy engine; tables expire `time_seconds` after last access.
    Lazy { time_seconds: u64 },
}

impl DatabaseEngine {
    /// Canonical engine name as it appears in the DDL, if any.
    fn name(&self) -> Option<&'static str> {
        match self {
            DatabaseEngine::None => None,
            DatabaseEngine::Atomic => Some("Atomic"),
            DatabaseEngine::Lazy { .. } => Some("Lazy"),
        }
    }
}

/// A database to be created. Transient and caller-owned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDescriptor {
    pub name: String,
    pub engine: DatabaseEngine,
}

impl DatabaseDescriptor {
    pub fn new(name: impl Into<String>, engine: DatabaseEngine) -> Self {
        DatabaseDescriptor {
            name: name.into(),
            engine,
        }
    }
}

/// Build the `CREATE DATABASE` statement for `descriptor`.
///
/// # Example
/// ```
/// use clickmeta::ddl::{build_create_database, DatabaseDescriptor, DatabaseEngine};
///
/// let ddl = build_create_database(&DatabaseDescriptor::new(
///     "db1",
///     DatabaseEngine::Lazy { time_seconds: 30 },
/// ))
/// .unwrap();
/// assert_eq!(ddl, "CREATE DATABASE db1 ENGINE = Lazy(30)");
/// ```
pub fn build_create_database(descriptor: &DatabaseDescriptor) -> Result<String, FormatError> {
    let prefix = format_positional(CREATE_DATABASE, &[&descriptor.name])?;

    let suffix = match descriptor.engine {
        DatabaseEngine::None => String::new(),
        DatabaseEngine::Atomic => engine_suffix(&descriptor.engine, None)?,
        DatabaseEngine::Lazy { time_seconds } => {
            engine_suffix(&descriptor.engine, Some(time_seconds))?
        }
    };

    // An empty suffix must not leave a dangling separator.
    if suffix.is_empty() {
        Ok(prefix)
    } else {
        Ok(format!("{} {}", prefix, suffix))
    }
}

fn engine_suffix(engine: &DatabaseEngine, param: Option<u64>) -> Result<String, FormatError> {
    // name() is Some for every engine that reaches here.
    let name = engine.name().unwrap_or_default();
    match param {
        None => format_positional(ENGINE_ASSIGNMENT, &[ENGINE_WORD, name]),
        Some(value) => {
            format_positional(ENGINE_ASSIGNMENT_WITH_PARAM, &[ENGINE_WORD, name, &value.to_string()])
        }
    }
}
