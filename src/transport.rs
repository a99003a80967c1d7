//! Query-execution transport
//!
//! The [`QueryTransport`] trait is the seam between statement synthesis and
//! the wire: one `send` per statement, single round-trip, no retry or
//! pooling here. [`HttpTransport`] implements it over the ClickHouse HTTP
//! interface by POSTing the SQL text as the request body.

use std::env;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    Server { status: u16, body: String },
}

/// Connection coordinates of a ClickHouse server's HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTarget {
    /// Base URL, e.g. `http://localhost:8123`
    pub url: String,
    pub username: String,
    pub password: String,
}

impl ServerTarget {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        ServerTarget {
            url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read the target from `CLICKHOUSE_URL`, `CLICKHOUSE_USER` and
    /// `CLICKHOUSE_PASSWORD`. Returns `None` if any is unset.
    pub fn from_env() -> Option<Self> {
        let url = env::var("CLICKHOUSE_URL").ok()?;
        let username = env::var("CLICKHOUSE_USER").ok()?;
        let password = env::var("CLICKHOUSE_PASSWORD").ok()?;
        Some(ServerTarget::new(url, username, password))
    }

    fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

/// Opaque result of a transport round-trip.
///
/// The metadata layer never inspects the contents, only relays them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePayload {
    pub status: u16,
    pub body: String,
}

impl ResponsePayload {
    /// Parse the body as JSON, for callers that asked for `FORMAT JSON`.
    pub fn as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// One statement in, one response out. Error semantics, timeouts and
/// backpressure are owned by the implementation.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn send(&self, target: &ServerTarget, sql: &str)
        -> Result<ResponsePayload, TransportError>;
}

/// Transport over the ClickHouse HTTP interface.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn send(
        &self,
        target: &ServerTarget,
        sql: &str,
    ) -> Result<ResponsePayload, TransportError> {
        log::debug!("POST {} ({} bytes of SQL)", target.base_url(), sql.len());

        let response = self
            .client
            .post(target.base_url())
            .query(&[("user", &target.username), ("password", &target.password)])
            .body(sql.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Server {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ResponsePayload {
            status: status.as_u16(),
            body,
        })
    }
}
