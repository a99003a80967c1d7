//! Service-level tests with a mocked transport.
//!
//! Verifies the exact SQL handed to the transport for each navigation level
//! and that local validation errors short-circuit before any send.

use async_trait::async_trait;
use mockall::mock;

use clickmeta::ddl::{DatabaseDescriptor, DatabaseEngine};
use clickmeta::error::MetadataError;
use clickmeta::node::{NavigationNode, NodeType};
use clickmeta::service::MetadataService;
use clickmeta::transport::{QueryTransport, ResponsePayload, ServerTarget, TransportError};

mock! {
    pub Transport {}

    #[async_trait]
    impl QueryTransport for Transport {
        async fn send(
            &self,
            target: &ServerTarget,
            sql: &str,
        ) -> Result<ResponsePayload, TransportError>;
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ok_payload() -> ResponsePayload {
    ResponsePayload {
        status: 200,
        body: "ok".to_string(),
    }
}

fn target() -> ServerTarget {
    ServerTarget::new("http://localhost:8123", "default", "")
}

#[tokio::test]
async fn disk_node_queries_system_disks() -> anyhow::Result<()> {
    init_logging();
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|_, sql| sql.starts_with("SELECT name, path,") && sql.contains("system.disks"))
        .times(1)
        .returning(|_, _| Ok(ok_payload()));

    let service = MetadataService::new(transport);
    let node = NavigationNode::new(NodeType::Disk, "default");

    service.fetch_disk_usage_ratio(&target(), &node).await?;
    Ok(())
}

#[tokio::test]
async fn table_node_queries_column_usage_with_percent_scale() {
    init_logging();
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|_, sql| {
            sql.contains("system.parts_columns")
                && sql.contains("database = 'analytics'")
                && sql.contains("table = 'events'")
                && sql.contains("* 100")
        })
        .times(1)
        .returning(|_, _| Ok(ok_payload()));

    let service = MetadataService::new(transport);
    let node = NavigationNode::with_database(NodeType::Table, "events", "analytics");

    service
        .fetch_disk_usage_ratio(&target(), &node)
        .await
        .unwrap();
}

#[tokio::test]
async fn server_node_lists_databases() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|_, sql| sql == "SELECT name FROM system.databases ORDER BY name")
        .times(1)
        .returning(|_, _| Ok(ok_payload()));

    let service = MetadataService::new(transport);
    let node = NavigationNode::new(NodeType::Server, "localhost");

    service.fetch_children(&target(), &node).await.unwrap();
}

#[tokio::test]
async fn children_of_a_column_is_an_error_and_sends_nothing() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(0);

    let service = MetadataService::new(transport);
    let node = NavigationNode::with_database(NodeType::Column, "user_id", "analytics");

    let err = service.fetch_children(&target(), &node).await.unwrap_err();
    assert!(matches!(err, MetadataError::UnsupportedNodeType { .. }));
}

#[tokio::test]
async fn create_database_sends_exact_ddl() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|_, sql| sql == "CREATE DATABASE db1 ENGINE = Atomic")
        .times(1)
        .returning(|_, _| Ok(ok_payload()));

    let service = MetadataService::new(transport);
    let descriptor = DatabaseDescriptor::new("db1", DatabaseEngine::Atomic);

    service
        .create_database(&target(), &descriptor)
        .await
        .unwrap();
}

#[tokio::test]
async fn transport_errors_propagate_without_retry() {
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_, _| {
        Err(TransportError::Server {
            status: 404,
            body: "Code: 81. DB::Exception: Database nope does not exist".to_string(),
        })
    });

    let service = MetadataService::new(transport);

    let err = service.fetch_server_info(&target()).await.unwrap_err();
    match err {
        MetadataError::Transport(TransportError::Server { status, .. }) => {
            assert_eq!(status, 404)
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn response_payload_is_relayed_unmodified() {
    let body = r#"{"data":[{"name":"analytics"}],"rows":1}"#;
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(move |_, _| {
        Ok(ResponsePayload {
            status: 200,
            body: body.to_string(),
        })
    });

    let service = MetadataService::new(transport);
    let node = NavigationNode::new(NodeType::Server, "localhost");

    let payload = service.fetch_children(&target(), &node).await.unwrap();
    assert_eq!(payload.body, body);
    assert_eq!(payload.as_json().unwrap()["rows"], 1);
}
