//! Integration tests for the crudstack adapter.
//!
//! Most tests drive the full pipeline, from the method router through the
//! expression compiler down to the store call and response shaping, against
//! the recording store double; those run everywhere. The tests in
//! `test_live` additionally require a local DynamoDB container and are
//! marked `#[ignore]`; run them with:
//!
//! ```text
//! DYNAMO_ENDPOINT=http://localhost:8000 cargo test -p crudstack-integration -- --ignored
//! ```

use std::sync::{Arc, Once};

use crudstack_core::ResourceConfig;
use crudstack_dynamodb::{ResourceHandler, TableStore};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build a handler from a YAML configuration document and a store.
///
/// # Panics
/// Panics if the document fails to parse or validate.
#[must_use]
pub fn handler_with(config: &str, store: Arc<dyn TableStore>) -> ResourceHandler {
    init_tracing();
    let config = ResourceConfig::from_slice(config.as_bytes())
        .unwrap_or_else(|e| panic!("invalid test configuration: {e}"));
    ResourceHandler::new(Arc::new(config), store)
        .unwrap_or_else(|e| panic!("cannot build handler: {e}"))
}

/// Endpoint URL for a local DynamoDB container.
fn endpoint_url() -> String {
    std::env::var("DYNAMO_ENDPOINT").unwrap_or_else(|_| "http://localhost:8000".to_owned())
}

/// Create a configured DynamoDB client pointing at the local container.
#[must_use]
pub fn dynamodb_client() -> aws_sdk_dynamodb::Client {
    init_tracing();

    let creds = aws_sdk_dynamodb::config::Credentials::new(
        "test",
        "test",
        None,
        None,
        "integration-test",
    );

    let config = aws_sdk_dynamodb::config::Builder::new()
        .behavior_version(aws_sdk_dynamodb::config::BehaviorVersion::latest())
        .region(aws_sdk_dynamodb::config::Region::new("us-east-1"))
        .credentials_provider(creds)
        .endpoint_url(endpoint_url())
        .build();

    aws_sdk_dynamodb::Client::from_conf(config)
}

/// Generate a unique table name for a test.
#[must_use]
pub fn test_table_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

mod test_crud;
mod test_live;
