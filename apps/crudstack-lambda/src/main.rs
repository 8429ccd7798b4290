//! crudstack Lambda entry point.
//!
//! Hosts one declaratively-configured CRUD resource behind API Gateway.
//! The configuration document is loaded once at cold start; every
//! invocation is translated into a [`RequestEvent`], handed to the
//! [`ResourceHandler`], and the resulting [`ExecutionResult`] is mapped
//! back onto an HTTP response.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CRUDSTACK_CONFIG` | `config.yaml` | Path to the resource configuration document |
//! | `DYNAMO_ENDPOINT` | *(unset)* | Override endpoint for a local DynamoDB container |
//! | `AWS_REGION` | *(from runtime)* | Region for the DynamoDB client |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::sync::Arc;

use anyhow::{Context, Result};
use lambda_http::{Body, Error, Request, RequestExt, Response, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crudstack_core::ResourceConfig;
use crudstack_dynamodb::{DynamoStore, ResourceHandler};
use crudstack_model::{ExecutionResult, RequestEvent};

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        // CloudWatch adds its own timestamps.
        .without_time()
        .init();

    Ok(())
}

/// Read the configuration document path from the environment.
fn config_path() -> String {
    std::env::var("CRUDSTACK_CONFIG").unwrap_or_else(|_| "config.yaml".to_owned())
}

/// Read the log level from the environment.
fn log_level() -> String {
    std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned())
}

/// Translate an inbound Lambda HTTP request into a core request event.
fn to_request_event(req: &Request) -> RequestEvent {
    let query_parameters = req
        .query_string_parameters()
        .iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

    let body = match req.body() {
        Body::Text(text) => text.clone(),
        Body::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Body::Empty => String::new(),
    };

    RequestEvent {
        http_method: req.method().as_str().to_owned(),
        body,
        query_parameters,
    }
}

/// Translate an execution result into a Lambda HTTP response.
fn to_response(result: ExecutionResult) -> Response<Body> {
    Response::builder()
        .status(result.status_code.as_u16())
        .header("content-type", "application/json")
        .body(result.body.map_or(Body::Empty, Body::Text))
        .expect("static response parts are valid")
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(&log_level())?;

    let path = config_path();
    let config = ResourceConfig::from_file(&path)
        .map_err(|e| Error::from(format!("cannot serve with invalid configuration: {e}")))?;

    let store = Arc::new(DynamoStore::connect().await);
    let handler = Arc::new(ResourceHandler::new(Arc::new(config), store)?);

    info!(config = %path, "crudstack resource handler ready");

    run(service_fn(move |req: Request| {
        let handler = Arc::clone(&handler);
        async move {
            let event = to_request_event(&req);
            let result = handler.handle(&event).await;
            Ok::<_, Error>(to_response(result))
        }
    }))
    .await
}
