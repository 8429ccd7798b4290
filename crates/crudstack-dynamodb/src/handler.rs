//! Resource handler: the adapter's per-request entry point.

use std::sync::Arc;

use tracing::{info, warn};

use crudstack_core::{ConfigError, Method, ResourceConfig};
use crudstack_model::{
    AttributeCodec, AttributeMapping, ExecutionResult, RequestEvent, ValueMode,
};

use crate::error::AdapterError;
use crate::ops;
use crate::router::MethodRouter;
use crate::shape::ResponseShaper;
use crate::store::TableStore;

/// Request-scoped context handed to the operation handlers.
///
/// Everything derived from one inbound event lives here; the shared
/// configuration is never written after startup.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved CRUD operation.
    pub method: Method,
    /// The parsed request body.
    pub attributes: AttributeMapping,
    /// The update mode keyword selected by the request.
    pub update_mode: String,
}

/// Drives one table-backed resource: validates the method, compiles the
/// store request, issues it, and shapes the result.
///
/// Constructed once at process start from a validated configuration and a
/// shared store client; `handle` is then invoked once per inbound event.
pub struct ResourceHandler {
    config: Arc<ResourceConfig>,
    store: Arc<dyn TableStore>,
    codec: AttributeCodec,
    router: MethodRouter,
    shaper: ResponseShaper,
}

impl std::fmt::Debug for ResourceHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandler")
            .field("table", &self.config.resources.database.table_name)
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

impl ResourceHandler {
    /// Build a handler from a configuration and a store client.
    ///
    /// The configuration is re-validated here so a handler can never be
    /// constructed around an inconsistent document, whichever path loaded
    /// it.
    pub fn new(
        config: Arc<ResourceConfig>,
        store: Arc<dyn TableStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let shape = config.resources.response.shape()?;
        let mode = if config.resources.database.typed_values {
            ValueMode::Typed
        } else {
            ValueMode::Stringly
        };

        Ok(Self {
            router: MethodRouter::new(&config.resources.request),
            shaper: ResponseShaper::new(shape.as_ref()),
            codec: AttributeCodec::new(mode),
            config,
            store,
        })
    }

    /// Process one inbound event into an execution result.
    ///
    /// Never returns an error: every failure is folded into the result's
    /// status code and message.
    pub async fn handle(&self, event: &RequestEvent) -> ExecutionResult {
        let request_id = uuid::Uuid::new_v4();

        match self.process(event).await {
            Ok(result) => {
                info!(
                    request_id = %request_id,
                    method = %event.http_method,
                    status = %result.status_code,
                    "request completed",
                );
                result
            }
            Err(err) => {
                warn!(
                    request_id = %request_id,
                    method = %event.http_method,
                    error = %err,
                    "request failed",
                );
                ExecutionResult::from(err)
            }
        }
    }

    async fn process(&self, event: &RequestEvent) -> Result<ExecutionResult, AdapterError> {
        let method = self.router.resolve(&event.http_method)?;
        let attributes = event.attribute_mapping()?;

        let ctx = RequestContext {
            method,
            attributes,
            update_mode: event.update_mode().to_owned(),
        };

        let database = &self.config.resources.database;
        let store = self.store.as_ref();

        match ctx.method {
            Method::Create => ops::create(database, self.codec, store, &ctx).await,
            Method::Read => ops::read(database, self.codec, store, &ctx, &self.shaper).await,
            Method::Update => ops::update(database, self.codec, store, &ctx).await,
            Method::Delete => ops::delete(database, self.codec, store, &ctx).await,
        }
    }
}
