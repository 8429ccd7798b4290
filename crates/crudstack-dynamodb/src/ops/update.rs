//! Update: one update-item call keyed by the compiled primary key.

use http::StatusCode;
use tracing::debug;

use crudstack_core::DatabaseSettings;
use crudstack_model::{AttributeCodec, ExecutionResult};

use crate::classify::classify;
use crate::error::AdapterError;
use crate::expression::{build_primary_key, build_update};
use crate::handler::RequestContext;
use crate::store::{TableStore, UpdateItemRequest};

/// Apply the request's non-key attributes to the item addressed by the
/// primary key.
///
/// The primary key must be derivable from the payload and at least one
/// non-key attribute must be present; an update that would compile to an
/// empty assignment list is rejected without touching the store.
pub(crate) async fn update(
    database: &DatabaseSettings,
    codec: AttributeCodec,
    store: &dyn TableStore,
    ctx: &RequestContext,
) -> Result<ExecutionResult, AdapterError> {
    let (key_attrs, non_key_attrs) = classify(&database.keys, &ctx.attributes);
    let key = build_primary_key(&database.keys, &key_attrs, codec)?;
    let update = build_update(&non_key_attrs, &ctx.update_mode, codec)?;

    debug!(
        table = %database.table_name,
        update_expression = %update.condition,
        "updating item",
    );

    store
        .update_item(UpdateItemRequest {
            table_name: database.table_name.clone(),
            key,
            update_expression: update.condition,
            names: update.names,
            values: update.values,
        })
        .await?;

    Ok(ExecutionResult::ok(StatusCode::OK))
}
