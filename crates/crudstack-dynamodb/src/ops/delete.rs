//! Delete: one delete-item call keyed by the compiled primary key.

use http::StatusCode;
use tracing::debug;

use crudstack_core::DatabaseSettings;
use crudstack_model::{AttributeCodec, ExecutionResult};

use crate::classify::classify;
use crate::error::AdapterError;
use crate::expression::build_primary_key;
use crate::handler::RequestContext;
use crate::store::{DeleteItemRequest, TableStore};

/// Remove the item addressed by the primary key.
///
/// Non-key attributes in the payload are ignored; the delete is keyed
/// solely by the compiled primary key and is not conditional.
pub(crate) async fn delete(
    database: &DatabaseSettings,
    codec: AttributeCodec,
    store: &dyn TableStore,
    ctx: &RequestContext,
) -> Result<ExecutionResult, AdapterError> {
    let (key_attrs, _) = classify(&database.keys, &ctx.attributes);
    let key = build_primary_key(&database.keys, &key_attrs, codec)?;

    debug!(table = %database.table_name, "deleting item");

    store
        .delete_item(DeleteItemRequest {
            table_name: database.table_name.clone(),
            key,
        })
        .await?;

    Ok(ExecutionResult::ok(StatusCode::OK))
}
