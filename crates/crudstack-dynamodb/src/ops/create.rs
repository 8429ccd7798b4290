//! Create: one unconditional put.

use http::StatusCode;
use tracing::debug;

use crudstack_core::DatabaseSettings;
use crudstack_model::{AttributeCodec, ExecutionResult};

use crate::error::AdapterError;
use crate::handler::RequestContext;
use crate::store::{PutItemRequest, TableStore};

/// Serialize the entire request mapping and put it as one item.
///
/// The put is unconditional: an existing item with the same key is
/// overwritten, not detected. Deduplication, if wanted, belongs to the
/// caller.
pub(crate) async fn create(
    database: &DatabaseSettings,
    codec: AttributeCodec,
    store: &dyn TableStore,
    ctx: &RequestContext,
) -> Result<ExecutionResult, AdapterError> {
    let item = codec.encode_map(&ctx.attributes);

    debug!(
        table = %database.table_name,
        attributes = item.len(),
        "putting item",
    );

    store
        .put_item(PutItemRequest {
            table_name: database.table_name.clone(),
            item,
        })
        .await?;

    Ok(ExecutionResult::ok(StatusCode::CREATED))
}
