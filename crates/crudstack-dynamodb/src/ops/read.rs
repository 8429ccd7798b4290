//! Read: one query restricted by the compiled key condition.

use http::StatusCode;
use tracing::debug;

use crudstack_core::DatabaseSettings;
use crudstack_model::{AttributeCodec, ExecutionResult};

use crate::classify::classify;
use crate::error::AdapterError;
use crate::expression::{build_filter, build_key_condition, build_projection};
use crate::handler::RequestContext;
use crate::shape::ResponseShaper;
use crate::store::{QueryRequest, TableStore};

/// Query the table by primary key, optionally narrowed by the configured
/// filter and projection, and shape the result set.
///
/// All declared key fields must be present in the request payload. The
/// key-condition placeholders are inserted first and the filter's second;
/// where a field appears in both, the filter's value wins, matching the
/// insert order of the original adapter.
pub(crate) async fn read(
    database: &DatabaseSettings,
    codec: AttributeCodec,
    store: &dyn TableStore,
    ctx: &RequestContext,
    shaper: &ResponseShaper,
) -> Result<ExecutionResult, AdapterError> {
    let (key_attrs, _) = classify(&database.keys, &ctx.attributes);
    let key_condition = build_key_condition(&database.keys, &key_attrs, codec)?;

    let mut request = QueryRequest {
        table_name: database.table_name.clone(),
        key_condition: key_condition.condition,
        names: key_condition.names,
        values: key_condition.values,
        ..QueryRequest::default()
    };

    if let Some(template) = database.filter.as_deref() {
        let filter = build_filter(template, &database.filter_values, codec);
        request.filter = Some(filter.condition);
        request.names.extend(filter.names);
        request.values.extend(filter.values);
    }

    if let Some((projection, names)) = build_projection(&database.projection_cols) {
        request.projection = Some(projection);
        request.names.extend(names);
    }

    debug!(
        table = %database.table_name,
        key_condition = %request.key_condition,
        filtered = request.filter.is_some(),
        projected = request.projection.is_some(),
        "querying items",
    );

    let items = store.query(request).await?;
    let body = shaper.shape(&items)?;

    Ok(ExecutionResult::with_body(StatusCode::OK, body))
}
