//! Expression compilation.
//!
//! Builds the four expression kinds the store understands (key condition,
//! filter, projection, and update) together with their attribute-name and
//! attribute-value placeholder maps. All builders are pure and
//! deterministic: clause text, name map, and value map are emitted in the
//! same stable order (configuration declaration order for keys, filters,
//! and projections; mapping order for update attributes), so names and
//! values can never become mismatched under reordering.
//!
//! Placeholders use the store's fixed escape prefixes: `#field` aliases an
//! attribute name, `:field` an attribute value. Within one compiled
//! expression a field maps to exactly one placeholder of each kind.

use indexmap::IndexMap;

use crudstack_core::{KeySpec, Operator};
use crudstack_model::{AttributeCodec, AttributeMapping, AttributeValue, Item};

use crate::error::AdapterError;

/// A compiled expression: condition text plus its placeholder maps.
///
/// Request-scoped; produced by the builders below, consumed by one store
/// call, then discarded.
#[derive(Debug, Clone, Default)]
pub struct CompiledExpression {
    /// The expression text, e.g. `"#id = :id AND #email = :email"`.
    pub condition: String,
    /// Placeholder to attribute-name map, e.g. `"#id" -> "id"`.
    pub names: IndexMap<String, String>,
    /// Placeholder to attribute-value map, e.g. `":id" -> {S: "42"}`.
    pub values: IndexMap<String, AttributeValue>,
}

impl CompiledExpression {
    fn insert(&mut self, field: &str, value: AttributeValue) {
        self.names.insert(format!("#{field}"), field.to_owned());
        self.values.insert(format!(":{field}"), value);
    }
}

/// Render one key-condition clause for a field.
fn key_clause(field: &str, operator: Operator) -> String {
    match operator {
        Operator::BeginsWith => format!("begins_with(#{field}, :{field})"),
        op => format!("#{field} {} :{field}", op.symbol()),
    }
}

/// Build the key-condition expression for the declared primary-key fields.
///
/// Clauses are emitted in declaration order and joined with ` AND `. Every
/// declared key field must be present in `key_attrs`; a missing field is a
/// request error, reported before any store call.
pub fn build_key_condition(
    keys: &IndexMap<String, KeySpec>,
    key_attrs: &AttributeMapping,
    codec: AttributeCodec,
) -> Result<CompiledExpression, AdapterError> {
    let mut compiled = CompiledExpression::default();
    let mut clauses = Vec::with_capacity(keys.len());

    for (field, spec) in keys {
        let value = key_attrs
            .get(field)
            .ok_or_else(|| AdapterError::MissingKeyField {
                field: field.clone(),
            })?;
        clauses.push(key_clause(field, spec.operator));
        compiled.insert(field, codec.encode_value(value));
    }

    compiled.condition = clauses.join(" AND ");
    Ok(compiled)
}

/// Build the primary-key item used by update and delete calls.
///
/// Like [`build_key_condition`], every declared key field must be present
/// in the request payload.
pub fn build_primary_key(
    keys: &IndexMap<String, KeySpec>,
    key_attrs: &AttributeMapping,
    codec: AttributeCodec,
) -> Result<Item, AdapterError> {
    let mut key = Item::with_capacity(keys.len());

    for field in keys.keys() {
        let value = key_attrs
            .get(field)
            .ok_or_else(|| AdapterError::MissingKeyField {
                field: field.clone(),
            })?;
        key.insert(field.clone(), codec.encode_value(value));
    }

    Ok(key)
}

/// Build a filter expression from the configured template.
///
/// The template is used verbatim as the condition text; placeholders are
/// derived mechanically from the `filter_values` entries, one `#key`/`:key`
/// pair per entry, in declaration order. The template itself is not
/// syntax-checked; a malformed template surfaces as a store rejection.
#[must_use]
pub fn build_filter(
    template: &str,
    filter_values: &IndexMap<String, serde_json::Value>,
    codec: AttributeCodec,
) -> CompiledExpression {
    let mut compiled = CompiledExpression {
        condition: template.to_owned(),
        ..CompiledExpression::default()
    };

    for (field, value) in filter_values {
        compiled.insert(field, codec.encode_value(value));
    }

    compiled
}

/// Build a projection expression from the configured column list.
///
/// Returns the comma-joined `#col` list and its name map, in declaration
/// order, or `None` for an empty list (full item returned).
#[must_use]
pub fn build_projection(cols: &[String]) -> Option<(String, IndexMap<String, String>)> {
    if cols.is_empty() {
        return None;
    }

    let mut names = IndexMap::with_capacity(cols.len());
    let mut placeholders = Vec::with_capacity(cols.len());

    for col in cols {
        placeholders.push(format!("#{col}"));
        names.insert(format!("#{col}"), col.clone());
    }

    Some((placeholders.join(","), names))
}

/// Build an update expression from the request's non-key attributes.
///
/// Emits one `#field = :field` assignment per attribute, comma-joined and
/// prefixed by the update mode keyword (`SET` unless the request selects
/// another). An empty assignment list is a request error: the store rejects
/// an empty `SET`, so it is reported here instead of being sent.
pub fn build_update(
    non_key_attrs: &AttributeMapping,
    mode: &str,
    codec: AttributeCodec,
) -> Result<CompiledExpression, AdapterError> {
    if non_key_attrs.is_empty() {
        return Err(AdapterError::EmptyUpdate);
    }

    let mut compiled = CompiledExpression::default();
    let mut assignments = Vec::with_capacity(non_key_attrs.len());

    for (field, value) in non_key_attrs {
        assignments.push(format!("#{field} = :{field}"));
        compiled.insert(field, codec.encode_value(value));
    }

    compiled.condition = format!("{mode} {}", assignments.join(","));
    Ok(compiled)
}
