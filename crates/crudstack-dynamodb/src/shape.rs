//! Result-set shaping and serialization.
//!
//! A query's raw result set collapses by count: zero items become `null`,
//! exactly one becomes the bare object, two or more become an array in
//! store order. Callers of a single-item resource never have to unwrap an
//! array of one; this collapsing rule is a hard contract.

use serde_json::Value;

use crudstack_model::{AttributeCodec, Item};

use crate::error::AdapterError;

/// Shapes raw result sets into serialized response payloads.
///
/// When the configuration declares a response shape (`DataStruct`), every
/// returned item is structurally checked against it before serialization:
/// each field named by the template must be present in the item. A mismatch
/// is a server-side failure, not a silent pass-through.
#[derive(Debug, Clone, Default)]
pub struct ResponseShaper {
    declared_fields: Option<Vec<String>>,
}

impl ResponseShaper {
    /// Build a shaper from the parsed shape template, if any.
    ///
    /// The template is either an object or an array whose first element is
    /// the object template; its keys are the declared fields.
    #[must_use]
    pub fn new(template: Option<&Value>) -> Self {
        Self {
            declared_fields: template.map(template_fields),
        }
    }

    /// Collapse, validate, and serialize a raw result set.
    pub fn shape(&self, raw_items: &[Item]) -> Result<String, AdapterError> {
        let decoded = AttributeCodec::decode_items(raw_items);

        if let Some(fields) = &self.declared_fields {
            for item in &decoded {
                check_item(item, fields)?;
            }
        }

        let payload = collapse(decoded);
        Ok(serde_json::to_string(&payload).expect("JSON serialization of a Value cannot fail"))
    }
}

/// Collapse a decoded result set by count.
fn collapse(mut items: Vec<Value>) -> Value {
    match items.len() {
        0 => Value::Null,
        1 => items.remove(0),
        _ => Value::Array(items),
    }
}

/// Extract the field names a shape template declares.
fn template_fields(template: &Value) -> Vec<String> {
    let object = match template {
        Value::Array(elements) => elements.first().unwrap_or(&Value::Null),
        other => other,
    };

    match object {
        Value::Object(fields) => fields.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Verify that an item carries every declared field.
fn check_item(item: &Value, fields: &[String]) -> Result<(), AdapterError> {
    let Value::Object(attrs) = item else {
        return Err(AdapterError::ShapeMismatch(
            "result item is not an object".to_owned(),
        ));
    };

    for field in fields {
        if !attrs.contains_key(field) {
            return Err(AdapterError::ShapeMismatch(format!(
                "result item is missing declared field '{field}'",
            )));
        }
    }

    Ok(())
}
