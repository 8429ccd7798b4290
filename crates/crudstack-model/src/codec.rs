//! Conversion between plain JSON mappings and typed attribute values.
//!
//! The codec is total in both directions: every JSON value has a wire
//! representation, and every wire value the adapter can produce decodes back
//! to JSON. Which representation scalars get is controlled by [`ValueMode`].

use std::collections::HashMap;

use serde_json::Value;

use crate::attribute_value::AttributeValue;
use crate::request::AttributeMapping;

/// A store item: field name to typed attribute value.
pub type Item = HashMap<String, AttributeValue>;

/// How request scalars are encoded into attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// Every scalar becomes a string attribute (`S`). This matches the
    /// historical wire behavior and is the default.
    #[default]
    Stringly,
    /// Numbers become `N` and booleans become `BOOL`.
    Typed,
}

/// Encoder/decoder between attribute mappings and store items.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeCodec {
    mode: ValueMode,
}

impl AttributeCodec {
    /// Create a codec with the given value mode.
    #[must_use]
    pub fn new(mode: ValueMode) -> Self {
        Self { mode }
    }

    /// Encode a single JSON value.
    #[must_use]
    pub fn encode_value(&self, value: &Value) -> AttributeValue {
        match value {
            Value::Null => AttributeValue::Null(true),
            Value::Bool(b) => match self.mode {
                ValueMode::Stringly => AttributeValue::S(b.to_string()),
                ValueMode::Typed => AttributeValue::Bool(*b),
            },
            Value::Number(n) => match self.mode {
                ValueMode::Stringly => AttributeValue::S(n.to_string()),
                ValueMode::Typed => AttributeValue::N(n.to_string()),
            },
            Value::String(s) => AttributeValue::S(s.clone()),
            Value::Array(items) => {
                AttributeValue::L(items.iter().map(|v| self.encode_value(v)).collect())
            }
            Value::Object(fields) => AttributeValue::M(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), self.encode_value(v)))
                    .collect(),
            ),
        }
    }

    /// Encode an attribute mapping into a store item.
    #[must_use]
    pub fn encode_map(&self, attrs: &AttributeMapping) -> Item {
        attrs
            .iter()
            .map(|(field, value)| (field.clone(), self.encode_value(value)))
            .collect()
    }

    /// Decode a single attribute value back to JSON.
    ///
    /// A number attribute whose text does not parse as a JSON number is
    /// decoded as a string rather than dropped.
    #[must_use]
    pub fn decode_value(value: &AttributeValue) -> Value {
        match value {
            AttributeValue::S(s) => Value::String(s.clone()),
            AttributeValue::N(n) => n
                .parse::<serde_json::Number>()
                .map_or_else(|_| Value::String(n.clone()), Value::Number),
            AttributeValue::Bool(b) => Value::Bool(*b),
            AttributeValue::Null(_) => Value::Null,
            AttributeValue::L(items) => {
                Value::Array(items.iter().map(Self::decode_value).collect())
            }
            AttributeValue::M(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::decode_value(v)))
                    .collect(),
            ),
        }
    }

    /// Decode a store item into a JSON object.
    #[must_use]
    pub fn decode_item(item: &Item) -> Value {
        Value::Object(
            item.iter()
                .map(|(field, value)| (field.clone(), Self::decode_value(value)))
                .collect(),
        )
    }

    /// Decode a result set, preserving store-returned order.
    #[must_use]
    pub fn decode_items(items: &[Item]) -> Vec<Value> {
        items.iter().map(Self::decode_item).collect()
    }
}
