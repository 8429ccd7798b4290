//! Partition of request attributes into key and non-key mappings.

use indexmap::IndexMap;

use crudstack_core::KeySpec;
use crudstack_model::AttributeMapping;

/// Split an attribute mapping into the fields that compose the primary key
/// and everything else.
///
/// Pure partition: the outputs are disjoint and their union equals the
/// input. A field declared as a key but absent from `attrs` is simply
/// omitted from both outputs; whether that absence is fatal is decided by
/// the expression compiler for the operation at hand.
#[must_use]
pub fn classify(
    keys: &IndexMap<String, KeySpec>,
    attrs: &AttributeMapping,
) -> (AttributeMapping, AttributeMapping) {
    let mut key_attrs = AttributeMapping::new();
    let mut non_key_attrs = AttributeMapping::new();

    for (field, value) in attrs {
        if keys.contains_key(field) {
            key_attrs.insert(field.clone(), value.clone());
        } else {
            non_key_attrs.insert(field.clone(), value.clone());
        }
    }

    (key_attrs, non_key_attrs)
}
