//! Default value deriver

use std::collections::HashMap;

use crate::schema::{flatten, FieldDescriptor};
use crate::value::FieldValue;

/// Derives the initial value set for a descriptor sequence.
///
/// Each flattened field maps to its declared default when that default is
/// truthy, else to the kind-based default. Exactly one entry per flattened
/// field name; collisions (an authoring defect) resolve last-write-wins.
pub fn initial_values(descriptors: &[FieldDescriptor]) -> HashMap<String, FieldValue> {
    let mut values = HashMap::new();

    for field in flatten(descriptors) {
        let value = field
            .default_value
            .as_ref()
            .filter(|declared| declared.is_truthy())
            .cloned()
            .unwrap_or_else(|| field.kind.initial_value());
        values.insert(field.name.clone(), value);
    }

    values
}
