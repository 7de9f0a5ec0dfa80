//! Pass aggregator
//!
//! Composes the three passes in their fixed order and provides the
//! documented last-write-wins reduce. The pass order is a contract:
//! required < type < edge-case, so a field failing both required and
//! edge-case checks surfaces only the edge-case message after collapse.

use std::collections::HashMap;

use tracing::debug;

use crate::message::{MessageLookup, ValidationMessage};
use crate::schema::FieldDescriptor;
use crate::value::ValueBag;

use super::{constraint_failures, required_failures, type_failures, FailureList};

/// Runs all three passes and concatenates their failures in pass order.
///
/// Pure and deterministic: identical inputs yield identical lists.
pub fn validate(bag: &ValueBag, descriptors: &[FieldDescriptor]) -> FailureList {
    let mut failures = required_failures(bag, descriptors);
    failures.extend(type_failures(bag, descriptors));
    failures.extend(constraint_failures(bag, descriptors));

    debug!(failures = failures.len(), "validation complete");
    failures
}

/// Reduces a failure list into one message per field.
///
/// Explicit ordered reduce: entries are applied in list order, later
/// entries overwriting earlier ones that share a field name.
pub fn collapse(failures: FailureList) -> HashMap<String, ValidationMessage> {
    let mut merged = HashMap::new();
    for failure in failures {
        merged.insert(failure.field, failure.message);
    }
    merged
}

/// Like [`collapse`], but renders each surviving message through the
/// injected message lookup.
pub fn collapse_localized(
    failures: &FailureList,
    lookup: &dyn MessageLookup,
) -> HashMap<String, String> {
    let mut merged = HashMap::new();
    for failure in failures {
        merged.insert(
            failure.field.clone(),
            lookup.localize(failure.message.key(), &failure.message.params()),
        );
    }
    merged
}
