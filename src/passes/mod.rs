//! Validation passes
//!
//! Three passes over the flattened schema, run in a fixed order:
//! required, then type conformance, then edge-case constraints. Each pass
//! is independently callable and flattens the schema itself, so custom
//! compositions see the same field sequence as [`validate`].
//!
//! Each pass emits at most one failure per field; the aggregator
//! concatenates the passes, and [`collapse`] reduces the concatenation
//! last-write-wins. That gives the precedence contract:
//! required < type < edge-case.

mod aggregate;
mod constraints;
mod defaults;
mod required;
mod typecheck;

pub use aggregate::{collapse, collapse_localized, validate};
pub use constraints::constraint_failures;
pub use defaults::initial_values;
pub use required::required_failures;
pub use typecheck::type_failures;

use serde::Serialize;

use crate::message::ValidationMessage;
use crate::value::{FieldValue, ValueBag};

/// One field's validation failure: a message key/params pair under the
/// field's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldFailure {
    /// Name of the failing field
    pub field: String,
    /// The failure message
    pub message: ValidationMessage,
}

impl FieldFailure {
    pub(crate) fn new(field: impl Into<String>, message: ValidationMessage) -> Self {
        Self {
            field: field.into(),
            message,
        }
    }
}

/// Ordered sequence of per-field failures across the passes.
pub type FailureList = Vec<FieldFailure>;

/// Submitted value for a field, if it counts as present for the type and
/// edge-case passes. Empty sequences are truthy containers here; the
/// per-kind length rule belongs to the required pass alone.
pub(crate) fn truthy_value<'a>(bag: &'a ValueBag, name: &str) -> Option<&'a FieldValue> {
    bag.get(name).filter(|value| value.is_truthy())
}
