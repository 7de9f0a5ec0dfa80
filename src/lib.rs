//! formcheck - a strict, deterministic form-validation rule engine
//!
//! Given a schema of typed field descriptors and a bag of submitted
//! values, derives default initial values and an ordered list of
//! validation failures (required presence, type conformance, edge-case
//! constraints). Pure and synchronous; failures are data, never faults.

pub mod message;
pub mod passes;
pub mod schema;
pub mod value;

pub use message::{MessageLookup, ValidationMessage};
pub use passes::{
    collapse, collapse_localized, constraint_failures, initial_values, required_failures,
    type_failures, validate, FailureList, FieldFailure,
};
pub use schema::{check_structure, flatten, FieldDescriptor, FieldKind, SchemaError};
pub use value::{bag_from_json, FieldValue, ValueBag};
