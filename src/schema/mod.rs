//! Schema subsystem: field descriptors and the normalizer
//!
//! # Design principles
//!
//! - Closed field-kind set; exhaustive matching, no runtime kind probing
//! - Group descriptors are layout-only and transparent to validation
//! - Descriptors are borrowed, never mutated
//! - Authoring defects are advisory (`check_structure`); the passes stay
//!   total and resolve collisions last-write-wins

mod errors;
mod normalize;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use normalize::{check_structure, flatten};
pub use types::{FieldDescriptor, FieldKind};
