//! Schema authoring-defect errors
//!
//! These never fire during validation. The passes tolerate defective
//! schemas (name collisions resolve last-write-wins); `check_structure`
//! exists so schema authors can surface the defects explicitly.

use thiserror::Error;

/// Result type for schema structure checks
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Structural defects in a descriptor sequence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Two flattened leaf fields share a name
    #[error("duplicate field name '{name}' in flattened schema")]
    DuplicateField {
        /// The colliding field name
        name: String,
    },

    /// A leaf field has an empty name
    #[error("leaf field without a name")]
    UnnamedField,

    /// min is greater than max
    #[error("field '{name}': min {min} is greater than max {max}")]
    InvertedBounds {
        /// The offending field name
        name: String,
        /// Declared lower bound
        min: f64,
        /// Declared upper bound
        max: f64,
    },

    /// minLength is greater than maxLength
    #[error("field '{name}': minLength {min} is greater than maxLength {max}")]
    InvertedLengthBounds {
        /// The offending field name
        name: String,
        /// Declared minimum length
        min: usize,
        /// Declared maximum length
        max: usize,
    },
}
