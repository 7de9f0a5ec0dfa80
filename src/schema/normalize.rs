//! Schema normalizer
//!
//! Flattens nested group descriptors into an ordered sequence of leaf
//! fields. Groups are layout-only: their non-text children surface as
//! top-level fields, text-decoration children are dropped, relative order
//! is preserved. Recurses into nested groups.

use std::collections::HashSet;

use tracing::trace;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDescriptor, FieldKind};

/// Flattens a descriptor sequence into its leaf fields.
///
/// An empty input yields an empty sequence; there is no failure mode.
pub fn flatten(descriptors: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    let mut fields = Vec::new();
    collect(descriptors, &mut fields);
    trace!(
        descriptors = descriptors.len(),
        fields = fields.len(),
        "flattened schema"
    );
    fields
}

fn collect<'a>(descriptors: &'a [FieldDescriptor], fields: &mut Vec<&'a FieldDescriptor>) {
    for descriptor in descriptors {
        match &descriptor.kind {
            FieldKind::Group { children } => {
                for child in children {
                    if child.text_only {
                        continue;
                    }
                    collect(std::slice::from_ref(child), fields);
                }
            }
            _ => fields.push(descriptor),
        }
    }
}

/// Checks a descriptor sequence for authoring defects.
///
/// Advisory: the passes run fine without it. Detects unnamed leaf fields,
/// duplicate names across the flattened sequence, and inverted numeric or
/// length bounds.
pub fn check_structure(descriptors: &[FieldDescriptor]) -> SchemaResult<()> {
    let mut seen = HashSet::new();

    for field in flatten(descriptors) {
        if field.name.is_empty() {
            return Err(SchemaError::UnnamedField);
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                name: field.name.clone(),
            });
        }
        if let (Some(min), Some(max)) = (field.min, field.max) {
            if min > max {
                return Err(SchemaError::InvertedBounds {
                    name: field.name.clone(),
                    min,
                    max,
                });
            }
        }
        if let (Some(min), Some(max)) = (field.min_length, field.max_length) {
            if min > max {
                return Err(SchemaError::InvertedLengthBounds {
                    name: field.name.clone(),
                    min,
                    max,
                });
            }
        }
    }

    Ok(())
}
