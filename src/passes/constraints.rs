//! Edge-case constraint pass
//!
//! Numeric bounds, length bounds, and substring include/exclude policies.
//! Runs for every present field regardless of the type pass's kind
//! exemptions. All applicable checks run in a fixed order, each later
//! check overwriting the pending message, so a field ends up with the
//! message of the latest check that fired:
//!
//! 1. min  2. max  3. minLength  4. maxLength  5. exclude  6. include
//!
//! There is no implicit coercion: numeric bounds apply to number values,
//! length bounds to text and sequences, substring policies to text.

use crate::message::ValidationMessage;
use crate::schema::{flatten, FieldDescriptor};
use crate::value::{FieldValue, ValueBag};

use super::{truthy_value, FailureList, FieldFailure};

/// Emits at most one constraint failure per present field.
pub fn constraint_failures(bag: &ValueBag, descriptors: &[FieldDescriptor]) -> FailureList {
    let mut failures = Vec::new();

    for field in flatten(descriptors) {
        if let Some(value) = truthy_value(bag, &field.name) {
            if let Some(message) = constraint_failure(field, value) {
                failures.push(FieldFailure::new(&field.name, message));
            }
        }
    }

    failures
}

fn constraint_failure(field: &FieldDescriptor, value: &FieldValue) -> Option<ValidationMessage> {
    let mut message = None;

    if let (Some(min), Some(number)) = (field.min, value.as_number()) {
        if number < min {
            message = Some(ValidationMessage::NotSmallerThan { limit: min });
        }
    }

    if let (Some(max), Some(number)) = (field.max, value.as_number()) {
        if number > max {
            message = Some(ValidationMessage::NotBiggerThan { limit: max });
        }
    }

    if let (Some(min_length), Some(length)) = (field.min_length, value.length()) {
        if length < min_length {
            message = Some(if field.kind.is_multi_valued() {
                ValidationMessage::MinimumCount { count: min_length }
            } else {
                ValidationMessage::NotShorterThan { length: min_length }
            });
        }
    }

    if let (Some(max_length), Some(length)) = (field.max_length, value.length()) {
        if length > max_length {
            message = Some(if field.kind.is_multi_valued() {
                ValidationMessage::MaximumCount { count: max_length }
            } else {
                ValidationMessage::NotLongerThan { length: max_length }
            });
        }
    }

    if let (Some(exclude), Some(text)) = (field.exclude.as_ref(), value.as_text()) {
        let haystack = text.to_lowercase();
        let found: Vec<String> = exclude
            .iter()
            .filter(|needle| haystack.contains(&needle.to_lowercase()))
            .cloned()
            .collect();
        if !found.is_empty() {
            message = Some(ValidationMessage::MustNotInclude { found });
        }
    }

    if let (Some(include), Some(text)) = (field.include.as_ref(), value.as_text()) {
        let haystack = text.to_lowercase();
        let missing: Vec<String> = include
            .iter()
            .filter(|needle| !haystack.contains(&needle.to_lowercase()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            message = Some(ValidationMessage::MustInclude { missing });
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;

    fn bag(entries: &[(&str, FieldValue)]) -> ValueBag {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    fn single_failure(
        descriptor: FieldDescriptor,
        value: FieldValue,
    ) -> Option<ValidationMessage> {
        let name = descriptor.name.clone();
        let failures = constraint_failures(&bag(&[(&name, value)]), &[descriptor]);
        failures.into_iter().next().map(|failure| failure.message)
    }

    #[test]
    fn test_min_bound() {
        let field = FieldDescriptor::new("age", FieldKind::Number).with_min(18.0);
        assert_eq!(
            single_failure(field.clone(), FieldValue::Number(10.0)),
            Some(ValidationMessage::NotSmallerThan { limit: 18.0 })
        );
        assert_eq!(single_failure(field, FieldValue::Number(18.0)), None);
    }

    #[test]
    fn test_max_bound() {
        let field = FieldDescriptor::new("age", FieldKind::Number).with_max(99.0);
        assert_eq!(
            single_failure(field.clone(), FieldValue::Number(120.0)),
            Some(ValidationMessage::NotBiggerThan { limit: 99.0 })
        );
        assert_eq!(single_failure(field, FieldValue::Number(99.0)), None);
    }

    #[test]
    fn test_numeric_bounds_ignore_non_numbers() {
        let field = FieldDescriptor::new("age", FieldKind::Number).with_min(18.0);
        assert_eq!(single_failure(field, FieldValue::Text("ten".into())), None);
    }

    #[test]
    fn test_text_length_bounds() {
        let field = FieldDescriptor::new("bio", FieldKind::Text)
            .with_min_length(3)
            .with_max_length(5);

        assert_eq!(
            single_failure(field.clone(), FieldValue::Text("ab".into())),
            Some(ValidationMessage::NotShorterThan { length: 3 })
        );
        assert_eq!(
            single_failure(field.clone(), FieldValue::Text("abcdef".into())),
            Some(ValidationMessage::NotLongerThan { length: 5 })
        );
        assert_eq!(single_failure(field, FieldValue::Text("abcd".into())), None);
    }

    #[test]
    fn test_sequence_length_bounds_use_count_messages() {
        let field = FieldDescriptor::new("tags", FieldKind::Checkboxes)
            .with_min_length(2)
            .with_max_length(3);

        assert_eq!(
            single_failure(field.clone(), FieldValue::List(vec!["a".into()])),
            Some(ValidationMessage::MinimumCount { count: 2 })
        );
        assert_eq!(
            single_failure(
                field,
                FieldValue::List(vec!["a".into(), "b".into(), "c".into(), "d".into()])
            ),
            Some(ValidationMessage::MaximumCount { count: 3 })
        );
    }

    #[test]
    fn test_exclude_collects_all_matches_case_insensitively() {
        let field = FieldDescriptor::new("bio", FieldKind::Text)
            .with_exclude(vec!["Spam".into(), "ads".into(), "junk".into()]);

        assert_eq!(
            single_failure(field, FieldValue::Text("free ADS and spam inside".into())),
            Some(ValidationMessage::MustNotInclude {
                found: vec!["Spam".into(), "ads".into()]
            })
        );
    }

    #[test]
    fn test_include_collects_all_missing_case_insensitively() {
        let field = FieldDescriptor::new("bio", FieldKind::Text)
            .with_include(vec!["rust".into(), "forms".into()]);

        assert_eq!(
            single_failure(field.clone(), FieldValue::Text("I write Rust".into())),
            Some(ValidationMessage::MustInclude {
                missing: vec!["forms".into()]
            })
        );
        assert_eq!(
            single_failure(field, FieldValue::Text("RUST forms engine".into())),
            None
        );
    }

    #[test]
    fn test_later_checks_overwrite_earlier_ones() {
        // minLength fires, then exclude fires; exclude is later in the order
        let field = FieldDescriptor::new("bio", FieldKind::Text)
            .with_min_length(20)
            .with_exclude(vec!["spam".into()]);

        assert_eq!(
            single_failure(field, FieldValue::Text("spam".into())),
            Some(ValidationMessage::MustNotInclude {
                found: vec!["spam".into()]
            })
        );
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        let descriptors = vec![FieldDescriptor::new("age", FieldKind::Number).with_min(18.0)];
        assert!(constraint_failures(&ValueBag::new(), &descriptors).is_empty());

        // Zero is falsy, so the bound never fires on it
        let zero = bag(&[("age", FieldValue::Number(0.0))]);
        assert!(constraint_failures(&zero, &descriptors).is_empty());
    }

    #[test]
    fn test_empty_sequence_is_evaluated() {
        // Truthy container: length checks apply even at length zero
        let descriptors =
            vec![FieldDescriptor::new("tags", FieldKind::Checkboxes).with_min_length(2)];
        let empty = bag(&[("tags", FieldValue::List(vec![]))]);

        let failures = constraint_failures(&empty, &descriptors);
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].message,
            ValidationMessage::MinimumCount { count: 2 }
        );
    }

    #[test]
    fn test_unconstrained_field_emits_nothing() {
        let field = FieldDescriptor::new("bio", FieldKind::Text);
        assert_eq!(single_failure(field, FieldValue::Text("anything".into())), None);
    }
}
