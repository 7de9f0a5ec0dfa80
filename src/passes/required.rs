//! Required-field pass

use crate::message::ValidationMessage;
use crate::schema::{flatten, FieldDescriptor};
use crate::value::ValueBag;

use super::{FailureList, FieldFailure};

/// Emits one `Required` failure per required field whose value is absent.
///
/// Presence is per-kind: multi-valued kinds need a non-zero sequence
/// length, every other kind needs a truthy value. Non-required fields are
/// skipped entirely; no success marker is emitted.
pub fn required_failures(bag: &ValueBag, descriptors: &[FieldDescriptor]) -> FailureList {
    let mut failures = Vec::new();

    for field in flatten(descriptors) {
        if !field.required || is_present(field, bag) {
            continue;
        }
        failures.push(FieldFailure::new(
            &field.name,
            ValidationMessage::Required {
                title: field.display_title().to_string(),
            },
        ));
    }

    failures
}

fn is_present(field: &FieldDescriptor, bag: &ValueBag) -> bool {
    match bag.get(&field.name) {
        None => false,
        Some(value) if field.kind.is_multi_valued() => {
            value.length().map_or(false, |length| length > 0)
        }
        Some(value) => value.is_truthy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind;
    use crate::value::FieldValue;

    fn bag(entries: &[(&str, FieldValue)]) -> ValueBag {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_absent_required_field_fails_once() {
        let descriptors = vec![FieldDescriptor::required("name", FieldKind::Text)];

        let failures = required_failures(&ValueBag::new(), &descriptors);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].field, "name");
        assert_eq!(
            failures[0].message,
            ValidationMessage::Required {
                title: "name".into()
            }
        );
    }

    #[test]
    fn test_title_used_in_message() {
        let descriptors =
            vec![FieldDescriptor::required("name", FieldKind::Text).with_title("Full Name")];

        let failures = required_failures(&ValueBag::new(), &descriptors);
        assert_eq!(
            failures[0].message,
            ValidationMessage::Required {
                title: "Full Name".into()
            }
        );
    }

    #[test]
    fn test_non_required_fields_emit_nothing() {
        let descriptors = vec![FieldDescriptor::new("name", FieldKind::Text)];
        assert!(required_failures(&ValueBag::new(), &descriptors).is_empty());
    }

    #[test]
    fn test_falsy_scalars_count_as_absent() {
        let descriptors = vec![
            FieldDescriptor::required("age", FieldKind::Number),
            FieldDescriptor::required("agree", FieldKind::Boolean),
            FieldDescriptor::required("name", FieldKind::Text),
        ];
        let bag = bag(&[
            ("age", FieldValue::Number(0.0)),
            ("agree", FieldValue::Boolean(false)),
            ("name", FieldValue::Text(String::new())),
        ]);

        let failures = required_failures(&bag, &descriptors);
        assert_eq!(failures.len(), 3);
    }

    #[test]
    fn test_truthy_scalars_count_as_present() {
        let descriptors = vec![
            FieldDescriptor::required("age", FieldKind::Number),
            FieldDescriptor::required("agree", FieldKind::Boolean),
        ];
        let bag = bag(&[
            ("age", FieldValue::Number(30.0)),
            ("agree", FieldValue::Boolean(true)),
        ]);

        assert!(required_failures(&bag, &descriptors).is_empty());
    }

    #[test]
    fn test_multi_valued_presence_is_sequence_length() {
        let descriptors = vec![FieldDescriptor::required("tags", FieldKind::Checkboxes)];

        // Empty sequence is absent even though the container is truthy
        let empty = bag(&[("tags", FieldValue::List(vec![]))]);
        assert_eq!(required_failures(&empty, &descriptors).len(), 1);

        let one = bag(&[("tags", FieldValue::List(vec!["a".into()]))]);
        assert!(required_failures(&one, &descriptors).is_empty());
    }

    #[test]
    fn test_pass_respects_flattened_order() {
        let descriptors = vec![
            FieldDescriptor::required("z", FieldKind::Text),
            FieldDescriptor::group(vec![FieldDescriptor::required("a", FieldKind::Text)]),
        ];

        let failures = required_failures(&ValueBag::new(), &descriptors);
        let names: Vec<&str> = failures.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
