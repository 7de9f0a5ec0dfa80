//! Type-conformance pass
//!
//! Checks each present value against its declared kind's shape. Kinds whose
//! inputs constrain the value by construction (multi-valued pickers,
//! single checkboxes, day/year pickers) are exempt at the top level.
//! Choice kinds delegate to their option kind by structural recursion, so
//! a select of numbers gets the numeric rule.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::ValidationMessage;
use crate::schema::{flatten, FieldDescriptor, FieldKind};
use crate::value::{FieldValue, ValueBag};

use super::{truthy_value, FailureList, FieldFailure};

// Conservative local@domain.tld shape
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern compiles")
});

// Optional scheme, lowercase domain, optional port and path
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(http://www\.|https://www\.|http://|https://)?[a-z0-9]+([-.][a-z0-9]+)*\.[a-z]{2,5}(:[0-9]{1,5})?(/.*)?$",
    )
    .expect("url pattern compiles")
});

// Optional country code, grouped digits; a contained match suffices
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+9627|07)?[0-9]{1,2}[-. ]?[0-9]{3,4}[-. ]?[0-9]{3,4}")
        .expect("phone pattern compiles")
});

/// Emits one kind-specific failure per present field whose value does not
/// conform to its declared kind. Success emits nothing.
pub fn type_failures(bag: &ValueBag, descriptors: &[FieldDescriptor]) -> FailureList {
    let mut failures = Vec::new();

    for field in flatten(descriptors) {
        if field.kind.exempt_from_type_check() {
            continue;
        }
        let value = match truthy_value(bag, &field.name) {
            Some(value) => value,
            None => continue,
        };
        if let Some(message) = conformance_failure(&field.kind, value) {
            failures.push(FieldFailure::new(&field.name, message));
        }
    }

    failures
}

/// Conformance rule for one kind, total over the closed kind set.
///
/// Choice kinds recurse on their option kind; recursion depth is bounded
/// by schema authoring.
fn conformance_failure(kind: &FieldKind, value: &FieldValue) -> Option<ValidationMessage> {
    match kind {
        FieldKind::Rate | FieldKind::Number | FieldKind::Range => match value {
            FieldValue::Number(_) => None,
            _ => Some(ValidationMessage::ShouldBeNumber),
        },
        FieldKind::Checkbox | FieldKind::Boolean => match value {
            FieldValue::Boolean(_) => None,
            _ => Some(ValidationMessage::ShouldBeBoolean),
        },
        FieldKind::RichText => match value {
            FieldValue::Structured(_) => None,
            _ => Some(ValidationMessage::ShouldBeStructured),
        },
        FieldKind::Select { option }
        | FieldKind::Radio { option }
        | FieldKind::RadioButtons { option } => conformance_failure(option, value),
        FieldKind::SelectMany | FieldKind::Checkboxes => match value {
            FieldValue::List(_) | FieldValue::Structured(_) => None,
            _ => Some(ValidationMessage::ShouldBeSequence),
        },
        FieldKind::Email => match value {
            FieldValue::Text(text) if EMAIL_PATTERN.is_match(text) => None,
            _ => Some(ValidationMessage::ShouldBeEmail),
        },
        FieldKind::Url => match value {
            FieldValue::Text(text) if URL_PATTERN.is_match(text) => None,
            _ => Some(ValidationMessage::ShouldBeUrl),
        },
        FieldKind::PhoneNo => match value {
            FieldValue::Text(text) if PHONE_PATTERN.is_match(text) => None,
            _ => Some(ValidationMessage::ShouldBePhoneNumber),
        },
        // Everything else is plain text
        _ => match value {
            FieldValue::Text(_) => None,
            _ => Some(ValidationMessage::ShouldBeString),
        },
    }
}
