//! Validation message model
//!
//! The engine emits message keys and params, never rendered text. Rendering
//! belongs to an external message-lookup collaborator injected through
//! [`MessageLookup`]; the `Display` impl is the plain-English fallback
//! catalog.

use serde::Serialize;
use std::fmt;

/// One validation failure message: the variant is the catalog key, the
/// variant fields are its params.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "key", rename_all = "camelCase")]
pub enum ValidationMessage {
    /// Required field is absent
    Required {
        /// Display title of the field
        title: String,
    },
    /// Value is not numeric
    ShouldBeNumber,
    /// Value is not a boolean
    ShouldBeBoolean,
    /// Value is not a structured payload
    ShouldBeStructured,
    /// Value is not a sequence container
    ShouldBeSequence,
    /// Value is not a well-formed email address
    ShouldBeEmail,
    /// Value is not a well-formed URL
    ShouldBeUrl,
    /// Value is not a well-formed phone number
    ShouldBePhoneNumber,
    /// Value is not text
    ShouldBeString,
    /// Numeric value below the lower bound
    NotSmallerThan {
        /// The declared lower bound
        limit: f64,
    },
    /// Numeric value above the upper bound
    NotBiggerThan {
        /// The declared upper bound
        limit: f64,
    },
    /// Sequence shorter than the lower length bound
    MinimumCount {
        /// The declared minimum entry count
        count: usize,
    },
    /// Sequence longer than the upper length bound
    MaximumCount {
        /// The declared maximum entry count
        count: usize,
    },
    /// Text shorter than the lower length bound
    NotShorterThan {
        /// The declared minimum length
        length: usize,
    },
    /// Text longer than the upper length bound
    NotLongerThan {
        /// The declared maximum length
        length: usize,
    },
    /// Forbidden substrings were found
    MustNotInclude {
        /// Every forbidden substring that was found
        found: Vec<String>,
    },
    /// Required substrings were missing
    MustInclude {
        /// Every required substring that was missing
        missing: Vec<String>,
    },
}

impl ValidationMessage {
    /// Returns the catalog key for the external message lookup.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationMessage::Required { .. } => "Required",
            ValidationMessage::ShouldBeNumber => "This Should Be a Number",
            ValidationMessage::ShouldBeBoolean => "This Should Be a True OR False",
            ValidationMessage::ShouldBeStructured => "This Should Be a Complex Data",
            ValidationMessage::ShouldBeSequence => "This Should Be an Array",
            ValidationMessage::ShouldBeEmail => "This Should Be an Email",
            ValidationMessage::ShouldBeUrl => "This Should Be a URL",
            ValidationMessage::ShouldBePhoneNumber => "This Should Be a Phone Number",
            ValidationMessage::ShouldBeString => "This Should Be a String",
            ValidationMessage::NotSmallerThan { .. } => "This Should Not Be Smaller Than",
            ValidationMessage::NotBiggerThan { .. } => "This Should Not Be Bigger Than",
            ValidationMessage::MinimumCount { .. } => "You Need to Have Minimum Inputs of",
            ValidationMessage::MaximumCount { .. } => "You Need to Have Maximum Inputs of",
            ValidationMessage::NotShorterThan { .. } => "This Should Not Be Shorter Than",
            ValidationMessage::NotLongerThan { .. } => "This Should Not Be Longer Than",
            ValidationMessage::MustNotInclude { .. } => "This Should Not Include",
            ValidationMessage::MustInclude { .. } => "This Should Include",
        }
    }

    /// Returns the params for the external message lookup.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            ValidationMessage::Required { title } => vec![("name", title.clone())],
            ValidationMessage::NotSmallerThan { limit }
            | ValidationMessage::NotBiggerThan { limit } => {
                vec![("number", format_limit(*limit))]
            }
            ValidationMessage::MinimumCount { count }
            | ValidationMessage::MaximumCount { count } => vec![("number", count.to_string())],
            ValidationMessage::NotShorterThan { length }
            | ValidationMessage::NotLongerThan { length } => vec![("number", length.to_string())],
            ValidationMessage::MustNotInclude { found } => {
                vec![("string", found.join(" & "))]
            }
            ValidationMessage::MustInclude { missing } => {
                vec![("string", missing.join(" & "))]
            }
            _ => Vec::new(),
        }
    }
}

fn format_limit(limit: f64) -> String {
    format!("{}", limit)
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMessage::Required { title } => write!(f, "{} is required", title),
            ValidationMessage::ShouldBeNumber => write!(f, "This should be a number"),
            ValidationMessage::ShouldBeBoolean => write!(f, "This should be a true or false"),
            ValidationMessage::ShouldBeStructured => write!(f, "This should be complex data"),
            ValidationMessage::ShouldBeSequence => write!(f, "This should be an array"),
            ValidationMessage::ShouldBeEmail => write!(f, "This should be an email"),
            ValidationMessage::ShouldBeUrl => write!(f, "This should be a URL"),
            ValidationMessage::ShouldBePhoneNumber => write!(f, "This should be a phone number"),
            ValidationMessage::ShouldBeString => write!(f, "This should be a string"),
            ValidationMessage::NotSmallerThan { limit } => {
                write!(f, "This should not be smaller than {}", format_limit(*limit))
            }
            ValidationMessage::NotBiggerThan { limit } => {
                write!(f, "This should not be bigger than {}", format_limit(*limit))
            }
            ValidationMessage::MinimumCount { count } => {
                write!(f, "You need to have a minimum of {} inputs", count)
            }
            ValidationMessage::MaximumCount { count } => {
                write!(f, "You need to have a maximum of {} inputs", count)
            }
            ValidationMessage::NotShorterThan { length } => {
                write!(f, "This should not be shorter than {}", length)
            }
            ValidationMessage::NotLongerThan { length } => {
                write!(f, "This should not be longer than {}", length)
            }
            ValidationMessage::MustNotInclude { found } => {
                write!(f, "This should not include {}", found.join(" & "))
            }
            ValidationMessage::MustInclude { missing } => {
                write!(f, "This should include {}", missing.join(" & "))
            }
        }
    }
}

/// External message-lookup collaborator: `(key, params) -> localized string`.
///
/// The engine holds no locale state; implementations own it entirely.
pub trait MessageLookup {
    /// Renders one message key with its params.
    fn localize(&self, key: &str, params: &[(&'static str, String)]) -> String;
}

impl<F> MessageLookup for F
where
    F: Fn(&str, &[(&'static str, String)]) -> String,
{
    fn localize(&self, key: &str, params: &[(&'static str, String)]) -> String {
        self(key, params)
    }
}
