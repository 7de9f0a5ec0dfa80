//! Field descriptor type definitions
//!
//! Supported field kinds:
//! - numeric: rate, number, range
//! - boolean: checkbox, boolean
//! - choice-of-option: select, radio, radioButtons (carry a nested option kind)
//! - multi-valued: selectMany, checkboxes, list
//! - content: richText, email, url, phoneNo
//! - plain: day, year, text
//! - group: layout-only container of child descriptors

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Supported field kinds as a closed set.
///
/// Choice kinds embed the kind of their options (boxed to allow recursion);
/// defaulting and type conformance delegate to that nested kind. A `group`
/// is transparent to validation: the normalizer replaces it with its
/// children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldKind {
    /// Star-rating input, numeric value
    Rate,
    /// Plain numeric input
    Number,
    /// Numeric slider
    Range,
    /// Single checkbox, boolean value
    Checkbox,
    /// Boolean toggle
    Boolean,
    /// Dropdown; value kind is the option kind
    Select {
        /// Kind of the selectable options
        #[serde(rename = "optionKind")]
        option: Box<FieldKind>,
    },
    /// Radio group; value kind is the option kind
    Radio {
        /// Kind of the selectable options
        #[serde(rename = "optionKind")]
        option: Box<FieldKind>,
    },
    /// Button-styled radio group; value kind is the option kind
    RadioButtons {
        /// Kind of the selectable options
        #[serde(rename = "optionKind")]
        option: Box<FieldKind>,
    },
    /// Multi-select dropdown, sequence value
    SelectMany,
    /// Checkbox group, sequence value
    Checkboxes,
    /// Repeatable list input, sequence value
    List,
    /// Rich-text editor, structured value
    RichText,
    /// Email address
    Email,
    /// Web address
    Url,
    /// Phone number
    PhoneNo,
    /// Day-of-month picker
    Day,
    /// Year picker
    Year,
    /// Free-form text
    Text,
    /// Layout-only group of child descriptors
    Group {
        /// Nested child descriptors
        children: Vec<FieldDescriptor>,
    },
}

impl FieldKind {
    /// Returns the kind name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Rate => "rate",
            FieldKind::Number => "number",
            FieldKind::Range => "range",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Boolean => "boolean",
            FieldKind::Select { .. } => "select",
            FieldKind::Radio { .. } => "radio",
            FieldKind::RadioButtons { .. } => "radioButtons",
            FieldKind::SelectMany => "selectMany",
            FieldKind::Checkboxes => "checkboxes",
            FieldKind::List => "list",
            FieldKind::RichText => "richText",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::PhoneNo => "phoneNo",
            FieldKind::Day => "day",
            FieldKind::Year => "year",
            FieldKind::Text => "text",
            FieldKind::Group { .. } => "group",
        }
    }

    /// Returns true for kinds whose value is a sequence.
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            FieldKind::SelectMany | FieldKind::Checkboxes | FieldKind::List
        )
    }

    /// Returns true for choice-of-option kinds.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            FieldKind::Select { .. } | FieldKind::Radio { .. } | FieldKind::RadioButtons { .. }
        )
    }

    /// Returns true for layout-only group markers.
    pub fn is_group(&self) -> bool {
        matches!(self, FieldKind::Group { .. })
    }

    /// Returns true for kinds the type-conformance pass skips at the top
    /// level. Choice kinds are NOT exempt; they delegate to their option
    /// kind instead.
    pub fn exempt_from_type_check(&self) -> bool {
        self.is_multi_valued()
            || matches!(self, FieldKind::Checkbox | FieldKind::Day | FieldKind::Year)
    }

    /// Returns the kind-based default value.
    ///
    /// Total over all kinds: numeric kinds default to 0, boolean kinds to
    /// false, choice kinds to the default of their option kind,
    /// multi-valued kinds to an empty sequence, everything else to the
    /// empty string.
    pub fn initial_value(&self) -> FieldValue {
        match self {
            FieldKind::Rate | FieldKind::Number | FieldKind::Range => FieldValue::Number(0.0),
            FieldKind::Checkbox | FieldKind::Boolean => FieldValue::Boolean(false),
            FieldKind::Select { option }
            | FieldKind::Radio { option }
            | FieldKind::RadioButtons { option } => option.initial_value(),
            FieldKind::SelectMany | FieldKind::Checkboxes | FieldKind::List => {
                FieldValue::List(Vec::new())
            }
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Schema entry describing one field's kind, constraints, and default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Unique key within the flattened sequence (empty for groups)
    #[serde(default)]
    pub name: String,
    /// Field kind, flattened into the descriptor object
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Display title, used in the required-field message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the field must be present on submission
    #[serde(default)]
    pub required: bool,
    /// Declared default; replaces the kind-based default when truthy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,
    /// Lower numeric bound (value < min fails)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper numeric bound (value > max fails)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Lower length bound for text and sequence values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Upper length bound for text and sequence values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Forbidden substrings, matched case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    /// Required substrings, matched case-insensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    /// Text-decoration marker; such children of a group are dropped
    #[serde(default, skip_serializing_if = "is_false")]
    pub text_only: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl FieldDescriptor {
    /// Create an optional field of the given kind
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            title: None,
            required: false,
            default_value: None,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            exclude: None,
            include: None,
            text_only: false,
        }
    }

    /// Create a required field of the given kind
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            required: true,
            ..Self::new(name, kind)
        }
    }

    /// Create a layout-only group descriptor
    pub fn group(children: Vec<FieldDescriptor>) -> Self {
        Self::new("", FieldKind::Group { children })
    }

    /// Sets the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the declared default value
    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the lower numeric bound
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper numeric bound
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Sets the lower length bound
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the upper length bound
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the forbidden-substring policy
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Sets the required-substring policy
    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.include = Some(include);
        self
    }

    /// Marks the descriptor as text decoration
    pub fn text_only(mut self) -> Self {
        self.text_only = true;
        self
    }

    /// Returns the title, falling back to the field name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
