//! Request-shape validation -- pure logic, no database access.
//!
//! Each inbound DTO declares an ordered list of [`FieldRule`]s through
//! [`RequestShape`]. [`evaluate`] checks a decoded JSON object against those
//! rules and reports every failing field, in declaration order, using the
//! wire (JSON) field name.

use serde_json::{Map, Value};

/// Failure tag: field absent, `null`, or an empty string.
pub const TAG_REQUIRED: &str = "required";
/// Failure tag: field present with the wrong JSON type.
pub const TAG_TYPE: &str = "type";
/// Failure tag: field is a string but not a `YYYY-MM-DD` date.
pub const TAG_DATE: &str = "date";

/// Human-readable message for [`TAG_REQUIRED`].
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Canonical message for every other failure tag.
pub const FALLBACK_MESSAGE: &str = "Unknown Error.";

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expected JSON type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
}

/// A single field constraint.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Implemented by request DTOs that are validated before deserialization.
pub trait RequestShape {
    /// Field rules in the order errors should be reported.
    const RULES: &'static [FieldRule];
}

/// A field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: String,
    /// Failure tag, e.g. [`TAG_REQUIRED`].
    pub tag: &'static str,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, tag: &'static str) -> Self {
        Self {
            field: field.into(),
            tag,
        }
    }

    /// Human-readable message for this violation.
    pub fn message(&self) -> &'static str {
        message_for_tag(self.tag)
    }
}

/// Map a failure tag to its client-facing message.
pub fn message_for_tag(tag: &str) -> &'static str {
    match tag {
        TAG_REQUIRED => REQUIRED_MESSAGE,
        _ => FALLBACK_MESSAGE,
    }
}

/// Evaluate all rules against a decoded JSON object.
///
/// Returns an empty vec when the object satisfies every rule. Keys that no
/// rule mentions are ignored.
pub fn evaluate(rules: &[FieldRule], data: &Map<String, Value>) -> Vec<FieldViolation> {
    rules
        .iter()
        .filter_map(|rule| {
            evaluate_field(rule, data.get(rule.name)).map(|tag| FieldViolation::new(rule.name, tag))
        })
        .collect()
}

/// Evaluate the rules of `T` against a decoded JSON object.
pub fn evaluate_shape<T: RequestShape>(data: &Map<String, Value>) -> Vec<FieldViolation> {
    evaluate(T::RULES, data)
}

fn evaluate_field(rule: &FieldRule, value: Option<&Value>) -> Option<&'static str> {
    let value = match value {
        None | Some(Value::Null) => return rule.required.then_some(TAG_REQUIRED),
        Some(v) => v,
    };

    match (rule.kind, value) {
        (FieldKind::Text | FieldKind::Date, Value::String(s)) if s.is_empty() => {
            rule.required.then_some(TAG_REQUIRED)
        }
        (FieldKind::Text, Value::String(_)) => None,
        (FieldKind::Number, Value::Number(_)) => None,
        (FieldKind::Date, Value::String(s)) => (!is_calendar_date(s)).then_some(TAG_DATE),
        _ => Some(TAG_TYPE),
    }
}

/// Strict `YYYY-MM-DD`: zero-padded, no sign, no surrounding whitespace, and
/// a real calendar day.
fn is_calendar_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    shape_ok && chrono::NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok()
}
