//! Validator failures and their decomposition into field errors
//!
//! A validation failure travels inside a serialized record as a JSON object
//! of `field[@location]` to message. Failures reported by the `validator`
//! crate are converted into that shape. At the HTTP boundary the object is
//! flattened back to text and split into [`FieldError`] entries.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use validator::{ValidationError, ValidationErrorsKind};

use crate::body::FieldError;

/// Separator between flattened `"field":"message"` entries
const SEGMENT_DELIMITER: &str = "\",\"";

/// Location reported when the field name carries no `@location` suffix
pub const DEFAULT_LOCATION: &str = "body";

/// `ValidationError` parameter naming where the field was read from
pub const LOCATION_PARAM: &str = "location";

/// Ordered collection of per-field validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(IndexMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`, replacing any earlier message for it
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.0.insert(field.into(), message.into());
        self
    }

    #[must_use]
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ValidationErrors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }

        if self.0.is_empty() {
            Ok(())
        } else {
            f.write_str(".")
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// One entry per failing field, ordered by path
///
/// Nested structs become `parent.child`, list items `items[0].child`. Only
/// the first failure of a field is kept; its message falls back to the
/// validator code.
impl From<&validator::ValidationErrors> for ValidationErrors {
    fn from(errors: &validator::ValidationErrors) -> Self {
        let mut out = Self::new();
        collect(&mut out, "", errors);
        out
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::from(&errors)
    }
}

fn collect(out: &mut ValidationErrors, prefix: &str, errors: &validator::ValidationErrors) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (field, kind) in entries {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                if let Some(failure) = failures.first() {
                    out.add(field_key(path, failure), field_message(failure));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(out, &path, nested),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(out, &format!("{path}[{index}]"), nested);
                }
            }
        }
    }
}

fn field_key(path: String, failure: &ValidationError) -> String {
    match failure.params.get(LOCATION_PARAM).and_then(serde_json::Value::as_str) {
        Some(location) => format!("{path}@{location}"),
        None => path,
    }
}

fn field_message(failure: &ValidationError) -> String {
    failure
        .message
        .as_ref()
        .map_or_else(|| failure.code.to_string(), ToString::to_string)
}

/// Split a flattened validator failure into field errors
///
/// Entries that cannot be split into a key and a message are skipped so
/// that one malformed entry never hides the others.
pub fn parse_field_errors(input: &str) -> Vec<FieldError> {
    input.split(SEGMENT_DELIMITER).filter_map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Option<FieldError> {
    let unquoted = segment.replace('"', "");
    let cleaned = unquoted.trim();
    let parts: Vec<&str> = cleaned.split(':').collect();

    let (key, message) = match parts.as_slice() {
        [key, message] => (*key, *message),
        // The message has colons of its own: cut the key off the full text
        [key, _, _, ..] => {
            let rest = cleaned
                .strip_prefix(*key)
                .and_then(|rest| rest.strip_prefix(':'))
                .unwrap_or(cleaned);
            (*key, rest)
        }
        _ => return None,
    };

    let (field, location) = field_and_location(key);
    let message = message.trim();

    Some(FieldError {
        field,
        message: message.strip_suffix('.').unwrap_or(message).to_owned(),
        location,
    })
}

fn field_and_location(key: &str) -> (String, String) {
    let mut parts = key.trim().split('@');
    let field = parts.next().unwrap_or_default().trim();

    match parts.next() {
        Some(location) => (field.to_owned(), location.trim().to_owned()),
        None => (field.to_owned(), DEFAULT_LOCATION.to_owned()),
    }
}
