use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::validation::ValidationErrors;

/// Nested cause embedded in a record
///
/// Keeps the JSON value that is rendered under `details` together with the
/// plain message used when the cause is logged.
#[derive(Debug, Clone)]
pub struct Detail {
    value: Value,
    message: String,
}

impl Detail {
    /// Detail made of a plain message
    pub fn text(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            value: Value::String(message.clone()),
            message,
        }
    }

    /// Detail carrying the display form of an error
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self::text(err.to_string())
    }

    /// Detail carrying an arbitrary JSON value
    pub fn json(value: Value) -> Self {
        let message = match &value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self { value, message }
    }

    pub const fn value(&self) -> &Value {
        &self.value
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// Only the rendered value takes part in equality, the log message is derived
impl PartialEq for Detail {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Serialize for Detail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl From<ValidationErrors> for Detail {
    fn from(errors: ValidationErrors) -> Self {
        let value = Value::Object(
            errors
                .iter()
                .map(|(field, message)| (field.to_owned(), Value::String(message.to_owned())))
                .collect(),
        );

        Self {
            value,
            message: errors.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for Detail {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::from(ValidationErrors::from(&errors))
    }
}

impl From<String> for Detail {
    fn from(message: String) -> Self {
        Self::text(message)
    }
}

impl From<&str> for Detail {
    fn from(message: &str) -> Self {
        Self::text(message)
    }
}

impl From<Value> for Detail {
    fn from(value: Value) -> Self {
        Self::json(value)
    }
}
