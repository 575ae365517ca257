use serde::{Deserialize, Serialize};

/// Message used whenever an error cannot be attributed to a known kind
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "internal service error";
/// Message for request bodies that are not valid JSON
pub const INVALID_JSON_BODY_MESSAGE: &str = "invalid json body";
/// Message for JSON bodies holding a value of the wrong type
pub const INVALID_JSON_FIELD_MESSAGE: &str = "invalid value for json field";

/// Normalized error body returned to HTTP clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub destination: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ResponseBody {
    /// Generic internal-error body preserving the original message
    pub fn internal(details: impl Into<String>) -> Self {
        Self {
            message: INTERNAL_SERVER_ERROR_MESSAGE.to_owned(),
            details: details.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// One field that failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(code: &i32) -> bool {
    *code == 0
}
