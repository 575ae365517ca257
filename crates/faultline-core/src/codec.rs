use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::KindTag;

/// Record shape as read back from an error string
///
/// Every field is optional on input: foreign JSON decodes successfully with
/// an unknown kind and is told apart by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodedError {
    pub code: i32,
    pub service_name: String,
    pub message: String,
    pub destination: String,
    pub kind: KindTag,
    pub details: Option<Value>,
}

/// The string does not hold a serialized record
///
/// This is the usual outcome for driver errors, panics and other
/// third-party messages, not an exceptional one.
#[derive(Debug, thiserror::Error)]
#[error("not a serialized service error: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Recover a record from the string form of an error
pub fn decode(s: &str) -> Result<DecodedError, DecodeError> {
    Ok(serde_json::from_str(s)?)
}
