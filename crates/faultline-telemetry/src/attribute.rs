use serde::Serialize;
use serde_json::Value;

/// Key used for the message of a nested error
pub const ERROR_MESSAGE_KEY: &str = "error.message";

/// Structured key/value pair attached to a log message
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    key: String,
    value: Value,
}

impl Attribute {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Value::String(value.into()),
        }
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value: Value::from(value),
        }
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self {
            key: key.into(),
            value: Value::Bool(value),
        }
    }

    /// Any serializable value; values that fail to serialize become `null`
    pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        Self {
            key: key.into(),
            value: serde_json::to_value(value).unwrap_or(Value::Null),
        }
    }

    /// Message of a nested error under the `error.message` key
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::string(ERROR_MESSAGE_KEY, err.to_string())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub const fn value(&self) -> &Value {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(Attribute::string("user", "42").value(), &json!("42"));
        assert_eq!(Attribute::int("attempt", 3).value(), &json!(3));
        assert_eq!(Attribute::bool("retry", false).value(), &json!(false));
        assert_eq!(Attribute::any("ids", &[1, 2]).value(), &json!([1, 2]));
    }

    #[test]
    fn error_attribute_uses_display() {
        let err = std::io::Error::other("broken pipe");
        let attr = Attribute::error(&err);
        assert_eq!(attr.key(), "error.message");
        assert_eq!(attr.value(), &json!("broken pipe"));
    }
}
