use http::StatusCode;
use indexmap::IndexMap;

use crate::param::{FromParam, ParamError};

/// Keys with this prefix become response headers, prefix removed
pub const CUSTOM_HEADER_PREFIX: &str = "handler-attribute-";

/// Key holding a response status override
pub const RESPONSE_CODE_KEY: &str = "handler-response-code";

/// Request-scoped key/value store shared between handlers and the writer
///
/// Middleware can place it in the request extensions; the axum adapter reads
/// it from there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestValues {
    values: IndexMap<String, String>,
}

impl RequestValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Decode the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the stored value is not a valid `T`
    pub fn get<T: FromParam>(&self, key: &str) -> Result<Option<T>, ParamError> {
        self.get_raw(key).map(|raw| T::from_param(raw.as_bytes())).transpose()
    }

    /// Ask for `name: value` to be added to the response headers
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.insert(format!("{CUSTOM_HEADER_PREFIX}{name}"), value);
    }

    /// Header pairs requested through [`RequestValues::set_header`]
    pub fn custom_headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().filter_map(|(key, value)| {
            key.strip_prefix(CUSTOM_HEADER_PREFIX)
                .map(|name| (name, value.as_str()))
        })
    }

    /// Override the status of the response written for this request
    pub fn set_response_code(&mut self, status: StatusCode) {
        self.insert(RESPONSE_CODE_KEY, status.as_str());
    }

    /// Status override, ignored when the stored value is not a valid status
    pub fn response_code(&self) -> Option<StatusCode> {
        let code = self.get::<u16>(RESPONSE_CODE_KEY).ok().flatten()?;
        StatusCode::from_u16(code).ok()
    }
}
