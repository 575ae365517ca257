use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{codec::DecodedError, detail::Detail, kind::ErrorKind};

/// Canonical structured error produced by a service
///
/// Everything except the numeric code is fixed once the record is built.
/// The record is observed from the outside only through [`ErrorRecord::render`]
/// (also its `Display` form), which is what travels as a plain error string.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    code: i32,
    service_name: String,
    message: String,
    destination: String,
    kind: ErrorKind,
    detail: Option<Detail>,
    hide_details: bool,
}

/// Serialized shape of a record
#[derive(Serialize)]
struct Rendered<'a> {
    code: i32,
    #[serde(skip_serializing_if = "is_empty")]
    service_name: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    message: &'a str,
    #[serde(skip_serializing_if = "is_empty")]
    destination: &'a str,
    kind: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a Value>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_empty(value: &&str) -> bool {
    value.is_empty()
}

impl ErrorRecord {
    /// Create a record with the default code of `kind`
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            code: kind.default_code(),
            service_name: String::new(),
            message: message.into(),
            destination: String::new(),
            kind,
            detail: None,
            hide_details: false,
        }
    }

    #[must_use]
    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<Detail>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Withhold service name and detail when rendering
    #[must_use]
    pub fn with_hidden_details(mut self, hide: bool) -> Self {
        self.hide_details = hide;
        self
    }

    /// Override the numeric code
    pub const fn set_code(&mut self, code: i32) {
        self.code = code;
    }

    pub const fn code(&self) -> i32 {
        self.code
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub const fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }

    pub const fn hides_details(&self) -> bool {
        self.hide_details
    }

    /// JSON form carried across service boundaries
    pub fn render(&self) -> String {
        let mut out = Rendered {
            code: self.code,
            service_name: "",
            message: &self.message,
            destination: "",
            kind: self.kind,
            details: None,
        };

        if !self.hide_details {
            out.service_name = self.service_name.as_str();
            out.destination = self.destination.as_str();
            out.details = self.detail.as_ref().map(Detail::value);
        }

        // Plain strings and JSON values always serialize
        serde_json::to_string(&out).unwrap_or_default()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ErrorRecord {}

/// The decoded kind was not one of the recognized tags
#[derive(Debug, thiserror::Error)]
#[error("unrecognized error kind `{0}`")]
pub struct UnknownKind(pub String);

impl TryFrom<DecodedError> for ErrorRecord {
    type Error = UnknownKind;

    fn try_from(decoded: DecodedError) -> Result<Self, Self::Error> {
        let Some(kind) = decoded.kind.known() else {
            return Err(UnknownKind(decoded.kind.as_str().to_owned()));
        };

        Ok(Self {
            code: decoded.code,
            service_name: decoded.service_name,
            message: decoded.message,
            destination: decoded.destination,
            kind,
            detail: decoded.details.map(Detail::json),
            hide_details: false,
        })
    }
}
