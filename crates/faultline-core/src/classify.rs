use http::StatusCode;
use serde_json::Value;

use crate::{
    body::ResponseBody,
    codec::DecodedError,
    kind::{ErrorKind, KindTag},
    validation::parse_field_errors,
};

impl DecodedError {
    /// Whether the record was produced by a service using this pipeline
    pub const fn is_known_error(&self) -> bool {
        self.kind.is_known()
    }

    /// HTTP status derived from the kind alone
    pub const fn response_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    /// Build the client-facing body
    ///
    /// Validation records also get their detail broken down into field
    /// errors.
    pub fn to_response_body(&self) -> ResponseBody {
        let mut body = ResponseBody {
            code: self.code,
            source: self.service_name.clone(),
            message: self.message.clone(),
            destination: self.destination.clone(),
            ..ResponseBody::default()
        };

        if let (KindTag::Known(ErrorKind::Validation), Some(details)) = (&self.kind, &self.details) {
            body.fields = parse_field_errors(&flatten(details));
        }

        body
    }
}

/// Encode a detail and drop its enclosing braces or quotes
fn flatten(details: &Value) -> String {
    let encoded = details.to_string();
    let mut chars = encoded.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_owned()
}
