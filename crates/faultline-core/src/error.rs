use http::StatusCode;

use crate::ErrorRecord;

/// Errors that know how they should be presented over HTTP
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}

impl HttpError for ErrorRecord {
    fn status_code(&self) -> StatusCode {
        self.kind().status_code()
    }

    fn error_type(&self) -> &str {
        let name: &'static str = self.kind().into();
        name
    }

    fn client_message(&self) -> String {
        self.message().to_owned()
    }
}
