use bytes::Bytes;
use http::{HeaderName, HeaderValue, StatusCode};

use crate::RequestValues;

/// Minimal view of an HTTP runtime needed to write a response
///
/// Each runtime gets one implementation; the writer depends on nothing else.
pub trait ResponseContext {
    /// Header of the incoming request
    fn request_header(&self, name: &HeaderName) -> Option<&HeaderValue>;

    /// Values attached to the request by earlier handlers, if the runtime
    /// carries any
    fn request_values(&self) -> Option<&RequestValues> {
        None
    }

    fn set_status(&mut self, status: StatusCode);

    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Hand the encoded body to the runtime
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime can no longer accept the response
    fn write_body(&mut self, body: Bytes) -> Result<(), WriteError>;
}

/// Failure to deliver a response through the runtime
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The request was cancelled before the body was written
    #[error("request cancelled before the response was written")]
    Cancelled,
}
