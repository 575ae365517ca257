use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Response, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::{RequestValues, ResponseContext, WriteError};

/// Runtime-independent context that buffers the whole response
///
/// Suits callers that hand the response over in one piece, and tests.
#[derive(Debug, Default)]
pub struct BufferedContext {
    request_headers: HeaderMap,
    values: RequestValues,
    cancellation: Option<CancellationToken>,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl BufferedContext {
    pub fn new(request_headers: HeaderMap) -> Self {
        Self {
            request_headers,
            ..Self::default()
        }
    }

    /// Capture the headers and [`RequestValues`] of an incoming request
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self {
            request_headers: request.headers().clone(),
            values: request.extensions().get::<RequestValues>().cloned().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Refuse to write once `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub const fn values(&self) -> &RequestValues {
        &self.values
    }

    pub const fn values_mut(&mut self) -> &mut RequestValues {
        &mut self.values
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_response(self) -> Response<Bytes> {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseContext for BufferedContext {
    fn request_header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.request_headers.get(name)
    }

    fn request_values(&self) -> Option<&RequestValues> {
        Some(&self.values)
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_body(&mut self, body: Bytes) -> Result<(), WriteError> {
        if self
            .cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
        {
            return Err(WriteError::Cancelled);
        }

        self.body = body;
        Ok(())
    }
}
