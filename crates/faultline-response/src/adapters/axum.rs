use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::request::Parts;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};

use crate::{RequestValues, ResponseContext, ResponseOptions, ResponseWriter, WriteError};

/// Response under construction for an axum handler
///
/// Request headers and [`RequestValues`] found in the request extensions are
/// captured when the writer is extracted.
#[derive(Debug, Default)]
pub struct AxumContext {
    request_headers: HeaderMap,
    values: Option<RequestValues>,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl AxumContext {
    pub fn from_parts(parts: &Parts) -> Self {
        Self {
            request_headers: parts.headers.clone(),
            values: parts.extensions.get::<RequestValues>().cloned(),
            ..Self::default()
        }
    }
}

impl ResponseContext for AxumContext {
    fn request_header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.request_headers.get(name)
    }

    fn request_values(&self) -> Option<&RequestValues> {
        self.values.as_ref()
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_body(&mut self, body: Bytes) -> Result<(), WriteError> {
        self.body = body;
        Ok(())
    }
}

impl IntoResponse for AxumContext {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

impl<S> FromRequestParts<S> for ResponseWriter<AxumContext>
where
    S: Send + Sync,
    ResponseOptions: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let options = ResponseOptions::from_ref(state);
        Ok(Self::new(AxumContext::from_parts(parts), &options))
    }
}

impl IntoResponse for ResponseWriter<AxumContext> {
    fn into_response(self) -> Response {
        self.into_inner().into_response()
    }
}
