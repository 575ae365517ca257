use std::error::Error;

use bytes::Bytes;
use faultline_config::Config;
use faultline_core::{ResponseBody, decode};
use http::header::CONTENT_TYPE;
use http::{HeaderName, HeaderValue, StatusCode};
use serde::Serialize;

use crate::payload::HttpPayload;
use crate::{RequestValues, ResponseContext, WriteError, foreign};

/// Settings shared by every writer of a service
#[derive(Debug, Clone)]
pub struct ResponseOptions {
    /// Reported as `source` when an unknown error is forwarded
    pub service_name: String,
    /// Used when the request carries no `Content-Type`
    pub default_content_type: HeaderValue,
}

impl Default for ResponseOptions {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            default_content_type: HeaderValue::from_static("application/json"),
        }
    }
}

impl From<&Config> for ResponseOptions {
    fn from(config: &Config) -> Self {
        let default_content_type = HeaderValue::from_str(&config.response.default_content_type)
            .unwrap_or_else(|_| Self::default().default_content_type);

        Self {
            service_name: config.service.name.clone(),
            default_content_type,
        }
    }
}

/// Where the status of a response comes from
#[derive(Debug, Clone, Copy)]
enum Status {
    /// Derived from the payload; an explicit override wins
    Derived(StatusCode),
    /// Generic failure paths, never overridden
    Fixed(StatusCode),
}

/// Translates errors and payloads into HTTP responses on a runtime context
#[derive(Debug)]
pub struct ResponseWriter<C> {
    ctx: C,
    service_name: String,
    content_type: HeaderValue,
    response_code: Option<StatusCode>,
}

impl<C: ResponseContext> ResponseWriter<C> {
    /// Bind a writer to a request
    ///
    /// The response reuses the request's content type, falling back to the
    /// configured default.
    pub fn new(ctx: C, options: &ResponseOptions) -> Self {
        let content_type = ctx
            .request_header(&CONTENT_TYPE)
            .cloned()
            .unwrap_or_else(|| options.default_content_type.clone());

        Self {
            ctx,
            service_name: options.service_name.clone(),
            content_type,
            response_code: None,
        }
    }

    pub fn set_content_type(&mut self, content_type: HeaderValue) {
        self.content_type = content_type;
    }

    pub const fn content_type(&self) -> &HeaderValue {
        &self.content_type
    }

    /// Force the status of success and known-error responses
    pub const fn set_response_code(&mut self, status: StatusCode) {
        self.response_code = Some(status);
    }

    pub const fn context(&self) -> &C {
        &self.ctx
    }

    pub const fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_inner(self) -> C {
        self.ctx
    }

    /// Write the client-facing response for `err`
    ///
    /// Errors produced by a peer service keep their kind, message and
    /// details. RPC statuses and JSON decoding failures get a generic body;
    /// anything else becomes an internal error carrying the original text.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime refused the response
    pub fn forward_error(&mut self, err: &(dyn Error + 'static)) -> Result<(), WriteError> {
        let message = err.to_string();

        match decode(&message) {
            Ok(decoded) if decoded.is_known_error() => {
                tracing::debug!(kind = %decoded.kind.as_str(), "forwarding service error");
                self.write(
                    Status::Derived(decoded.response_code()),
                    &decoded.to_response_body(),
                )
            }
            outcome => {
                if let Some((status, body)) = foreign::classify(err) {
                    tracing::debug!(status = status.as_u16(), "forwarding foreign error");
                    return self.write(Status::Fixed(status), &body);
                }

                let mut body = ResponseBody::internal(message);
                if outcome.is_ok() {
                    body = body.with_source(self.service_name.as_str());
                }
                self.write(Status::Fixed(StatusCode::INTERNAL_SERVER_ERROR), &body)
            }
        }
    }

    /// Write the response for a failed authentication
    ///
    /// Known service errors are forwarded as usual; everything else is
    /// reported as an internal error.
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime refused the response
    pub fn forward_authentication_error(
        &mut self,
        err: &(dyn Error + 'static),
    ) -> Result<(), WriteError> {
        let message = err.to_string();

        match decode(&message) {
            Ok(decoded) if decoded.is_known_error() => self.write(
                Status::Derived(decoded.response_code()),
                &decoded.to_response_body(),
            ),
            _ => {
                tracing::debug!("authentication failed with an unexpected error");
                self.write(
                    Status::Fixed(StatusCode::INTERNAL_SERVER_ERROR),
                    &ResponseBody::internal(message),
                )
            }
        }
    }

    /// Write `data` as a 200 response, or its alternate representation
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime refused the response
    pub fn forward_success<T: HttpPayload + ?Sized>(&mut self, data: &T) -> Result<(), WriteError> {
        match data.http_response() {
            Some(alternate) => self.write(Status::Derived(StatusCode::OK), &alternate),
            None => self.write(Status::Derived(StatusCode::OK), data),
        }
    }

    fn write<T: Serialize + ?Sized>(&mut self, status: Status, data: &T) -> Result<(), WriteError> {
        let body = match serde_json::to_vec(data) {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize response body");
                return self.write(
                    Status::Fixed(StatusCode::INTERNAL_SERVER_ERROR),
                    &ResponseBody::internal(err.to_string()),
                );
            }
        };

        let status = match status {
            Status::Derived(status) => self.status_override().unwrap_or(status),
            Status::Fixed(status) => status,
        };

        for (name, value) in self.custom_headers() {
            self.ctx.set_header(name, value);
        }
        self.ctx.set_status(status);
        self.ctx.set_header(CONTENT_TYPE, self.content_type.clone());
        self.ctx.write_body(Bytes::from(body))
    }

    fn status_override(&self) -> Option<StatusCode> {
        self.response_code.or_else(|| {
            self.ctx
                .request_values()
                .and_then(RequestValues::response_code)
        })
    }

    fn custom_headers(&self) -> Vec<(HeaderName, HeaderValue)> {
        let Some(values) = self.ctx.request_values() else {
            return Vec::new();
        };

        values
            .custom_headers()
            .filter_map(|(name, value)| {
                match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                    (Ok(name), Ok(value)) => Some((name, value)),
                    _ => {
                        tracing::debug!(header = name, "skipping invalid custom header");
                        None
                    }
                }
            })
            .collect()
    }
}
