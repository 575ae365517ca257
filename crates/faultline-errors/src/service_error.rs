use faultline_core::{ErrorKind, ErrorRecord};
use faultline_telemetry::{Attribute, ERROR_MESSAGE_KEY, Level, Logger};
use http::Extensions;

/// Log attribute carrying the error kind
pub const KIND_ATTRIBUTE_KEY: &str = "error.kind";

/// Error under construction, not yet logged
///
/// Attributes only reach the log line; the rendered record never contains
/// them.
#[derive(Debug, Clone)]
pub struct ServiceError {
    record: ErrorRecord,
    severity: Level,
    attributes: Vec<Attribute>,
    logger: Option<Logger>,
}

impl ServiceError {
    pub(crate) const fn new(record: ErrorRecord, severity: Level, logger: Option<Logger>) -> Self {
        Self {
            record,
            severity,
            attributes: Vec::new(),
            logger,
        }
    }

    /// Replace the default numeric code
    #[must_use]
    pub fn with_code(mut self, code: i32) -> Self {
        self.record.set_code(code);
        self
    }

    /// Attach attributes to the log line emitted by [`ServiceError::submit`]
    #[must_use]
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes = attributes.into_iter().collect();
        self
    }

    pub const fn record(&self) -> &ErrorRecord {
        &self.record
    }

    pub const fn kind(&self) -> ErrorKind {
        self.record.kind()
    }

    pub const fn severity(&self) -> Level {
        self.severity
    }

    /// Log the error and return it for propagation
    ///
    /// Meant to be called once per error; a second call logs the same line
    /// again and returns an identical record.
    pub fn submit(&self, ctx: &Extensions) -> ErrorRecord {
        if let Some(logger) = &self.logger {
            let mut fields = Vec::with_capacity(self.attributes.len() + 2);
            fields.push(Attribute::string(KIND_ATTRIBUTE_KEY, self.record.kind().to_string()));

            if let Some(detail) = self.record.detail() {
                fields.push(Attribute::string(ERROR_MESSAGE_KEY, detail.message()));
            }

            fields.extend(self.attributes.iter().cloned());
            logger.log(self.severity, ctx, self.record.message(), &fields);
        }

        self.record.clone()
    }
}
