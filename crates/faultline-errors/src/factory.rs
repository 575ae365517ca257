use faultline_config::ServiceConfig;
use faultline_core::{Detail, ErrorKind, ErrorRecord};
use faultline_telemetry::{Level, Logger};

use crate::ServiceError;

/// Options for building an [`ErrorFactory`]
#[derive(Debug, Default, Clone)]
pub struct FactoryOptions {
    /// Name reported as the source of every error
    pub service_name: String,
    /// Withhold service name and causes from rendered errors
    pub hide_details: bool,
    /// Logger used by [`ServiceError::submit`]; nothing is logged without one
    pub logger: Option<Logger>,
}

/// Builds service errors with consistent defaults per kind
#[derive(Debug, Clone)]
pub struct ErrorFactory {
    service_name: String,
    hide_details: bool,
    destination: String,
    logger: Option<Logger>,
}

impl ErrorFactory {
    pub fn new(options: FactoryOptions) -> Self {
        Self {
            service_name: options.service_name,
            hide_details: options.hide_details,
            destination: String::new(),
            logger: options.logger,
        }
    }

    pub fn from_config(config: &ServiceConfig, logger: Option<Logger>) -> Self {
        Self::new(FactoryOptions {
            service_name: config.name.clone(),
            hide_details: config.hide_details,
            logger,
        })
    }

    /// Factory whose errors name `destination` as their routing hint
    #[must_use]
    pub fn for_destination(&self, destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            ..self.clone()
        }
    }

    /// Request arguments broke validation rules
    pub fn invalid_argument(&self, cause: impl Into<Detail>) -> ServiceError {
        self.build(ErrorKind::Validation, "request validation failed", Level::Warn, Some(cause.into()))
    }

    /// A condition required by the operation does not hold
    pub fn failed_precondition(&self, message: impl Into<String>) -> ServiceError {
        self.build(
            ErrorKind::Precondition,
            "failed precondition",
            Level::Warn,
            Some(Detail::text(message)),
        )
    }

    /// The requested data does not exist
    pub fn not_found(&self) -> ServiceError {
        self.build(ErrorKind::NotFound, "not found", Level::Warn, None)
    }

    /// Unexpected failure inside the service
    pub fn internal<E>(&self, cause: &E) -> ServiceError
    where
        E: std::error::Error + ?Sized,
    {
        self.build(
            ErrorKind::Internal,
            "got an internal error",
            Level::Error,
            Some(Detail::from_error(cause)),
        )
    }

    /// Caller tried to reach a resource it has no access to
    pub fn permission_denied(&self) -> ServiceError {
        let message = format!("no permission to access {}", self.service_name);
        self.build(ErrorKind::Permission, message, Level::Info, None)
    }

    fn build(&self, kind: ErrorKind, message: impl Into<String>, severity: Level, detail: Option<Detail>) -> ServiceError {
        let mut record = ErrorRecord::new(kind, message)
            .with_service_name(&self.service_name)
            .with_destination(&self.destination)
            .with_hidden_details(self.hide_details);

        if let Some(detail) = detail {
            record = record.with_detail(detail);
        }

        ServiceError::new(record, severity, self.logger.clone())
    }
}
