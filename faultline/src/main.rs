#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command};
use clap::Parser;
use faultline_config::Config;
use faultline_core::{Detail, ErrorKind, HttpError, ValidationErrors};
use faultline_errors::{ErrorFactory, ServiceError};
use faultline_response::{BufferedContext, ResponseOptions, ResponseWriter};
use faultline_telemetry::Logger;
use http::Extensions;

/// Error text taken verbatim from the command line
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct RawError(String);

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize telemetry
    faultline_telemetry::init(&config.logging)?;

    tracing::debug!(
        config_path = %args.config.display(),
        service = %config.service.name,
        "starting faultline"
    );

    match args.command {
        Command::Translate { error } => translate(&config, &error),
        Command::Render { kind, detail, code } => {
            render(&config, kind, detail, code);
            Ok(())
        }
    }
}

fn translate(config: &Config, error: &str) -> anyhow::Result<()> {
    let mut writer = ResponseWriter::new(BufferedContext::default(), &ResponseOptions::from(config));
    writer.forward_error(&RawError(error.to_owned()))?;

    let ctx = writer.into_inner();
    println!("{}", ctx.status());
    println!("{}", String::from_utf8_lossy(ctx.body()));
    Ok(())
}

fn render(config: &Config, kind: ErrorKind, detail: Option<String>, code: Option<i32>) {
    let logger = Logger::from_config(&config.logging, None);
    let factory = ErrorFactory::from_config(&config.service, Some(logger));

    let mut error = build(&factory, kind, detail);
    if let Some(code) = code {
        error = error.with_code(code);
    }

    let record = error.submit(&Extensions::new());
    println!("{} {}", record.status_code(), record.error_type());
    println!("{record}");
}

fn build(factory: &ErrorFactory, kind: ErrorKind, detail: Option<String>) -> ServiceError {
    match kind {
        ErrorKind::Validation => {
            factory.invalid_argument(detail.map_or_else(|| ValidationErrors::new().into(), Detail::text))
        }
        ErrorKind::Internal => {
            factory.internal(&RawError(detail.unwrap_or_else(|| "unexpected failure".to_owned())))
        }
        ErrorKind::NotFound => factory.not_found(),
        ErrorKind::Precondition => {
            factory.failed_precondition(detail.unwrap_or_else(|| "precondition not met".to_owned()))
        }
        ErrorKind::Permission => factory.permission_denied(),
    }
}
