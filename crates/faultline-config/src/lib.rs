#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod logging;
pub mod response;
pub mod service;

use serde::Deserialize;

pub use logging::{LogFormat, LoggingConfig};
pub use response::ResponseConfig;
pub use service::ServiceConfig;

/// Top-level configuration
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Identity and disclosure policy of the owning service
    pub service: ServiceConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP response defaults
    #[serde(default)]
    pub response: ResponseConfig,
}
