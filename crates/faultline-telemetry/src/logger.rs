use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU8, Ordering},
    },
};

use faultline_config::LoggingConfig;
use http::Extensions;
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::{Attribute, TelemetryError};

/// Process exit code used after a fatal message
pub const FATAL_EXIT_CODE: i32 = 1;

/// Pulls request-scoped attributes out of the execution context
pub type ContextFieldExtractor = Arc<dyn Fn(&Extensions) -> Vec<Attribute> + Send + Sync>;

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    const fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            3 => Self::Error,
            _ => Self::Fatal,
        }
    }
}

/// Options for building a [`Logger`]
#[derive(Default)]
pub struct LoggerOptions {
    /// Lowest level emitted; `None` means `info`
    pub level: Option<Level>,
    /// Only emit fatal messages
    pub only_fatal: bool,
    /// Attributes appended to every message
    pub fixed_attributes: Vec<Attribute>,
    /// Hook adding attributes from the execution context
    pub context_extractor: Option<ContextFieldExtractor>,
}

/// Leveled structured logger
///
/// Messages are emitted as `tracing` events with target `faultline`; all
/// attributes are gathered into a single JSON object in the `attributes`
/// field. Clones share the same level.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    level: AtomicU8,
    fixed_attributes: Vec<Attribute>,
    context_extractor: Option<ContextFieldExtractor>,
}

impl Logger {
    pub fn new(options: LoggerOptions) -> Self {
        let level = if options.only_fatal {
            Level::Fatal
        } else {
            options.level.unwrap_or(Level::Info)
        };

        Self {
            inner: Arc::new(Inner {
                level: AtomicU8::new(level as u8),
                fixed_attributes: options.fixed_attributes,
                context_extractor: options.context_extractor,
            }),
        }
    }

    /// Logger honoring the `only_fatal` switch and fixed attributes of `config`
    pub fn from_config(config: &LoggingConfig, context_extractor: Option<ContextFieldExtractor>) -> Self {
        Self::new(LoggerOptions {
            level: None,
            only_fatal: config.only_fatal,
            fixed_attributes: config
                .fixed_attributes
                .iter()
                .map(|(key, value)| Attribute::string(key.clone(), value.clone()))
                .collect(),
            context_extractor,
        })
    }

    pub fn debug(&self, ctx: &Extensions, msg: &str, attrs: &[Attribute]) {
        self.log(Level::Debug, ctx, msg, attrs);
    }

    pub fn info(&self, ctx: &Extensions, msg: &str, attrs: &[Attribute]) {
        self.log(Level::Info, ctx, msg, attrs);
    }

    pub fn warn(&self, ctx: &Extensions, msg: &str, attrs: &[Attribute]) {
        self.log(Level::Warn, ctx, msg, attrs);
    }

    pub fn error(&self, ctx: &Extensions, msg: &str, attrs: &[Attribute]) {
        self.log(Level::Error, ctx, msg, attrs);
    }

    /// Log at fatal level and terminate the process
    pub fn fatal(&self, ctx: &Extensions, msg: &str, attrs: &[Attribute]) -> ! {
        self.log(Level::Fatal, ctx, msg, attrs);
        std::process::exit(FATAL_EXIT_CODE);
    }

    /// Emit `msg` at `level` if the logger's level allows it
    pub fn log(&self, level: Level, ctx: &Extensions, msg: &str, attrs: &[Attribute]) {
        if level < self.level() {
            return;
        }

        let attributes = self.merge_attributes(ctx, attrs);

        match level {
            Level::Debug => tracing::debug!(target: "faultline", %attributes, "{msg}"),
            Level::Info => tracing::info!(target: "faultline", %attributes, "{msg}"),
            Level::Warn => tracing::warn!(target: "faultline", %attributes, "{msg}"),
            Level::Error => tracing::error!(target: "faultline", %attributes, "{msg}"),
            Level::Fatal => tracing::error!(target: "faultline", fatal = true, %attributes, "{msg}"),
        }
    }

    /// Change the lowest emitted level by name
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::UnknownLevel`] if `level` is not one of
    /// `debug`, `info`, `warn`, `error` or `fatal`
    pub fn set_level(&self, level: &str) -> Result<Level, TelemetryError> {
        let parsed: Level = level
            .parse()
            .map_err(|_| TelemetryError::UnknownLevel(level.to_owned()))?;

        self.inner.level.store(parsed as u8, Ordering::Relaxed);
        Ok(parsed)
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.inner.level.load(Ordering::Relaxed))
    }

    pub fn disable_debug_messages(&self) {
        self.inner.level.store(Level::Info as u8, Ordering::Relaxed);
    }

    fn merge_attributes(&self, ctx: &Extensions, attrs: &[Attribute]) -> Attributes {
        let mut map = Map::new();

        let extracted = self
            .inner
            .context_extractor
            .as_ref()
            .map(|extract| (**extract)(ctx))
            .unwrap_or_default();

        for attr in attrs
            .iter()
            .chain(&extracted)
            .chain(&self.inner.fixed_attributes)
        {
            map.insert(attr.key().to_owned(), attr.value().clone());
        }

        Attributes(Value::Object(map))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("fixed_attributes", &self.inner.fixed_attributes)
            .field("context_extractor", &self.inner.context_extractor.is_some())
            .finish()
    }
}

/// Attribute object recorded as a single event field
struct Attributes(Value);

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
