use std::path::PathBuf;

use clap::{Parser, Subcommand};
use faultline_core::ErrorKind;

/// Faultline error translator
#[derive(Debug, Parser)]
#[command(name = "faultline", about = "Render service errors and preview their HTTP responses")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "faultline.toml", env = "FAULTLINE_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the HTTP response a client would get for an error string
    Translate {
        /// Error text, usually a rendered service error
        error: String,
    },
    /// Build a service error and print its rendered form
    Render {
        /// Kind name, e.g. `NotFoundError`
        kind: ErrorKind,

        /// Cause attached to the error
        #[arg(long)]
        detail: Option<String>,

        /// Override the default numeric code
        #[arg(long)]
        code: Option<i32>,
    },
}
