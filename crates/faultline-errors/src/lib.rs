//! Construction and logging of service errors
//!
//! Services create errors through an [`ErrorFactory`] so that every kind gets
//! the same code, message and log severity. [`ServiceError::submit`] logs the
//! error once and hands back the [`ErrorRecord`] whose string form travels to
//! the HTTP boundary.

#![allow(clippy::must_use_candidate)]

mod factory;
mod service_error;

pub use factory::{ErrorFactory, FactoryOptions};
pub use faultline_core::{Detail, ErrorKind, ErrorRecord, ValidationErrors};
pub use service_error::{KIND_ATTRIBUTE_KEY, ServiceError};
