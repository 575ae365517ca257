//! Translation of service errors and payloads into HTTP responses
//!
//! [`ResponseWriter`] decides status, headers and body; a
//! [`ResponseContext`] implementation delivers them through a concrete
//! runtime.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod adapters;
mod context;
mod foreign;
pub mod param;
mod payload;
mod values;
mod writer;

pub use adapters::{AxumContext, BufferedContext};
pub use context::{ResponseContext, WriteError};
pub use param::{FromParam, ParamError};
pub use payload::HttpPayload;
pub use values::{CUSTOM_HEADER_PREFIX, RESPONSE_CODE_KEY, RequestValues};
pub use writer::{ResponseOptions, ResponseWriter};
