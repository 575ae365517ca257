//! Error records shared between services and their HTTP translation
//!
//! A producing service builds an [`ErrorRecord`] and lets its rendered JSON
//! travel as an ordinary error string. At the HTTP boundary the string is
//! turned back into a [`DecodedError`] with [`decode`], classified, and
//! converted into a [`ResponseBody`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod body;
mod classify;
mod codec;
mod detail;
mod error;
mod kind;
mod record;
pub mod validation;

pub use body::{
    FieldError, INTERNAL_SERVER_ERROR_MESSAGE, INVALID_JSON_BODY_MESSAGE, INVALID_JSON_FIELD_MESSAGE, ResponseBody,
};
pub use codec::{DecodeError, DecodedError, decode};
pub use detail::Detail;
pub use error::HttpError;
pub use kind::{
    CODE_INTERNAL, CODE_INVALID_ARGUMENT, CODE_NO_PERMISSION, CODE_NOT_FOUND, CODE_PRECONDITION_FAILED, ErrorKind,
    KindTag,
};
pub use record::{ErrorRecord, UnknownKind};
pub use validation::{ValidationErrors, parse_field_errors};
