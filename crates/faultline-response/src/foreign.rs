//! Recognition of errors raised by the RPC client and JSON decoders

use std::error::Error;

use axum::extract::rejection::{JsonDataError, JsonRejection, JsonSyntaxError};
use faultline_core::{INVALID_JSON_BODY_MESSAGE, INVALID_JSON_FIELD_MESSAGE, ResponseBody};
use http::StatusCode;
use serde_json::error::Category;

/// Walk the error chain looking for an RPC status or a JSON decoding failure
pub(crate) fn classify(err: &(dyn Error + 'static)) -> Option<(StatusCode, ResponseBody)> {
    std::iter::successors(Some(err), |err| Error::source(*err)).find_map(classify_one)
}

fn classify_one(err: &(dyn Error + 'static)) -> Option<(StatusCode, ResponseBody)> {
    if let Some(status) = err.downcast_ref::<tonic::Status>() {
        return Some((
            StatusCode::INTERNAL_SERVER_ERROR,
            ResponseBody::internal(status.message()),
        ));
    }

    if let Some(err) = err.downcast_ref::<serde_json::Error>() {
        return match err.classify() {
            Category::Syntax | Category::Eof => Some(invalid_body()),
            Category::Data => Some(invalid_field(&err.to_string())),
            Category::Io => None,
        };
    }

    if let Some(rejection) = err.downcast_ref::<JsonRejection>() {
        return match rejection {
            JsonRejection::JsonSyntaxError(_) => Some(invalid_body()),
            JsonRejection::JsonDataError(err) => Some(invalid_field(&err.body_text())),
            _ => None,
        };
    }

    if err.is::<JsonSyntaxError>() {
        return Some(invalid_body());
    }

    err.downcast_ref::<JsonDataError>()
        .map(|err| invalid_field(&err.body_text()))
}

fn invalid_body() -> (StatusCode, ResponseBody) {
    (
        StatusCode::BAD_REQUEST,
        ResponseBody {
            message: INVALID_JSON_BODY_MESSAGE.to_owned(),
            ..ResponseBody::default()
        },
    )
}

fn invalid_field(text: &str) -> (StatusCode, ResponseBody) {
    (
        StatusCode::BAD_REQUEST,
        ResponseBody {
            message: INVALID_JSON_FIELD_MESSAGE.to_owned(),
            details: field_details(text),
            ..ResponseBody::default()
        },
    )
}

/// Name the offending field when the decoder reported it
///
/// axum prefixes the serde path (`items[0].sku: ...`); serde_json itself only
/// names fields for missing or unknown keys. Type mismatches from a bare
/// `serde_json::Error` carry no path and keep the decoder text.
fn field_details(text: &str) -> String {
    reported_path(text)
        .or_else(|| named_field(text))
        .map_or_else(
            || text.to_owned(),
            |field| format!("unexpected value for field '{field}'"),
        )
}

fn reported_path(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("target type: ")?;
    let (path, _) = rest.split_once(": ")?;
    Some(path).filter(|path| !path.is_empty() && !path.contains(' '))
}

fn named_field(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once("field `")?;
    let (name, _) = rest.split_once('`')?;
    Some(name).filter(|name| !name.is_empty())
}
