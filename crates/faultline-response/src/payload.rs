use serde::Serialize;
use serde_json::Value;

/// Success payload written by [`crate::ResponseWriter::forward_success`]
///
/// Types can substitute a dedicated client-facing representation by
/// overriding [`HttpPayload::http_response`].
pub trait HttpPayload: Serialize {
    fn http_response(&self) -> Option<Value> {
        None
    }
}

impl HttpPayload for Value {}

impl HttpPayload for str {}

impl HttpPayload for String {}

impl<T: Serialize> HttpPayload for [T] {}

impl<T: Serialize> HttpPayload for Vec<T> {}

impl<T: HttpPayload + ?Sized> HttpPayload for &T {
    fn http_response(&self) -> Option<Value> {
        (**self).http_response()
    }
}
