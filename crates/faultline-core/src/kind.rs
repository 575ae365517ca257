use http::StatusCode;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Default code for [`ErrorKind::Internal`]
pub const CODE_INTERNAL: i32 = 1;
/// Default code for [`ErrorKind::NotFound`]
pub const CODE_NOT_FOUND: i32 = 2;
/// Default code for [`ErrorKind::Validation`]
pub const CODE_INVALID_ARGUMENT: i32 = 3;
/// Default code for [`ErrorKind::Precondition`]
pub const CODE_PRECONDITION_FAILED: i32 = 4;
/// Default code for [`ErrorKind::Permission`]
pub const CODE_NO_PERMISSION: i32 = 5;

/// Closed set of error categories understood across services
///
/// The string form is what travels inside a serialized record, so the
/// names must stay stable once published.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr, IntoStaticStr,
    EnumIter,
)]
pub enum ErrorKind {
    /// Request arguments failed validation
    #[serde(rename = "ValidationError")]
    #[strum(serialize = "ValidationError")]
    Validation,
    /// Unexpected failure inside the service
    #[serde(rename = "InternalError")]
    #[strum(serialize = "InternalError")]
    Internal,
    /// Requested entity does not exist
    #[serde(rename = "NotFoundError")]
    #[strum(serialize = "NotFoundError")]
    NotFound,
    /// A condition required by the operation was not met
    #[serde(rename = "ConditionError")]
    #[strum(serialize = "ConditionError")]
    Precondition,
    /// Caller is not allowed to access the resource
    #[serde(rename = "PermissionError")]
    #[strum(serialize = "PermissionError")]
    Permission,
}

impl ErrorKind {
    /// Numeric code assigned to records of this kind unless overridden
    pub const fn default_code(self) -> i32 {
        match self {
            Self::Internal => CODE_INTERNAL,
            Self::NotFound => CODE_NOT_FOUND,
            Self::Validation => CODE_INVALID_ARGUMENT,
            Self::Precondition => CODE_PRECONDITION_FAILED,
            Self::Permission => CODE_NO_PERMISSION,
        }
    }

    /// HTTP status returned to clients for this kind
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Precondition => StatusCode::PRECONDITION_FAILED,
            Self::Permission => StatusCode::UNAUTHORIZED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Kind as read back from the wire
///
/// Foreign JSON may carry any string (or nothing) under `kind`, so the
/// decoded tag keeps unrecognized values instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KindTag {
    Known(ErrorKind),
    Unknown(String),
}

impl KindTag {
    pub const fn known(&self) -> Option<ErrorKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unknown(_) => None,
        }
    }

    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Known(kind) => kind.status_code(),
            Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_ref(),
            Self::Unknown(raw) => raw,
        }
    }
}

impl Default for KindTag {
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for KindTag {
    fn from(raw: String) -> Self {
        match raw.parse::<ErrorKind>() {
            Ok(kind) => Self::Known(kind),
            Err(_) => Self::Unknown(raw),
        }
    }
}

impl From<KindTag> for String {
    fn from(tag: KindTag) -> Self {
        match tag {
            KindTag::Known(kind) => kind.to_string(),
            KindTag::Unknown(raw) => raw,
        }
    }
}

impl From<ErrorKind> for KindTag {
    fn from(kind: ErrorKind) -> Self {
        Self::Known(kind)
    }
}
