//! Typed decoding of raw request-scoped values

use std::num::{ParseFloatError, ParseIntError};

/// Raw value could not be decoded into the requested type
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("value is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("invalid boolean `{0}`")]
    Bool(String),
    #[error("invalid integer `{value}`: {source}")]
    Int { value: String, source: ParseIntError },
    #[error("invalid float `{value}`: {source}")]
    Float { value: String, source: ParseFloatError },
}

/// Types that can be decoded from a raw parameter value
pub trait FromParam: Sized {
    /// # Errors
    ///
    /// Returns an error if `raw` does not hold a valid value of this type
    fn from_param(raw: &[u8]) -> Result<Self, ParamError>;
}

impl FromParam for String {
    fn from_param(raw: &[u8]) -> Result<Self, ParamError> {
        Ok(std::str::from_utf8(raw)?.to_owned())
    }
}

/// Comma separated list, without trimming
impl FromParam for Vec<String> {
    fn from_param(raw: &[u8]) -> Result<Self, ParamError> {
        Ok(std::str::from_utf8(raw)?.split(',').map(str::to_owned).collect())
    }
}

impl FromParam for bool {
    fn from_param(raw: &[u8]) -> Result<Self, ParamError> {
        match std::str::from_utf8(raw)? {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            other => Err(ParamError::Bool(other.to_owned())),
        }
    }
}

macro_rules! int_param {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                fn from_param(raw: &[u8]) -> Result<Self, ParamError> {
                    let value = std::str::from_utf8(raw)?;
                    value.parse().map_err(|source| ParamError::Int { value: value.to_owned(), source })
                }
            }
        )*
    };
}

macro_rules! float_param {
    ($($ty:ty),*) => {
        $(
            impl FromParam for $ty {
                fn from_param(raw: &[u8]) -> Result<Self, ParamError> {
                    let value = std::str::from_utf8(raw)?;
                    value.parse().map_err(|source| ParamError::Float { value: value.to_owned(), source })
                }
            }
        )*
    };
}

int_param!(i32, i64, isize, u16, u32, u64, usize);
float_param!(f32, f64);
