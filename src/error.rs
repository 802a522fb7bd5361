//! Error types for the matrix algebra and the LWE scheme.
//!
//! Two kinds of failure surface to callers: dimensional preconditions
//! violated by matrix operations, and parameter sets that fail validation.
//! Wrong decryption caused by accumulated noise is not an error; it is a
//! probabilistic event bounded by parameter choice.

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A matrix operation was invoked on incompatible shapes. The message
    /// names the offending dimensions.
    MalformedMatrix(String),
    /// An `LweParams` value failed validation.
    InvalidParameters(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedMatrix(msg) => write!(f, "malformed matrix: {}", msg),
            Error::InvalidParameters(msg) => write!(f, "invalid parameters: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

macro_rules! malformed {
    ($($arg:tt)*) => {
        $crate::error::Error::MalformedMatrix(format!($($arg)*))
    };
}

macro_rules! invalid_params {
    ($($arg:tt)*) => {
        $crate::error::Error::InvalidParameters(format!($($arg)*))
    };
}

pub(crate) use invalid_params;
pub(crate) use malformed;
