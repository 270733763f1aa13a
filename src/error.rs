//! Error taxonomy and status signals.

use core::fmt;

/// Failures reported by chains and tables. A failed operation leaves the
/// structure in its last valid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Out-of-range size, unrecognized tag, or a datum of the wrong domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bucket storage could not be reserved.
    #[error("allocation failed: {0}")]
    AllocationError(String),

    /// Query against a structure with no qualifying element.
    #[error("no element present")]
    Empty,

    /// Targeted element is not present.
    #[error("element not found")]
    NotFound,

    /// Table configuration could not be parsed or validated.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse outcome of an operation, for callers that only branch on
/// success/failure/presence rather than on the error kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Fail,
    Found,
    NotFound,
}

impl From<Result<()>> for Status {
    fn from(r: Result<()>) -> Self {
        match r {
            Ok(()) => Status::Success,
            Err(Error::NotFound) => Status::NotFound,
            Err(_) => Status::Fail,
        }
    }
}

impl From<Result<bool>> for Status {
    fn from(r: Result<bool>) -> Self {
        match r {
            Ok(true) => Status::Found,
            Ok(false) | Err(Error::NotFound) => Status::NotFound,
            Err(_) => Status::Fail,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Success => "success",
            Status::Fail => "fail",
            Status::Found => "found",
            Status::NotFound => "not found",
        })
    }
}
