//! Coordinate construction errors
//!
//! The closed error surface of the library: construction either succeeds or
//! fails with one of exactly two classifications. Boundaries that identify
//! errors by (domain, code) pairs use the stable domain string plus the
//! per-variant numeric code.

use thiserror::Error;

/// Stable error domain identifier for (domain, code) interop boundaries
pub const ERROR_DOMAIN: &str = "LibCoordErrorDomain";

/// Coordinate construction failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateError {
    /// The supplied component count does not match the space's arity
    #[error("wrong number of dimensions for the target space")]
    WrongDimensions,

    /// The components are well-typed but describe a position the target
    /// space cannot contain
    #[error("position cannot exist in the target space")]
    CantExist,
}

impl CoordinateError {
    /// Stable numeric code within [`ERROR_DOMAIN`]
    pub fn code(&self) -> i32 {
        match self {
            CoordinateError::WrongDimensions => 0,
            CoordinateError::CantExist => 1,
        }
    }

    /// Stable variant name (for programmatic handling)
    pub fn kind(&self) -> &'static str {
        match self {
            CoordinateError::WrongDimensions => "WrongDimensions",
            CoordinateError::CantExist => "CantExist",
        }
    }
}

/// Result alias for coordinate construction
pub type CoordResult<T> = Result<T, CoordinateError>;
