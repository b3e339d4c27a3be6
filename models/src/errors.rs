// models/src/errors.rs

pub use thiserror::Error;

/// A validation error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A region identifier (province or district) was empty or blank.
    #[error("region {0} identifier must not be empty")]
    EmptyRegionIdentifier(&'static str),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
