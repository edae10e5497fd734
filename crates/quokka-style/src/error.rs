//! Errors produced while parsing authored values.

use thiserror::Error;

/// A value string that could not be turned into a used-value candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleParseError {
    /// The numeric part of a dimension did not parse as a finite number.
    #[error("invalid number in `{0}`")]
    InvalidNumber(String),
    /// The value carries a unit this engine does not resolve.
    #[error("unsupported unit in `{0}` (expected px, % or 0)")]
    UnsupportedUnit(String),
    /// `auto` given where the property does not accept it.
    #[error("`auto` is not allowed here")]
    UnexpectedAuto,
}
