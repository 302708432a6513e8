//! ISO-8601 parse error types.

use thiserror::Error;

use crate::error::ComponentError;

/// Result type for ISO-8601 parsing operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// An error describing why an ISO-8601 string was rejected.
///
/// Every rejection surfaces as a value of this type; the parser never
/// panics on malformed input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The date portion does not match `YYYY-MM-DD`.
    #[error("malformed date, expected YYYY-MM-DD")]
    InvalidDate,

    /// The time portion does not match `HH:MM:SS`.
    #[error("malformed time, expected HH:MM:SS")]
    InvalidTime,

    /// The date/time separator is missing or not an accepted character.
    #[error("missing or malformed separator between date and time")]
    InvalidSeparator,

    /// The fractional-second component is empty or longer than six digits.
    #[error("fractional seconds must be 1 to 6 digits")]
    InvalidFraction,

    /// The trailing offset matches neither `Z` nor an accepted signed form.
    #[error("malformed UTC offset, expected Z or +HH:MM/-HH:MM")]
    InvalidOffset,

    /// The grammar matched but a component is out of range.
    #[error(transparent)]
    OutOfRange(#[from] ComponentError),
}
