//! Strict ISO-8601 grammar parser.
//!
//! One entry point per mode: [`parse_date`] for `YYYY-MM-DD`,
//! [`parse_time`] for `HH:MM:SS[.ffffff][offset]` and [`parse_datetime`]
//! for the combined form. All numeric fields are fixed-width unsigned
//! decimal with required leading zeros; the input is examined at the byte
//! level, so arbitrary text can never fault the parser.

mod error;

pub use error::{ParseError, ParseResult};

use std::str::FromStr;

use crate::date::Date;
use crate::datetime::DateTime;
use crate::error::ComponentError;
use crate::offset::UtcOffset;
use crate::time::Time;

/// Strictness options for the ISO-8601 grammar.
///
/// The defaults match the interchange forms commonly seen on the wire: a
/// `T` or single space between date and time, and extended `+HH:MM` style
/// offsets only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Accept a single space in place of the `T` date/time separator.
    pub allow_space_separator: bool,
    /// Accept basic-format offsets (`+HHMM`, `+HH`) in addition to `+HH:MM`.
    pub allow_basic_offset: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            allow_space_separator: true,
            allow_basic_offset: false,
        }
    }
}

impl ParseConfig {
    /// The `T`-separated extended grammar only.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            allow_space_separator: false,
            allow_basic_offset: false,
        }
    }

    /// Every relaxation this parser knows about.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_space_separator: true,
            allow_basic_offset: true,
        }
    }

    /// Parses `HH:MM:SS[.ffffff][offset]` under this config.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] on any structural or range violation.
    pub fn parse_time(self, input: &str) -> ParseResult<Time> {
        time_component(input.as_bytes(), self)
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS[.ffffff][offset]` under this config.
    ///
    /// ## Errors
    /// Returns a [`ParseError`] on any structural or range violation.
    pub fn parse_datetime(self, input: &str) -> ParseResult<DateTime> {
        datetime_component(input.as_bytes(), self)
    }
}

/// Parses an ISO-8601 calendar date, exactly `YYYY-MM-DD`.
///
/// ## Errors
/// Returns a [`ParseError`] on wrong digit counts, out-of-range fields or
/// a day that does not exist on the calendar.
pub fn parse_date(input: &str) -> ParseResult<Date> {
    date_component(input.as_bytes())
}

/// Parses an ISO-8601 time of day with the default config.
///
/// ## Errors
/// Returns a [`ParseError`] on any structural or range violation.
pub fn parse_time(input: &str) -> ParseResult<Time> {
    ParseConfig::default().parse_time(input)
}

/// Parses an ISO-8601 datetime with the default config.
///
/// ## Errors
/// Returns a [`ParseError`] on any structural or range violation.
pub fn parse_datetime(input: &str) -> ParseResult<DateTime> {
    ParseConfig::default().parse_datetime(input)
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse_date(s)
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse_time(s)
    }
}

impl FromStr for DateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        parse_datetime(s)
    }
}

fn two_digits(bytes: &[u8], err: ParseError) -> ParseResult<u8> {
    match bytes {
        [tens, ones] if tens.is_ascii_digit() && ones.is_ascii_digit() => {
            Ok((tens - b'0') * 10 + (ones - b'0'))
        }
        _ => Err(err),
    }
}

fn four_digits(bytes: &[u8], err: ParseError) -> ParseResult<u16> {
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(err);
    }
    Ok(bytes
        .iter()
        .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0')))
}

/// Scales a run of 1 to 6 fraction digits to microseconds.
fn fraction(digits: &[u8]) -> ParseResult<u32> {
    if digits.is_empty() || digits.len() > 6 {
        return Err(ParseError::InvalidFraction);
    }
    let mut micros = digits
        .iter()
        .fold(0u32, |acc, digit| acc * 10 + u32::from(digit - b'0'));
    for _ in digits.len()..6 {
        micros *= 10;
    }
    Ok(micros)
}

fn date_component(bytes: &[u8]) -> ParseResult<Date> {
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ParseError::InvalidDate);
    }
    let year = four_digits(&bytes[..4], ParseError::InvalidDate)?;
    let month = two_digits(&bytes[5..7], ParseError::InvalidDate)?;
    let day = two_digits(&bytes[8..], ParseError::InvalidDate)?;
    Ok(Date::new(year, month, day)?)
}

fn time_component(bytes: &[u8], config: ParseConfig) -> ParseResult<Time> {
    if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
        return Err(ParseError::InvalidTime);
    }
    let hour = two_digits(&bytes[..2], ParseError::InvalidTime)?;
    let minute = two_digits(&bytes[3..5], ParseError::InvalidTime)?;
    let second = two_digits(&bytes[6..8], ParseError::InvalidTime)?;

    let rest = &bytes[8..];
    let (microsecond, rest) = if let [b'.', tail @ ..] = rest {
        let digits = tail.iter().take_while(|byte| byte.is_ascii_digit()).count();
        (fraction(&tail[..digits])?, &tail[digits..])
    } else {
        (0, rest)
    };

    let time = Time::new(hour, minute, second, microsecond)?;
    if rest.is_empty() {
        Ok(time)
    } else {
        Ok(time.with_offset(offset_component(rest, config)?))
    }
}

fn datetime_component(bytes: &[u8], config: ParseConfig) -> ParseResult<DateTime> {
    let Some((date_bytes, rest)) = bytes.split_at_checked(10) else {
        return Err(ParseError::InvalidDate);
    };
    let date = date_component(date_bytes)?;

    let [separator, time_bytes @ ..] = rest else {
        return Err(ParseError::InvalidSeparator);
    };
    if *separator != b'T' && !(config.allow_space_separator && *separator == b' ') {
        return Err(ParseError::InvalidSeparator);
    }

    let time = time_component(time_bytes, config)?;
    Ok(DateTime::new(date, time))
}

fn offset_component(bytes: &[u8], config: ParseConfig) -> ParseResult<UtcOffset> {
    match bytes {
        [b'Z'] | [b'z'] => Ok(UtcOffset::UTC),
        [sign @ (b'+' | b'-'), magnitude @ ..] => {
            let (hour, minute) = if magnitude.len() == 5 && magnitude[2] == b':' {
                (
                    two_digits(&magnitude[..2], ParseError::InvalidOffset)?,
                    two_digits(&magnitude[3..], ParseError::InvalidOffset)?,
                )
            } else if config.allow_basic_offset && magnitude.len() == 4 {
                (
                    two_digits(&magnitude[..2], ParseError::InvalidOffset)?,
                    two_digits(&magnitude[2..], ParseError::InvalidOffset)?,
                )
            } else if config.allow_basic_offset && magnitude.len() == 2 {
                (two_digits(magnitude, ParseError::InvalidOffset)?, 0)
            } else {
                return Err(ParseError::InvalidOffset);
            };

            let total = i16::from(hour) * 60 + i16::from(minute);
            let minutes = if *sign == b'-' { -total } else { total };
            if hour > 23 || minute > 59 {
                return Err(ComponentError::OffsetOutOfRange(minutes).into());
            }
            Ok(UtcOffset::from_minutes(minutes)?)
        }
        _ => Err(ParseError::InvalidOffset),
    }
}
