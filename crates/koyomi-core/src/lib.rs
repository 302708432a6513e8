//! Core ISO-8601 date and time values.
//!
//! This crate defines immutable, validated value types for calendar dates,
//! wall-clock times and their combination, together with a strict ISO-8601
//! parser and canonical formatting:
//!
//! - [`Date`], [`Time`], [`DateTime`] and [`UtcOffset`] enforce their range
//!   and calendar invariants at construction.
//! - The [`parse`] module decomposes ISO-8601 text, one entry point per
//!   mode, and never panics on malformed input.
//! - `Display` renders the canonical form: zero-padded fields, uppercase
//!   `T`, microseconds only when non-zero and `Z` for the zero offset, so
//!   `parse(value.to_string())` round-trips every value.
//!
//! serde support serializes values as their canonical text, and chrono
//! conversions bridge to the wider datetime ecosystem.

mod date;
mod datetime;
mod error;
mod offset;
mod time;

pub mod parse;

pub use date::{days_in_month, is_leap_year, Date};
pub use datetime::DateTime;
pub use error::{ComponentError, ComponentResult};
pub use offset::UtcOffset;
pub use parse::{ParseConfig, ParseError};
pub use time::Time;
