//! The closed set of in-memory values the scalars exchange.

use std::fmt;

use koyomi_core::{Date, DateTime, Time};

/// A tagged date or time value, as supplied to a scalar's serialize path.
///
/// Each scalar accepts an explicit subset of these variants and rejects
/// the rest as a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    Date(Date),
    DateTime(DateTime),
    Time(Time),
}

impl TemporalValue {
    /// The kind tag, used in contract errors and logs.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Date(_) => ValueKind::Date,
            Self::DateTime(_) => ValueKind::DateTime,
            Self::Time(_) => ValueKind::Time,
        }
    }
}

impl From<Date> for TemporalValue {
    fn from(date: Date) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime> for TemporalValue {
    fn from(datetime: DateTime) -> Self {
        Self::DateTime(datetime)
    }
}

impl From<Time> for TemporalValue {
    fn from(time: Time) -> Self {
        Self::Time(time)
    }
}

/// Discriminant of a [`TemporalValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Date,
    DateTime,
    Time,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date => f.write_str("date"),
            Self::DateTime => f.write_str("datetime"),
            Self::Time => f.write_str("time"),
        }
    }
}
