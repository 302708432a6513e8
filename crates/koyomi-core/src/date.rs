//! Calendar date values.

use std::fmt;

use crate::error::{ComponentError, ComponentResult};

/// A day on the proleptic Gregorian calendar, years 1 through 9999.
///
/// Construction is validating: a `Date` always names a real calendar day,
/// leap years included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a date from its components.
    ///
    /// ## Errors
    /// Returns a [`ComponentError`] if a component is out of range or the
    /// components do not name an existing day (e.g. 2021-02-30).
    pub fn new(year: u16, month: u8, day: u8) -> ComponentResult<Self> {
        if year == 0 || year > 9999 {
            return Err(ComponentError::YearOutOfRange(i32::from(year)));
        }
        if !(1..=12).contains(&month) {
            return Err(ComponentError::MonthOutOfRange(month));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(ComponentError::DayOutOfRange { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    #[must_use]
    pub fn year(self) -> u16 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u8 {
        self.month
    }

    #[must_use]
    pub fn day(self) -> u8 {
        self.day
    }
}

/// Returns whether `year` is a Gregorian leap year.
#[must_use]
pub fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month, 0 for an invalid month.
#[must_use]
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        // Date invariants keep every value inside chrono's range.
        Self::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )
        .expect("validated date is representable")
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = ComponentError;

    fn try_from(date: chrono::NaiveDate) -> ComponentResult<Self> {
        use chrono::Datelike;

        let year = u16::try_from(date.year())
            .map_err(|_| ComponentError::YearOutOfRange(date.year()))?;
        let month = u8::try_from(date.month()).unwrap_or(u8::MAX);
        let day = u8::try_from(date.day()).unwrap_or(u8::MAX);
        Self::new(year, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateVisitor;

        impl serde::de::Visitor<'_> for DateVisitor {
            type Value = Date;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO-8601 calendar date string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Date, E> {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}
