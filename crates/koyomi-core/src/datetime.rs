//! Combined date and time values.

use std::fmt;

use crate::date::Date;
use crate::error::{ComponentError, ComponentResult};
use crate::offset::UtcOffset;
use crate::time::Time;

/// A calendar date combined with a time of day.
///
/// The UTC offset, if any, is carried by the time portion (where ISO-8601
/// attaches it) and surfaced through [`DateTime::offset`]. A `DateTime`
/// whose time has no offset is naive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateTime {
    date: Date,
    time: Time,
}

impl DateTime {
    /// Combines a date and a time.
    #[must_use]
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    #[must_use]
    pub fn date(self) -> Date {
        self.date
    }

    #[must_use]
    pub fn time(self) -> Time {
        self.time
    }

    #[must_use]
    pub fn offset(self) -> Option<UtcOffset> {
        self.time.offset()
    }

    /// Resolves this value to an absolute UTC instant.
    ///
    /// Returns `None` for naive values, which name no instant.
    #[must_use]
    pub fn to_utc(self) -> Option<chrono::DateTime<chrono::Utc>> {
        let offset = self.offset()?;
        let naive = chrono::NaiveDateTime::from(self);
        let delta = chrono::TimeDelta::minutes(i64::from(offset.total_minutes()));
        Some((naive - delta).and_utc())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl From<DateTime> for chrono::NaiveDateTime {
    /// Drops any attached UTC offset.
    fn from(datetime: DateTime) -> Self {
        Self::new(datetime.date.into(), datetime.time.into())
    }
}

impl TryFrom<chrono::NaiveDateTime> for DateTime {
    type Error = ComponentError;

    fn try_from(datetime: chrono::NaiveDateTime) -> ComponentResult<Self> {
        Ok(Self::new(
            Date::try_from(datetime.date())?,
            Time::try_from(datetime.time())?,
        ))
    }
}

impl serde::Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DateTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DateTimeVisitor;

        impl serde::de::Visitor<'_> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO-8601 datetime string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<DateTime, E> {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(DateTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime {
        let date = Date::new(2021, 6, 1).expect("valid date");
        let time = Time::new(10, 0, 0, 0).expect("valid time");
        DateTime::new(date, time)
    }

    #[test]
    fn display_uses_uppercase_t() {
        assert_eq!(sample().to_string(), "2021-06-01T10:00:00");
    }

    #[test]
    fn offset_comes_from_the_time_portion() {
        let naive = sample();
        assert_eq!(naive.offset(), None);

        let aware = DateTime::new(naive.date(), naive.time().with_offset(UtcOffset::UTC));
        assert_eq!(aware.offset(), Some(UtcOffset::UTC));
        assert_eq!(aware.to_string(), "2021-06-01T10:00:00Z");
    }

    #[test]
    fn to_utc_applies_the_offset() {
        let offset = UtcOffset::from_minutes(330).expect("valid offset");
        let aware = DateTime::new(sample().date(), sample().time().with_offset(offset));
        let instant = aware.to_utc().expect("aware value");
        assert_eq!(instant.to_rfc3339(), "2021-06-01T04:30:00+00:00");
    }

    #[test]
    fn to_utc_is_none_for_naive_values() {
        assert_eq!(sample().to_utc(), None);
    }

    #[test]
    fn chrono_round_trip() {
        let naive = chrono::NaiveDateTime::from(sample());
        assert_eq!(DateTime::try_from(naive), Ok(sample()));
    }
}
