//! Wall-clock time values.

use std::fmt;

use crate::error::{ComponentError, ComponentResult};
use crate::offset::UtcOffset;

/// A time of day at microsecond precision, with an optional UTC offset.
///
/// The offset models the ISO-8601 offset designator, which attaches to the
/// time-of-day portion of a timestamp. A `Time` without an offset is naive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    offset: Option<UtcOffset>,
}

impl Time {
    /// Creates a naive time of day from its components.
    ///
    /// ## Errors
    /// Returns a [`ComponentError`] if a component is out of range. Leap
    /// seconds are not representable.
    pub fn new(hour: u8, minute: u8, second: u8, microsecond: u32) -> ComponentResult<Self> {
        if hour > 23 {
            return Err(ComponentError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ComponentError::MinuteOutOfRange(minute));
        }
        if second > 59 {
            return Err(ComponentError::SecondOutOfRange(second));
        }
        if microsecond > 999_999 {
            return Err(ComponentError::MicrosecondOutOfRange(microsecond));
        }
        Ok(Self {
            hour,
            minute,
            second,
            microsecond,
            offset: None,
        })
    }

    /// Attaches a UTC offset.
    #[must_use]
    pub fn with_offset(self, offset: UtcOffset) -> Self {
        Self {
            offset: Some(offset),
            ..self
        }
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub fn second(self) -> u8 {
        self.second
    }

    #[must_use]
    pub fn microsecond(self) -> u32 {
        self.microsecond
    }

    #[must_use]
    pub fn offset(self) -> Option<UtcOffset> {
        self.offset
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

impl From<Time> for chrono::NaiveTime {
    /// Drops any attached UTC offset.
    fn from(time: Time) -> Self {
        Self::from_hms_micro_opt(
            u32::from(time.hour),
            u32::from(time.minute),
            u32::from(time.second),
            time.microsecond,
        )
        .expect("validated time is representable")
    }
}

impl TryFrom<chrono::NaiveTime> for Time {
    type Error = ComponentError;

    /// Sub-microsecond precision is truncated; leap seconds are rejected.
    fn try_from(time: chrono::NaiveTime) -> ComponentResult<Self> {
        use chrono::Timelike;

        if time.nanosecond() >= 1_000_000_000 {
            return Err(ComponentError::SecondOutOfRange(60));
        }
        Self::new(
            u8::try_from(time.hour()).unwrap_or(u8::MAX),
            u8::try_from(time.minute()).unwrap_or(u8::MAX),
            u8::try_from(time.second()).unwrap_or(u8::MAX),
            time.nanosecond() / 1_000,
        )
    }
}

impl serde::Serialize for Time {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Time {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeVisitor;

        impl serde::de::Visitor<'_> for TimeVisitor {
            type Value = Time;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO-8601 time string")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Time, E> {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_components() {
        assert!(Time::new(24, 0, 0, 0).is_err());
        assert!(Time::new(0, 60, 0, 0).is_err());
        assert!(Time::new(0, 0, 60, 0).is_err());
        assert!(Time::new(0, 0, 0, 1_000_000).is_err());
    }

    #[test]
    fn display_omits_zero_microseconds() {
        let time = Time::new(13, 30, 0, 0).expect("valid time");
        assert_eq!(time.to_string(), "13:30:00");
    }

    #[test]
    fn display_renders_microseconds_and_offset() {
        let time = Time::new(13, 30, 0, 500_000).expect("valid time");
        assert_eq!(time.to_string(), "13:30:00.500000");

        let utc = time.with_offset(UtcOffset::UTC);
        assert_eq!(utc.to_string(), "13:30:00.500000Z");
    }

    #[test]
    fn chrono_round_trip() {
        let time = Time::new(13, 30, 5, 250_000).expect("valid time");
        let naive = chrono::NaiveTime::from(time);
        assert_eq!(Time::try_from(naive), Ok(time));
    }

    #[test]
    fn chrono_conversion_drops_offset() {
        let time = Time::new(13, 30, 0, 0)
            .expect("valid time")
            .with_offset(UtcOffset::UTC);
        let naive = chrono::NaiveTime::from(time);
        let back = Time::try_from(naive).expect("valid time");
        assert_eq!(back.offset(), None);
    }

    #[test]
    fn chrono_rejects_leap_second() {
        use chrono::Timelike;

        let leap = chrono::NaiveTime::from_hms_opt(23, 59, 59)
            .expect("valid chrono time")
            .with_nanosecond(1_500_000_000)
            .expect("leap second nanos");
        assert!(Time::try_from(leap).is_err());
    }
}
