//! Fixed UTC offsets.

use std::fmt;

use crate::error::{ComponentError, ComponentResult};

/// A fixed whole-minute offset from UTC, strictly inside a day.
///
/// `Z` and `+00:00` both normalize to the zero offset, which formats back
/// as `Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtcOffset {
    minutes: i16,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self { minutes: 0 };

    /// Creates an offset from a signed total of minutes east of UTC.
    ///
    /// ## Errors
    /// Returns [`ComponentError::OffsetOutOfRange`] if the magnitude
    /// reaches 24 hours.
    pub fn from_minutes(minutes: i16) -> ComponentResult<Self> {
        if (-1439..=1439).contains(&minutes) {
            Ok(Self { minutes })
        } else {
            Err(ComponentError::OffsetOutOfRange(minutes))
        }
    }

    /// Signed total of minutes east of UTC.
    #[must_use]
    pub fn total_minutes(self) -> i16 {
        self.minutes
    }

    /// Signed hour component, truncated toward zero.
    #[must_use]
    pub fn hours(self) -> i16 {
        self.minutes / 60
    }

    /// Unsigned minute component below the hour.
    #[must_use]
    pub fn minutes(self) -> i16 {
        (self.minutes % 60).abs()
    }

    #[must_use]
    pub fn is_utc(self) -> bool {
        self.minutes == 0
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes == 0 {
            return f.write_str("Z");
        }
        let sign = if self.minutes < 0 { '-' } else { '+' };
        let magnitude = self.minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", magnitude / 60, magnitude % 60)
    }
}

impl From<UtcOffset> for chrono::FixedOffset {
    fn from(offset: UtcOffset) -> Self {
        // Bounded well inside FixedOffset's one-day range.
        Self::east_opt(i32::from(offset.minutes) * 60).expect("validated offset is representable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(UtcOffset::from_minutes(1439).is_ok());
        assert!(UtcOffset::from_minutes(-1439).is_ok());
        assert!(UtcOffset::from_minutes(1440).is_err());
        assert!(UtcOffset::from_minutes(-1440).is_err());
    }

    #[test]
    fn components() {
        let offset = UtcOffset::from_minutes(330).expect("valid offset");
        assert_eq!(offset.hours(), 5);
        assert_eq!(offset.minutes(), 30);

        let offset = UtcOffset::from_minutes(-480).expect("valid offset");
        assert_eq!(offset.hours(), -8);
        assert_eq!(offset.minutes(), 0);
    }

    #[test]
    fn zero_formats_as_z() {
        assert_eq!(UtcOffset::UTC.to_string(), "Z");
        assert!(UtcOffset::UTC.is_utc());
    }

    #[test]
    fn nonzero_formats_signed() {
        let east = UtcOffset::from_minutes(330).expect("valid offset");
        assert_eq!(east.to_string(), "+05:30");

        let west = UtcOffset::from_minutes(-510).expect("valid offset");
        assert_eq!(west.to_string(), "-08:30");
    }

    #[test]
    fn chrono_conversion() {
        let offset = UtcOffset::from_minutes(330).expect("valid offset");
        let fixed = chrono::FixedOffset::from(offset);
        assert_eq!(fixed.local_minus_utc(), 330 * 60);
    }
}
