use thiserror::Error;

/// Result type for value construction.
pub type ComponentResult<T> = std::result::Result<T, ComponentError>;

/// An error produced when a component of a date or time value is outside
/// its valid range, or the components do not name a real calendar day.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentError {
    #[error("year {0} is outside 1..=9999")]
    YearOutOfRange(i32),

    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u8),

    #[error("day {day} does not exist in {year:04}-{month:02}")]
    DayOutOfRange { year: u16, month: u8, day: u8 },

    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(u8),

    #[error("minute {0} is outside 0..=59")]
    MinuteOutOfRange(u8),

    #[error("second {0} is outside 0..=59")]
    SecondOutOfRange(u8),

    #[error("microsecond {0} is outside 0..=999999")]
    MicrosecondOutOfRange(u32),

    #[error("UTC offset of {0} minutes is outside -23:59..=+23:59")]
    OffsetOutOfRange(i16),
}
