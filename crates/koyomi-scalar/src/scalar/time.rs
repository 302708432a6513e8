use koyomi_core::{parse, Time};

use super::ScalarType;
use crate::error::TypeMismatch;
use crate::value::TemporalValue;

/// Time-of-day scalar, wire form `HH:MM:SS[.ffffff][offset]`.
///
/// Accepts only time values; dates and datetimes are contract violations.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeScalar;

impl ScalarType for TimeScalar {
    type Output = Time;

    const NAME: &'static str = "Time";

    fn serialize(value: &TemporalValue) -> Result<String, TypeMismatch> {
        match value {
            TemporalValue::Time(time) => Ok(time.to_string()),
            TemporalValue::Date(_) | TemporalValue::DateTime(_) => {
                Err(TypeMismatch::new(Self::NAME, value.kind()))
            }
        }
    }

    fn parse_value(input: &str) -> Option<Time> {
        match parse::parse_time(input) {
            Ok(time) => Some(time),
            Err(error) => {
                tracing::debug!(input, %error, "rejected time input");
                None
            }
        }
    }
}
