use koyomi_core::{parse, DateTime};

use super::ScalarType;
use crate::error::TypeMismatch;
use crate::value::TemporalValue;

/// Combined date and time scalar, wire form
/// `YYYY-MM-DDTHH:MM:SS[.ffffff][offset]`.
///
/// A bare date is also accepted at serialize time and rendered in its
/// date-only canonical form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeScalar;

impl ScalarType for DateTimeScalar {
    type Output = DateTime;

    const NAME: &'static str = "DateTime";

    fn serialize(value: &TemporalValue) -> Result<String, TypeMismatch> {
        match value {
            TemporalValue::Date(date) => Ok(date.to_string()),
            TemporalValue::DateTime(datetime) => Ok(datetime.to_string()),
            TemporalValue::Time(_) => Err(TypeMismatch::new(Self::NAME, value.kind())),
        }
    }

    fn parse_value(input: &str) -> Option<DateTime> {
        match parse::parse_datetime(input) {
            Ok(datetime) => Some(datetime),
            Err(error) => {
                tracing::debug!(input, %error, "rejected datetime input");
                None
            }
        }
    }
}
