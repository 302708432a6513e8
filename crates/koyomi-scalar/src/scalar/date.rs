use koyomi_core::{parse, Date};

use super::ScalarType;
use crate::error::TypeMismatch;
use crate::value::TemporalValue;

/// Calendar date scalar, wire form `YYYY-MM-DD`.
///
/// Serializes a date, or a datetime whose time-of-day is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateScalar;

impl ScalarType for DateScalar {
    type Output = Date;

    const NAME: &'static str = "Date";

    fn serialize(value: &TemporalValue) -> Result<String, TypeMismatch> {
        match value {
            TemporalValue::Date(date) => Ok(date.to_string()),
            TemporalValue::DateTime(datetime) => Ok(datetime.date().to_string()),
            TemporalValue::Time(_) => Err(TypeMismatch::new(Self::NAME, value.kind())),
        }
    }

    fn parse_value(input: &str) -> Option<Date> {
        match parse::parse_date(input) {
            Ok(date) => Some(date),
            Err(error) => {
                tracing::debug!(input, %error, "rejected date input");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_only() {
        assert!(DateScalar::parse_value("2021-06-01").is_some());
        assert!(DateScalar::parse_value("2021-02-30").is_none());
        assert!(DateScalar::parse_value("2021-06-01T10:00:00").is_none());
    }

    #[test]
    fn serializes_the_date_portion_of_a_datetime() {
        let datetime = "2021-06-01T10:00:00Z".parse().expect("valid datetime");
        let rendered =
            DateScalar::serialize(&TemporalValue::DateTime(datetime)).expect("accepted kind");
        assert_eq!(rendered, "2021-06-01");
    }

    #[test]
    fn rejects_time_values_loudly() {
        let time = "13:30:00".parse().expect("valid time");
        let error = DateScalar::serialize(&TemporalValue::Time(time))
            .expect_err("times are outside the contract");
        assert_eq!(error.scalar, "Date");
    }
}
