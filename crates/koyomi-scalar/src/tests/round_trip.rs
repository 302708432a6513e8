//! Parse/serialize round-trip tests.
//!
//! Every canonical string must survive parse -> serialize unchanged, and
//! every parsed value must survive serialize -> parse unchanged.

use super::fixtures::{CANONICAL_DATES, CANONICAL_DATETIMES, CANONICAL_TIMES, GARBAGE};
use crate::scalar::{DateScalar, DateTimeScalar, ScalarType, TimeScalar};
use crate::value::TemporalValue;

fn round_trip<S>(input: &str, wrap: fn(S::Output) -> TemporalValue) -> Result<(), String>
where
    S: ScalarType,
    S::Output: PartialEq + Copy + std::fmt::Debug,
{
    let value = S::parse_value(input).ok_or_else(|| format!("first parse failed: {input}"))?;

    let rendered = S::serialize(&wrap(value)).map_err(|e| format!("serialize failed: {e}"))?;
    if rendered != input {
        return Err(format!("canonical mismatch: {input} became {rendered}"));
    }

    let reparsed =
        S::parse_value(&rendered).ok_or_else(|| format!("second parse failed: {rendered}"))?;
    if reparsed != value {
        return Err(format!("value mismatch after round trip: {input}"));
    }

    Ok(())
}

#[test_log::test]
fn dates_round_trip() {
    for input in CANONICAL_DATES {
        round_trip::<DateScalar>(input, TemporalValue::Date).expect("date round trip");
    }
}

#[test_log::test]
fn datetimes_round_trip() {
    for input in CANONICAL_DATETIMES {
        round_trip::<DateTimeScalar>(input, TemporalValue::DateTime).expect("datetime round trip");
    }
}

#[test_log::test]
fn times_round_trip() {
    for input in CANONICAL_TIMES {
        round_trip::<TimeScalar>(input, TemporalValue::Time).expect("time round trip");
    }
}

#[test_log::test]
fn garbage_is_rejected_everywhere() {
    for input in GARBAGE {
        assert!(
            DateScalar::parse_value(input).is_none(),
            "Date accepted {input:?}"
        );
        assert!(
            DateTimeScalar::parse_value(input).is_none(),
            "DateTime accepted {input:?}"
        );
        assert!(
            TimeScalar::parse_value(input).is_none(),
            "Time accepted {input:?}"
        );
    }
}
