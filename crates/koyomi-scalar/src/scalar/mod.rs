//! Scalar types bridging ISO-8601 text and in-memory values.

mod date;
mod datetime;
mod time;

pub use date::DateScalar;
pub use datetime::DateTimeScalar;
pub use time::TimeScalar;

use crate::error::TypeMismatch;
use crate::literal::LiteralValue;
use crate::value::TemporalValue;

/// Common behavior of the date and time scalars.
///
/// The two directions carry deliberately different failure modes:
/// `serialize` enforces an input contract and fails hard on a wrong value
/// kind, while the parse paths treat their input as untrusted and report
/// rejection as `None` for the schema layer to turn into a validation
/// error.
pub trait ScalarType {
    /// Value produced by a successful parse.
    type Output;

    /// Scalar name used in logs and contract errors.
    const NAME: &'static str;

    /// Renders an accepted value as canonical ISO-8601 text.
    ///
    /// ## Errors
    /// Returns [`TypeMismatch`] if the value kind is outside this scalar's
    /// accepted set.
    fn serialize(value: &TemporalValue) -> Result<String, TypeMismatch>;

    /// Parses raw text; `None` for anything malformed or out of range.
    fn parse_value(input: &str) -> Option<Self::Output>;

    /// Parses a literal node; only string literals are considered.
    fn parse_literal(literal: &LiteralValue) -> Option<Self::Output> {
        match literal {
            LiteralValue::String(text) => Self::parse_value(text),
            other => {
                tracing::trace!(
                    scalar = Self::NAME,
                    kind = other.kind(),
                    "ignoring non-string literal"
                );
                None
            }
        }
    }
}
