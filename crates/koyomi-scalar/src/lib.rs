//! ISO-8601 scalar types for schema layers.
//!
//! This crate is the boundary between an embedding schema/query framework
//! and the value types of `koyomi-core`. The three scalars ([`DateScalar`],
//! [`DateTimeScalar`] and [`TimeScalar`]) each translate between the
//! ISO-8601 wire text and an in-memory value through the [`ScalarType`]
//! trait:
//!
//! - `serialize` takes a [`TemporalValue`] from the closed accepted set
//!   and renders canonical text, failing hard with [`TypeMismatch`] on a
//!   wrong kind (a caller bug, not bad input).
//! - `parse_value` and `parse_literal` treat their input as untrusted and
//!   yield `None` for anything malformed, which the framework is expected
//!   to surface as a user-facing validation error.
//!
//! Literal nodes arrive as [`LiteralValue`]; only string literals are ever
//! parsed, all other shapes are ignored without coercion.

mod error;
mod literal;
mod scalar;
mod value;

#[cfg(test)]
mod tests;

pub use error::TypeMismatch;
pub use literal::LiteralValue;
pub use scalar::{DateScalar, DateTimeScalar, ScalarType, TimeScalar};
pub use value::{TemporalValue, ValueKind};
