use thiserror::Error;

use crate::value::ValueKind;

/// Contract violation: a scalar was handed a value kind outside its
/// accepted set at serialize time.
///
/// Unlike the `None` produced for malformed text, this indicates a bug in
/// the caller and is meant to surface loudly.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{scalar} cannot serialize a {found} value")]
pub struct TypeMismatch {
    /// Name of the scalar whose contract was violated.
    pub scalar: &'static str,
    /// Kind of value that was actually supplied.
    pub found: ValueKind,
}

impl TypeMismatch {
    #[must_use]
    pub fn new(scalar: &'static str, found: ValueKind) -> Self {
        Self { scalar, found }
    }
}
