//! Cross-scalar integration tests.

mod fixtures;
mod round_trip;
