use thiserror::Error;

/// Errors raised while building a threshold table or accepting a delta.
///
/// The classifier and the counter cell themselves cannot fail; every
/// variant here is produced at a boundary, before anything reaches the
/// state model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("threshold table is empty")]
    EmptyTable,

    #[error("lower bound {bound} appears more than once in the threshold table")]
    DuplicateBound { bound: i64 },

    #[error("threshold table must be strictly descending: {previous} is followed by {next}")]
    NotDescending { previous: i64, next: i64 },

    #[error("invalid delta {0:?}: expected a whole number")]
    InvalidDelta(String),

    #[error("invalid threshold configuration: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, RangeError>;
