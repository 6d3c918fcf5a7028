use thiserror::Error;

/// Failure of a fixed-width arithmetic operation
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum BignumError {
    /// The true result does not fit in the fixed width
    #[error("arithmetic overflow")]
    Overflow,

    /// Strict subtraction whose true result is below zero
    #[error("subtraction result is negative")]
    NegativeResult,

    #[error("attempt to divide by zero")]
    DivideByZero,

    #[error("bit index {index} is out of range for a {bits} bit number")]
    IndexOutOfRange { index: usize, bits: usize },
}

/// Failure to parse a [`Bignum`](super::Bignum) from hex text
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseBignumError {
    #[error("cannot parse a number from an empty string")]
    Empty,

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),

    #[error("expected {expected} underscore separated limbs, found {found}")]
    LimbCount { expected: usize, found: usize },

    #[error("number does not fit in the fixed width")]
    Overflow,
}

pub type Result<T, E = BignumError> = std::result::Result<T, E>;
