//! Error types for fraction construction, arithmetic and casting.

use thiserror::Error;

/// Errors raised by [`Fraction`](crate::Fraction) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// A fraction was constructed with a zero denominator
    #[error("denominator cannot be 0")]
    InvalidArgument,

    /// The divisor has a zero numerator
    #[error("cannot divide by a fraction equal to 0")]
    DivideByZero,

    /// Narrowing to an integer with a denominator other than 1
    #[error("cannot convert fraction to i32 with {denominator} as denominator")]
    InvalidCast { denominator: i32 },

    /// The result does not fit in an `i32` numerator or denominator
    #[error("fraction arithmetic overflowed i32")]
    Overflow,
}
