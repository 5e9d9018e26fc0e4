//! Exact fixed-width rational number arithmetic
//!
//! Provides a Fraction type over `i32` kept in canonical form: the
//! denominator is always positive and a nonzero numerator is reduced to
//! lowest terms. A zero numerator keeps its denominator (`0/20` stays
//! `0/20`) but compares and hashes equal to every other zero.

use crate::error::FractionError;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedSub, One, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Rational number stored as a normalized `numerator/denominator` pair.
///
/// Values are immutable; every operation returns a new Fraction. The
/// arithmetic operators panic on `i32` overflow the same way integer
/// operators do, and `/` panics when the divisor is zero. Use
/// [`Fraction::divide`] or the `Checked*` traits to get the failure as a
/// value instead.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "FractionRepr", into = "FractionRepr")]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
}

/// Internal representation for serialization
#[derive(Serialize, Deserialize)]
struct FractionRepr {
    n: i32,
    d: i32,
}

impl Fraction {
    /// Create a normalized Fraction from numerator and denominator.
    ///
    /// Moves a negative sign from the denominator to the numerator, then
    /// divides both by their greatest common divisor when the numerator is
    /// nonzero.
    ///
    /// # Errors
    ///
    /// [`FractionError::InvalidArgument`] when `denominator` is 0, and
    /// [`FractionError::Overflow`] when the sign-fix would negate `i32::MIN`.
    pub fn new(numerator: i32, denominator: i32) -> Result<Fraction, FractionError> {
        if denominator == 0 {
            return Err(FractionError::InvalidArgument);
        }

        let (mut numerator, mut denominator) = (numerator, denominator);

        if denominator < 0 {
            numerator = numerator.checked_neg().ok_or(FractionError::Overflow)?;
            denominator = denominator.checked_neg().ok_or(FractionError::Overflow)?;
        }

        if numerator != 0 {
            let divisor = numerator.gcd(&denominator);
            numerator /= divisor;
            denominator /= divisor;
        }

        Ok(Fraction {
            numerator,
            denominator,
        })
    }

    /// Create a Fraction from a single integer (`value/1`)
    pub const fn from_int(value: i32) -> Fraction {
        Fraction {
            numerator: value,
            denominator: 1,
        }
    }

    /// Signed numerator
    pub const fn numerator(&self) -> i32 {
        self.numerator
    }

    /// Denominator, always positive
    pub const fn denominator(&self) -> i32 {
        self.denominator
    }

    /// Divide by another fraction.
    ///
    /// # Errors
    ///
    /// [`FractionError::DivideByZero`] when `rhs` has a zero numerator, and
    /// [`FractionError::Overflow`] when the cross products leave `i32`.
    pub fn divide(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        if rhs.numerator == 0 {
            return Err(FractionError::DivideByZero);
        }

        Fraction::from_parts(
            self.numerator.checked_mul(rhs.denominator),
            self.denominator.checked_mul(rhs.numerator),
        )
    }

    /// Narrow to an integer.
    ///
    /// Only a denominator of exactly 1 converts, so `0/11` fails even
    /// though it equals zero.
    pub fn to_int(&self) -> Result<i32, FractionError> {
        if self.denominator > 1 {
            return Err(FractionError::InvalidCast {
                denominator: self.denominator,
            });
        }

        Ok(self.numerator)
    }

    /// Check if the denominator is 1
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Check if this is negative
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Convert to f64 (lossy)
    pub fn to_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }

    fn from_parts(
        numerator: Option<i32>,
        denominator: Option<i32>,
    ) -> Result<Fraction, FractionError> {
        match (numerator, denominator) {
            (Some(numerator), Some(denominator)) => Fraction::new(numerator, denominator),
            _ => Err(FractionError::Overflow),
        }
    }

    fn try_add(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        let numerator = self
            .numerator
            .checked_mul(rhs.denominator)
            .zip(rhs.numerator.checked_mul(self.denominator))
            .and_then(|(a, b)| a.checked_add(b));

        Fraction::from_parts(numerator, self.denominator.checked_mul(rhs.denominator))
    }

    fn try_sub(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        let numerator = self
            .numerator
            .checked_mul(rhs.denominator)
            .zip(rhs.numerator.checked_mul(self.denominator))
            .and_then(|(a, b)| a.checked_sub(b));

        Fraction::from_parts(numerator, self.denominator.checked_mul(rhs.denominator))
    }

    fn try_mul(&self, rhs: &Fraction) -> Result<Fraction, FractionError> {
        Fraction::from_parts(
            self.numerator.checked_mul(rhs.numerator),
            self.denominator.checked_mul(rhs.denominator),
        )
    }

    fn try_neg(&self) -> Result<Fraction, FractionError> {
        let numerator = self.numerator.checked_neg().ok_or(FractionError::Overflow)?;

        Ok(Fraction {
            numerator,
            denominator: self.denominator,
        })
    }
}

fn unwrap_op(result: Result<Fraction, FractionError>) -> Fraction {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

// Implement standard traits

impl Default for Fraction {
    fn default() -> Self {
        Fraction::from_int(0)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        if self.numerator == 0 && other.numerator == 0 {
            return true;
        }

        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // All zeros are equal whatever their denominator.
        if self.numerator == 0 {
            0i32.hash(state);
            return;
        }

        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({})", self)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        unwrap_op(self.try_add(&rhs))
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        unwrap_op(self.try_sub(&rhs))
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        unwrap_op(self.try_mul(&rhs))
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        unwrap_op(self.divide(&rhs))
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        unwrap_op(self.try_neg())
    }
}

impl CheckedAdd for Fraction {
    fn checked_add(&self, v: &Fraction) -> Option<Fraction> {
        self.try_add(v).ok()
    }
}

impl CheckedSub for Fraction {
    fn checked_sub(&self, v: &Fraction) -> Option<Fraction> {
        self.try_sub(v).ok()
    }
}

impl CheckedMul for Fraction {
    fn checked_mul(&self, v: &Fraction) -> Option<Fraction> {
        self.try_mul(v).ok()
    }
}

impl CheckedDiv for Fraction {
    fn checked_div(&self, v: &Fraction) -> Option<Fraction> {
        self.divide(v).ok()
    }
}

impl CheckedNeg for Fraction {
    fn checked_neg(&self) -> Option<Fraction> {
        self.try_neg().ok()
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Fraction::from_int(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Fraction::from_int(1)
    }
}

impl From<i32> for Fraction {
    fn from(value: i32) -> Self {
        Fraction::from_int(value)
    }
}

impl TryFrom<Fraction> for i32 {
    type Error = FractionError;

    fn try_from(fraction: Fraction) -> Result<i32, FractionError> {
        fraction.to_int()
    }
}

impl TryFrom<(i32, i32)> for Fraction {
    type Error = FractionError;

    fn try_from((n, d): (i32, i32)) -> Result<Self, FractionError> {
        Fraction::new(n, d)
    }
}

impl From<Fraction> for Ratio<i32> {
    fn from(fraction: Fraction) -> Self {
        Ratio::new(fraction.numerator, fraction.denominator)
    }
}

impl TryFrom<Ratio<i32>> for Fraction {
    type Error = FractionError;

    fn try_from(ratio: Ratio<i32>) -> Result<Self, FractionError> {
        Fraction::new(*ratio.numer(), *ratio.denom())
    }
}

impl From<Fraction> for FractionRepr {
    fn from(fraction: Fraction) -> Self {
        FractionRepr {
            n: fraction.numerator,
            d: fraction.denominator,
        }
    }
}

impl TryFrom<FractionRepr> for Fraction {
    type Error = FractionError;

    fn try_from(repr: FractionRepr) -> Result<Self, FractionError> {
        Fraction::new(repr.n, repr.d)
    }
}
