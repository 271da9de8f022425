//! Coefficient fields: the capability interface the elimination is written against.
//!
//! - `OrderedField`: exact `+ - * /`, comparison against zero, coercion from
//!   integers. Any ordered field works (rationals, a parametric field with a
//!   test point, ...); only the sign of a coefficient is ever inspected.
//! - Implemented for `BigRational`. Fixed-width ratios such as `Rational64`
//!   are not implemented: Fourier–Motzkin multiplies
//!   coefficients pairwise, so their products overflow on ordinary input.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

/// Ordered field with exact arithmetic.
///
/// `Ord` must be compatible with the field operations (`a < b` implies
/// `a + c < b + c`, and `0 < a, 0 < b` implies `0 < a b`). Division by zero is
/// never requested by this crate.
pub trait OrderedField:
    Clone
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Coerce an integer into the field.
    fn from_i64(n: i64) -> Self;

    /// Nearest `f64`, for reporting only. `NaN` if not representable.
    fn approx_f64(&self) -> f64;

    /// Sign of `self` as an ordering against zero.
    #[inline]
    fn sign(&self) -> Ordering {
        self.cmp(&Self::zero())
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign() == Ordering::Greater
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign() == Ordering::Less
    }
}

impl OrderedField for BigRational {
    #[inline]
    fn from_i64(n: i64) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }
    #[inline]
    fn approx_f64(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}

/// Shorthand for the rational `num / den` in `BigRational`.
///
/// # Panics
///
/// Panics if `den == 0`.
#[inline]
pub fn q(num: i64, den: i64) -> BigRational {
    assert!(den != 0, "denominator cannot be zero");
    BigRational::new(BigInt::from(num), BigInt::from(den))
}

/// Integer row into the field, for tests and generators.
pub fn row_from_i64<F: OrderedField>(row: &[i64]) -> Vec<F> {
    row.iter().map(|&x| F::from_i64(x)).collect()
}
