//! Arbitrary-precision signed decimal arithmetic.
//!
//! [`Decimal`] wraps [`bigdecimal::BigDecimal`] and exposes exactly the
//! operation set the pricing formulas need: infallible add/subtract/multiply,
//! checked division, square root, integer powers, comparisons, and rounding
//! to a fixed number of decimal places with an explicit [`Rounding`] mode.
//!
//! # Precision convention
//!
//! Token quantities are bounded at [`QTY_DECIMALS`] (18) decimal places and
//! are rounded **down** at the final step of every quantity-producing
//! computation, matching on-chain integer truncation at the 10^18 (WAD)
//! scale. Exchange rates and intermediate ratios are left unrounded.
//!
//! A `BigDecimal` cannot represent NaN or an infinity, so the non-finite
//! input contract is enforced at the conversion boundary: [`Decimal::parse`]
//! and [`Decimal::try_from_f64`] reject anything that is not a finite number.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, Zero};

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Denominator for basis-point percentages (10 000 = 100%).
pub const BASIS_POINTS: u32 = 10_000;

/// Decimal places carried by token quantities (the on-chain WAD scale).
pub const QTY_DECIMALS: i64 = 18;

/// An arbitrary-precision signed decimal.
///
/// Ordering and equality compare numeric value, independent of trailing
/// zeros. Arithmetic is exact for add, subtract, and multiply; division
/// carries 100 significant digits, comfortably above the 78 digits needed
/// to represent 256-bit on-chain integers.
///
/// # Examples
///
/// ```
/// use elastic_amm::domain::Rounding;
/// use elastic_amm::math::Decimal;
///
/// let a = Decimal::parse("10.5").expect("finite");
/// let b = Decimal::from(2u32);
/// let q = a.checked_div(&b).expect("non-zero divisor");
/// assert_eq!(q, Decimal::parse("5.25").expect("finite"));
/// assert_eq!(q.round_to(0, Rounding::Down), Decimal::from(5u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// The value `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    /// The value `1`.
    #[must_use]
    pub fn one() -> Self {
        Self(BigDecimal::one())
    }

    /// The on-chain fixed-point scale factor, `10^18`.
    #[must_use]
    pub fn wad() -> Self {
        Self(BigDecimal::from(1_000_000_000_000_000_000_u64))
    }

    /// The basis-point denominator, `10 000`, as a decimal.
    #[must_use]
    pub fn basis_points() -> Self {
        Self(BigDecimal::from(BASIS_POINTS))
    }

    /// Parses a decimal from its string representation.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Nan`] if the input does not parse as a finite
    /// number.
    pub fn parse(input: &str) -> Result<Self> {
        BigDecimal::from_str(input)
            .map(Self)
            .map_err(|_| AmmError::Nan)
    }

    /// Converts a binary float, rejecting non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Nan`] if `value` is NaN or infinite.
    pub fn try_from_f64(value: f64) -> Result<Self> {
        BigDecimal::try_from(value)
            .map(Self)
            .map_err(|_| AmmError::Nan)
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    /// Returns `true` if the value is strictly less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::zero()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the smaller of `self` and `other`.
    #[must_use]
    pub fn min(&self, other: &Self) -> Self {
        if self <= other {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// Division with an explicit zero-divisor check.
    ///
    /// Callers dividing by a *reserve* quantity are expected to pre-check
    /// the reserve and raise [`AmmError::InsufficientLiquidity`] themselves;
    /// this method reports the generic arithmetic failure.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        Ok(Self(&self.0 / &divisor.0))
    }

    /// Rounds to `decimal_places` fractional digits with the given mode.
    ///
    /// Note that [`Rounding::Down`] truncates towards zero, so negative
    /// values round towards zero as well (`-1.5 → -1`).
    #[must_use]
    pub fn round_to(&self, decimal_places: i64, rounding: Rounding) -> Self {
        let mode = match rounding {
            Rounding::Down => RoundingMode::Down,
            Rounding::Up => RoundingMode::Up,
            Rounding::HalfEven => RoundingMode::HalfEven,
        };
        Self(self.0.with_scale_round(decimal_places, mode))
    }

    /// The square root, carried to the default division precision.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Nan`] if the value is negative.
    pub fn sqrt(&self) -> Result<Self> {
        self.0.sqrt().map(Self).ok_or(AmmError::Nan)
    }

    /// Raises the value to a non-negative integer power.
    #[must_use]
    pub fn powi(&self, exponent: u32) -> Self {
        let mut result = BigDecimal::one();
        for _ in 0..exponent {
            result = &result * &self.0;
        }
        Self(result)
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: Self) -> Decimal {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Self) -> Decimal {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Self) -> Decimal {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal(-&self.0)
    }
}

impl FromStr for Decimal {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
