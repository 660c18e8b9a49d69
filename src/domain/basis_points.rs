//! Basis-point representation for fees and percentages.

use core::fmt;

use crate::math::{Decimal, BASIS_POINTS};

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values are technically representable, but values above 10 000
/// are nonsensical as percentages. Use
/// [`is_valid_percent`](Self::is_valid_percent) to check.
///
/// # Examples
///
/// ```
/// use elastic_amm::domain::BasisPoints;
///
/// let fee = BasisPoints::new(30);
/// assert_eq!(fee.get(), 30);
/// assert_eq!(fee.complement(), 9_970);
/// assert!(fee.is_valid_percent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BASIS_POINTS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range
    /// (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BASIS_POINTS
    }

    /// Returns `10 000 − bp`, the fraction of an amount that survives the
    /// fee, saturating at zero for values above 100%.
    #[must_use]
    pub const fn complement(&self) -> u32 {
        BASIS_POINTS.saturating_sub(self.0)
    }

    /// Converts to an exact [`Decimal`] count of basis points.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
