//! Shared input guards for the pricing operations.
//!
//! Negative values and empty reserves are rejected before any formula runs,
//! so the arithmetic layer only ever reports the generic
//! [`DivisionByZero`](crate::error::AmmError::DivisionByZero) for divisors
//! that do not represent reserves.

use crate::error::{AmmError, Result};
use crate::math::Decimal;

/// Rejects negative quantities with [`AmmError::NegativeInput`].
pub(crate) fn ensure_non_negative(value: &Decimal) -> Result<()> {
    if value.is_negative() {
        return Err(AmmError::NegativeInput);
    }
    Ok(())
}

/// Validates a reserve quantity: negative reserves are malformed input,
/// zero reserves mean the pool cannot serve the request.
///
/// # Errors
///
/// [`AmmError::NegativeInput`] for negative values,
/// [`AmmError::InsufficientLiquidity`] for zero.
pub(crate) fn ensure_reserve(reserve: &Decimal) -> Result<()> {
    ensure_non_negative(reserve)?;
    if reserve.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero_and_positive() {
        assert_eq!(ensure_non_negative(&Decimal::zero()), Ok(()));
        assert_eq!(ensure_non_negative(&Decimal::from(5u32)), Ok(()));
    }

    #[test]
    fn non_negative_rejects_negative() {
        assert_eq!(
            ensure_non_negative(&-&Decimal::one()),
            Err(AmmError::NegativeInput)
        );
    }

    #[test]
    fn reserve_accepts_positive() {
        assert_eq!(ensure_reserve(&Decimal::one()), Ok(()));
    }

    #[test]
    fn reserve_rejects_zero() {
        assert_eq!(
            ensure_reserve(&Decimal::zero()),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn reserve_rejects_negative_as_malformed() {
        assert_eq!(
            ensure_reserve(&-&Decimal::one()),
            Err(AmmError::NegativeInput)
        );
    }
}
