//! The exchange's virtual reserve book.

use core::fmt;

use crate::error::{AmmError, Result};
use crate::math::Decimal;

/// The exchange's internal view of its reserves.
///
/// The internal pair (base, quote) defines the price curve. After a rebase
/// event on the elastic base token the *external* balance diverges from the
/// internal one; that divergence is the decay the single-asset entry
/// operations resolve.
///
/// `k_last` is the product of the internal reserves observed at the last
/// fee checkpoint; it is zero only when the pool was never initialized.
///
/// # Examples
///
/// ```
/// use elastic_amm::domain::InternalBalances;
/// use elastic_amm::math::Decimal;
///
/// let internal = InternalBalances::new(
///     Decimal::from(1_000u32),
///     Decimal::from(5_000u32),
///     Decimal::from(5_000_000u32),
/// )
/// .expect("non-negative reserves");
///
/// // Ω, the base-per-quote pricing ratio.
/// let omega = internal.omega().expect("non-zero quote reserve");
/// assert_eq!(omega, Decimal::parse("0.2").expect("finite"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InternalBalances {
    base_token_reserve_qty: Decimal,
    quote_token_reserve_qty: Decimal,
    k_last: Decimal,
}

impl InternalBalances {
    /// Creates a new record, validating that all quantities are non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NegativeInput`] if any quantity is negative.
    pub fn new(
        base_token_reserve_qty: Decimal,
        quote_token_reserve_qty: Decimal,
        k_last: Decimal,
    ) -> Result<Self> {
        if base_token_reserve_qty.is_negative()
            || quote_token_reserve_qty.is_negative()
            || k_last.is_negative()
        {
            return Err(AmmError::NegativeInput);
        }
        Ok(Self {
            base_token_reserve_qty,
            quote_token_reserve_qty,
            k_last,
        })
    }

    /// Returns the virtual base token reserve (α′).
    #[must_use]
    pub fn base_token_reserve_qty(&self) -> &Decimal {
        &self.base_token_reserve_qty
    }

    /// Returns the virtual quote token reserve (β′).
    #[must_use]
    pub fn quote_token_reserve_qty(&self) -> &Decimal {
        &self.quote_token_reserve_qty
    }

    /// Returns the reserve product recorded at the last fee checkpoint.
    #[must_use]
    pub fn k_last(&self) -> &Decimal {
        &self.k_last
    }

    /// Returns the current reserve product α′·β′.
    #[must_use]
    pub fn k(&self) -> Decimal {
        &self.base_token_reserve_qty * &self.quote_token_reserve_qty
    }

    /// Returns Ω, the internal base-to-quote pricing ratio (α′ / β′).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if the quote reserve is
    /// zero.
    pub fn omega(&self) -> Result<Decimal> {
        if self.quote_token_reserve_qty.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        self.base_token_reserve_qty
            .checked_div(&self.quote_token_reserve_qty)
    }

    /// Returns the inverse pricing ratio β′ / α′.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if the base reserve is
    /// zero.
    pub fn quote_per_base(&self) -> Result<Decimal> {
        if self.base_token_reserve_qty.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        self.quote_token_reserve_qty
            .checked_div(&self.base_token_reserve_qty)
    }

    /// Returns `true` if both internal reserves are strictly positive.
    #[must_use]
    pub fn has_liquidity(&self) -> bool {
        self.base_token_reserve_qty.is_positive() && self.quote_token_reserve_qty.is_positive()
    }

    /// Returns a copy with the given deltas credited to each reserve.
    /// `k_last` is left untouched; it only moves at fee checkpoints.
    #[must_use]
    pub(crate) fn crediting(&self, base_delta: &Decimal, quote_delta: &Decimal) -> Self {
        Self {
            base_token_reserve_qty: &self.base_token_reserve_qty + base_delta,
            quote_token_reserve_qty: &self.quote_token_reserve_qty + quote_delta,
            k_last: self.k_last.clone(),
        }
    }
}

impl fmt::Display for InternalBalances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InternalBalances(base={}, quote={}, kLast={})",
            self.base_token_reserve_qty, self.quote_token_reserve_qty, self.k_last
        )
    }
}
