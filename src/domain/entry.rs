//! Result records returned by the liquidity-entry and redemption operations.

use core::fmt;

use super::InternalBalances;
use crate::math::Decimal;

/// Outcome of a single-asset (decay-resolving) liquidity entry.
///
/// Carries the token quantity actually consumed from the supplier, the LP
/// tokens issued for it, and the internal-balance record as it stands after
/// the entry. The quote-side entry reprices the curve, so its record
/// differs from the input; the base-side entry leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleEntryResult {
    token_qty: Decimal,
    liquidity_token_qty: Decimal,
    internal_balances: InternalBalances,
}

impl SingleEntryResult {
    pub(crate) fn new(
        token_qty: Decimal,
        liquidity_token_qty: Decimal,
        internal_balances: InternalBalances,
    ) -> Self {
        Self {
            token_qty,
            liquidity_token_qty,
            internal_balances,
        }
    }

    /// Returns the quantity of the supplied token consumed by the entry.
    #[must_use]
    pub fn token_qty(&self) -> &Decimal {
        &self.token_qty
    }

    /// Returns the LP tokens issued to the supplier.
    #[must_use]
    pub fn liquidity_token_qty(&self) -> &Decimal {
        &self.liquidity_token_qty
    }

    /// Returns the internal balances as they stand after the entry.
    #[must_use]
    pub fn internal_balances(&self) -> &InternalBalances {
        &self.internal_balances
    }
}

impl fmt::Display for SingleEntryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SingleEntryResult(token={}, lp={})",
            self.token_qty, self.liquidity_token_qty
        )
    }
}

/// Outcome of a pair (or orchestrated) liquidity entry.
///
/// `liquidity_token_fee_qty` is the LP quantity minted to the DAO fee
/// address out of `k` growth since the last checkpoint; it dilutes existing
/// holders rather than being charged to the entrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairEntryResult {
    base_token_qty: Decimal,
    quote_token_qty: Decimal,
    liquidity_token_qty: Decimal,
    liquidity_token_fee_qty: Decimal,
    internal_balances: InternalBalances,
}

impl PairEntryResult {
    pub(crate) fn new(
        base_token_qty: Decimal,
        quote_token_qty: Decimal,
        liquidity_token_qty: Decimal,
        liquidity_token_fee_qty: Decimal,
        internal_balances: InternalBalances,
    ) -> Self {
        Self {
            base_token_qty,
            quote_token_qty,
            liquidity_token_qty,
            liquidity_token_fee_qty,
            internal_balances,
        }
    }

    /// Returns the base token quantity consumed by the entry.
    #[must_use]
    pub fn base_token_qty(&self) -> &Decimal {
        &self.base_token_qty
    }

    /// Returns the quote token quantity consumed by the entry.
    #[must_use]
    pub fn quote_token_qty(&self) -> &Decimal {
        &self.quote_token_qty
    }

    /// Returns the LP tokens issued to the entrant.
    #[must_use]
    pub fn liquidity_token_qty(&self) -> &Decimal {
        &self.liquidity_token_qty
    }

    /// Returns the LP tokens minted to the DAO fee address.
    #[must_use]
    pub fn liquidity_token_fee_qty(&self) -> &Decimal {
        &self.liquidity_token_fee_qty
    }

    /// Returns the internal balances as they stand after the entry.
    #[must_use]
    pub fn internal_balances(&self) -> &InternalBalances {
        &self.internal_balances
    }
}

impl fmt::Display for PairEntryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PairEntryResult(base={}, quote={}, lp={}, lpFee={})",
            self.base_token_qty,
            self.quote_token_qty,
            self.liquidity_token_qty,
            self.liquidity_token_fee_qty
        )
    }
}

/// Slippage-floored minimum amounts returned by a redemption preview.
///
/// The caller forwards these as the `baseMin` / `quoteMin` arguments of the
/// on-chain remove-liquidity transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionResult {
    base_token_qty: Decimal,
    quote_token_qty: Decimal,
}

impl RedemptionResult {
    pub(crate) fn new(base_token_qty: Decimal, quote_token_qty: Decimal) -> Self {
        Self {
            base_token_qty,
            quote_token_qty,
        }
    }

    /// Returns the minimum base token amount to accept.
    #[must_use]
    pub fn base_token_qty(&self) -> &Decimal {
        &self.base_token_qty
    }

    /// Returns the minimum quote token amount to accept.
    #[must_use]
    pub fn quote_token_qty(&self) -> &Decimal {
        &self.quote_token_qty
    }
}

impl fmt::Display for RedemptionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RedemptionResult(base={}, quote={})",
            self.base_token_qty, self.quote_token_qty
        )
    }
}
