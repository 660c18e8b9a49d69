//! Pair liquidity entries, the add-liquidity orchestrator, and redemption.
//!
//! The orchestrator is a linear decision tree, not a cycle: at most one
//! decay branch executes, followed by at most one pair entry.
//!
//! ```text
//! supply == 0 ─────────────────────────────▶ INITIAL (√(base × quote))
//! supply > 0
//!   ├─ mint DAO fee, add it to supply
//!   ├─ no decay ────────────────────────────▶ PAIR-ONLY
//!   ├─ α > α′ ──▶ BASE-DECAY (quote entry) ─┐
//!   └─ α < α′ ──▶ QUOTE-DECAY (base entry) ─┤
//!                                           └▶ PAIR-RESIDUAL if both sides
//!                                              still have unmet desire
//! ```
//!
//! Every quantity accumulated across branches is validated against the
//! caller's minimums at the end.

use super::decay::{
    calculate_add_base_token_liquidity_quantities,
    calculate_add_quote_token_liquidity_quantities, is_sufficient_decay_present,
};
use super::guardrails::{ensure_non_negative, ensure_reserve};
use crate::domain::{InternalBalances, PairEntryResult, RedemptionResult, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{Decimal, QTY_DECIMALS};

/// Computes the LP tokens issued for a pair entry into an established pool:
/// `ΔLP = quoteContributed × supply / externalQuote`.
///
/// # Errors
///
/// [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for a
/// negative / zero external quote reserve.
pub fn calculate_liquidity_token_qty_for_double_asset_entry(
    total_supply_of_liquidity_tokens: &Decimal,
    quote_token_qty: &Decimal,
    quote_token_reserve_qty: &Decimal,
) -> Result<Decimal> {
    ensure_non_negative(quote_token_qty)?;
    ensure_non_negative(total_supply_of_liquidity_tokens)?;
    ensure_reserve(quote_token_reserve_qty)?;
    Ok((quote_token_qty * total_supply_of_liquidity_tokens)
        .checked_div(quote_token_reserve_qty)?
        .round_to(QTY_DECIMALS, Rounding::Down))
}

/// Computes a ratio-preserving pair entry.
///
/// For an established pool the pair is fitted to the internal ratio: the
/// quote required by `base_desired` is used if it fits inside
/// `quote_desired`, otherwise the base required by `quote_desired` is used.
/// For the first-ever entry (`supply == 0`) both desired amounts are taken
/// as-is and `ΔLP = √(base × quote)`.
///
/// The returned record carries the internal balances credited with the
/// contributed pair.
///
/// # Errors
///
/// - [`AmmError::InsufficientBaseQtyDesired`] /
///   [`AmmError::InsufficientQuoteQtyDesired`] on a first-ever entry with a
///   non-positive desired amount.
/// - [`AmmError::InsufficientQuoteQty`] / [`AmmError::InsufficientBaseQty`]
///   if the fitted pair falls below the matching minimum.
/// - [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for
///   malformed or empty reserves.
pub fn calculate_add_token_pair_liquidity_quantities(
    base_token_qty_desired: &Decimal,
    quote_token_qty_desired: &Decimal,
    base_token_qty_min: &Decimal,
    quote_token_qty_min: &Decimal,
    quote_token_reserve_qty: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<PairEntryResult> {
    ensure_non_negative(base_token_qty_min)?;
    ensure_non_negative(quote_token_qty_min)?;
    ensure_non_negative(total_supply_of_liquidity_tokens)?;

    if total_supply_of_liquidity_tokens.is_zero() {
        return first_liquidity_entry(
            base_token_qty_desired,
            quote_token_qty_desired,
            internal_balances,
        );
    }

    ensure_non_negative(base_token_qty_desired)?;
    ensure_non_negative(quote_token_qty_desired)?;
    ensure_reserve(internal_balances.base_token_reserve_qty())?;
    ensure_reserve(internal_balances.quote_token_reserve_qty())?;

    let required_quote_token_qty = (base_token_qty_desired
        * internal_balances.quote_token_reserve_qty())
    .checked_div(internal_balances.base_token_reserve_qty())?
    .round_to(QTY_DECIMALS, Rounding::Down);

    let (base_token_qty, quote_token_qty) =
        if &required_quote_token_qty <= quote_token_qty_desired {
            if &required_quote_token_qty < quote_token_qty_min {
                return Err(AmmError::InsufficientQuoteQty);
            }
            (base_token_qty_desired.clone(), required_quote_token_qty)
        } else {
            let required_base_token_qty = (quote_token_qty_desired
                * internal_balances.base_token_reserve_qty())
            .checked_div(internal_balances.quote_token_reserve_qty())?
            .round_to(QTY_DECIMALS, Rounding::Down);
            if &required_base_token_qty < base_token_qty_min {
                return Err(AmmError::InsufficientBaseQty);
            }
            (required_base_token_qty, quote_token_qty_desired.clone())
        };

    let liquidity_token_qty = calculate_liquidity_token_qty_for_double_asset_entry(
        total_supply_of_liquidity_tokens,
        &quote_token_qty,
        quote_token_reserve_qty,
    )?;

    let updated_balances = internal_balances.crediting(&base_token_qty, &quote_token_qty);

    Ok(PairEntryResult::new(
        base_token_qty,
        quote_token_qty,
        liquidity_token_qty,
        Decimal::zero(),
        updated_balances,
    ))
}

/// First-ever entry: both reserves are taken as-is and the issued LP is the
/// geometric mean of the contributions.
fn first_liquidity_entry(
    base_token_qty_desired: &Decimal,
    quote_token_qty_desired: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<PairEntryResult> {
    if !base_token_qty_desired.is_positive() {
        return Err(AmmError::InsufficientBaseQtyDesired);
    }
    if !quote_token_qty_desired.is_positive() {
        return Err(AmmError::InsufficientQuoteQtyDesired);
    }

    let liquidity_token_qty = (base_token_qty_desired * quote_token_qty_desired)
        .sqrt()?
        .round_to(QTY_DECIMALS, Rounding::Down);

    let updated_balances =
        internal_balances.crediting(base_token_qty_desired, quote_token_qty_desired);

    Ok(PairEntryResult::new(
        base_token_qty_desired.clone(),
        quote_token_qty_desired.clone(),
        liquidity_token_qty,
        Decimal::zero(),
        updated_balances,
    ))
}

/// Computes the LP tokens minted to the DAO out of `k` growth since the
/// last fee checkpoint.
///
/// ```text
/// rootK     = √(α′ × β′)
/// rootKLast = √(kLast)
/// fee       = supply × (rootK − rootKLast) / (rootK × 5 + rootKLast)
/// ```
///
/// The constant 5 in the denominator matches the deployed contract's fee
/// split.
///
/// # Errors
///
/// Returns [`AmmError::NegativeInput`] if the supply is negative.
pub fn calculate_liquidity_token_fees(
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<Decimal> {
    ensure_non_negative(total_supply_of_liquidity_tokens)?;

    let root_k = internal_balances.k().sqrt()?;
    let root_k_last = internal_balances.k_last().sqrt()?;
    if root_k <= root_k_last {
        return Ok(Decimal::zero());
    }

    let numerator = total_supply_of_liquidity_tokens * &(&root_k - &root_k_last);
    let denominator = &(&root_k * &Decimal::from(5u32)) + &root_k_last;
    Ok(numerator
        .checked_div(&denominator)?
        .round_to(QTY_DECIMALS, Rounding::Down))
}

/// The add-liquidity orchestrator: composes decay resolution and pair
/// entry, mints the DAO fee, and validates the caller's minimums over the
/// accumulated totals.
///
/// See the module docs for the decision tree. The returned internal
/// balances reflect every branch that executed.
///
/// # Errors
///
/// - Propagates the decay-entry and pair-entry errors of the executed
///   branches.
/// - [`AmmError::InsufficientBaseQty`] / [`AmmError::InsufficientQuoteQty`]
///   if the accumulated contributions fall below the caller's minimums.
#[allow(clippy::too_many_arguments)]
pub fn calculate_add_liquidity_quantities(
    base_token_qty_desired: &Decimal,
    quote_token_qty_desired: &Decimal,
    base_token_qty_min: &Decimal,
    quote_token_qty_min: &Decimal,
    base_token_reserve_qty: &Decimal,
    quote_token_reserve_qty: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<PairEntryResult> {
    ensure_non_negative(base_token_qty_desired)?;
    ensure_non_negative(quote_token_qty_desired)?;
    ensure_non_negative(base_token_qty_min)?;
    ensure_non_negative(quote_token_qty_min)?;
    ensure_non_negative(base_token_reserve_qty)?;
    ensure_non_negative(quote_token_reserve_qty)?;
    ensure_non_negative(total_supply_of_liquidity_tokens)?;

    if total_supply_of_liquidity_tokens.is_zero() {
        return calculate_add_token_pair_liquidity_quantities(
            base_token_qty_desired,
            quote_token_qty_desired,
            base_token_qty_min,
            quote_token_qty_min,
            quote_token_reserve_qty,
            total_supply_of_liquidity_tokens,
            internal_balances,
        );
    }

    let liquidity_token_fee_qty =
        calculate_liquidity_token_fees(total_supply_of_liquidity_tokens, internal_balances)?;
    // The fee mint dilutes supply before any issuance math runs.
    let mut total_supply = total_supply_of_liquidity_tokens + &liquidity_token_fee_qty;

    if !is_sufficient_decay_present(base_token_reserve_qty, internal_balances)? {
        let pair = calculate_add_token_pair_liquidity_quantities(
            base_token_qty_desired,
            quote_token_qty_desired,
            base_token_qty_min,
            quote_token_qty_min,
            quote_token_reserve_qty,
            &total_supply,
            internal_balances,
        )?;
        return Ok(PairEntryResult::new(
            pair.base_token_qty().clone(),
            pair.quote_token_qty().clone(),
            pair.liquidity_token_qty().clone(),
            liquidity_token_fee_qty,
            pair.internal_balances().clone(),
        ));
    }

    let mut base_token_qty = Decimal::zero();
    let mut quote_token_qty = Decimal::zero();
    let mut liquidity_token_qty = Decimal::zero();
    let mut current_balances = internal_balances.clone();

    if base_token_reserve_qty > internal_balances.base_token_reserve_qty() {
        // Rebase-up surplus: absorb it with quote tokens.
        let entry = calculate_add_quote_token_liquidity_quantities(
            quote_token_qty_desired,
            &Decimal::zero(),
            base_token_reserve_qty,
            &total_supply,
            &current_balances,
        )?;
        quote_token_qty = entry.token_qty().clone();
        liquidity_token_qty = entry.liquidity_token_qty().clone();
        current_balances = entry.internal_balances().clone();
    } else {
        // Rebase-down shortfall: close it with base tokens.
        let entry = calculate_add_base_token_liquidity_quantities(
            base_token_qty_desired,
            &Decimal::zero(),
            base_token_reserve_qty,
            &total_supply,
            &current_balances,
        )?;
        base_token_qty = entry.token_qty().clone();
        liquidity_token_qty = entry.liquidity_token_qty().clone();
        current_balances = entry.internal_balances().clone();
    }

    if &quote_token_qty < quote_token_qty_desired && &base_token_qty < base_token_qty_desired {
        total_supply = &total_supply + &liquidity_token_qty;
        let residual_quote_reserve = quote_token_reserve_qty + &quote_token_qty;
        let residual = calculate_add_token_pair_liquidity_quantities(
            &(base_token_qty_desired - &base_token_qty),
            &(quote_token_qty_desired - &quote_token_qty),
            &Decimal::zero(),
            &Decimal::zero(),
            &residual_quote_reserve,
            &total_supply,
            &current_balances,
        )?;
        base_token_qty = &base_token_qty + residual.base_token_qty();
        quote_token_qty = &quote_token_qty + residual.quote_token_qty();
        liquidity_token_qty = &liquidity_token_qty + residual.liquidity_token_qty();
        current_balances = residual.internal_balances().clone();
    }

    if &base_token_qty < base_token_qty_min {
        return Err(AmmError::InsufficientBaseQty);
    }
    if &quote_token_qty < quote_token_qty_min {
        return Err(AmmError::InsufficientQuoteQty);
    }

    Ok(PairEntryResult::new(
        base_token_qty,
        quote_token_qty,
        liquidity_token_qty,
        liquidity_token_fee_qty,
        current_balances,
    ))
}

/// Computes the slippage-floored pro-rata share of both reserves for a
/// redemption of `lp_token_qty_to_redeem`.
///
/// ```text
/// ratio    = lpToRedeem / supply
/// slipMult = 1 − slippage / 100
/// min      = reserve × ratio × slipMult     (ROUND_DOWN 18dp)
/// ```
///
/// # Errors
///
/// - [`AmmError::NegativeInput`] for negative inputs.
/// - [`AmmError::InsufficientLiquidity`] if the LP supply is zero.
pub fn calculate_token_amounts_from_lp_tokens(
    lp_token_qty_to_redeem: &Decimal,
    slippage_percent: &Decimal,
    base_token_reserve_qty: &Decimal,
    quote_token_reserve_qty: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
) -> Result<RedemptionResult> {
    ensure_non_negative(lp_token_qty_to_redeem)?;
    ensure_non_negative(slippage_percent)?;
    ensure_non_negative(base_token_reserve_qty)?;
    ensure_non_negative(quote_token_reserve_qty)?;
    ensure_reserve(total_supply_of_liquidity_tokens)?;

    let lp_ratio = lp_token_qty_to_redeem.checked_div(total_supply_of_liquidity_tokens)?;
    let slippage_multiplier =
        &Decimal::one() - &slippage_percent.checked_div(&Decimal::from(100u32))?;

    let base_token_qty = (&(base_token_reserve_qty * &lp_ratio) * &slippage_multiplier)
        .round_to(QTY_DECIMALS, Rounding::Down);
    let quote_token_qty = (&(quote_token_reserve_qty * &lp_ratio) * &slippage_multiplier)
        .round_to(QTY_DECIMALS, Rounding::Down);

    Ok(RedemptionResult::new(base_token_qty, quote_token_qty))
}

/// Previews the LP tokens a deposit would mint, through the full
/// orchestration (DAO fee, decay resolution, pair entry).
///
/// `_slippage_percent` is accepted for signature parity with
/// [`calculate_share_of_pool`] but does not constrain the preview: in decay
/// states the consumed amounts legitimately diverge from the desired ones,
/// and minimums belong to the transaction, not the preview.
///
/// # Errors
///
/// Propagates [`calculate_add_liquidity_quantities`] errors.
#[allow(clippy::too_many_arguments)]
pub fn calculate_lp_token_amount(
    base_token_amount: &Decimal,
    quote_token_amount: &Decimal,
    base_token_reserve_qty: &Decimal,
    quote_token_reserve_qty: &Decimal,
    _slippage_percent: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<Decimal> {
    let entry = calculate_add_liquidity_quantities(
        base_token_amount,
        quote_token_amount,
        &Decimal::zero(),
        &Decimal::zero(),
        base_token_reserve_qty,
        quote_token_reserve_qty,
        total_supply_of_liquidity_tokens,
        internal_balances,
    )?;
    Ok(entry.liquidity_token_qty().clone())
}

/// Computes the percentage of the pool a deposit would own after minting:
/// `ΔLP / (supply + fee + ΔLP) × 100`. An empty pool yields 100.
///
/// # Errors
///
/// Propagates [`calculate_add_liquidity_quantities`] errors.
#[allow(clippy::too_many_arguments)]
pub fn calculate_share_of_pool(
    base_token_amount: &Decimal,
    quote_token_amount: &Decimal,
    base_token_reserve_qty: &Decimal,
    quote_token_reserve_qty: &Decimal,
    _slippage_percent: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<Decimal> {
    if total_supply_of_liquidity_tokens.is_zero() {
        return Ok(Decimal::from(100u32));
    }

    let entry = calculate_add_liquidity_quantities(
        base_token_amount,
        quote_token_amount,
        &Decimal::zero(),
        &Decimal::zero(),
        base_token_reserve_qty,
        quote_token_reserve_qty,
        total_supply_of_liquidity_tokens,
        internal_balances,
    )?;

    let supply_after = &(total_supply_of_liquidity_tokens + entry.liquidity_token_fee_qty())
        + entry.liquidity_token_qty();
    let share = entry.liquidity_token_qty().checked_div(&supply_after)?;
    Ok(&share * &Decimal::from(100u32))
}
