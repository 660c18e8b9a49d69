//! Decay detection and single-asset (decay-resolving) liquidity entries.
//!
//! A rebase event on the elastic base token moves the external base balance
//! α away from the internal reserve α′ that defines the price curve:
//!
//! - **base decay** (α > α′): a rebase-up left surplus base tokens that are
//!   not yet priced in; new *quote* tokens absorb them.
//! - **quote decay** (α < α′): a rebase-down left the curve claiming more
//!   base than exists; new *base* tokens close the gap.
//!
//! A supplier who closes decay from one side is compensated with LP tokens
//! via the gamma formula:
//!
//! ```text
//! γ   = (Δa / A′ / 2) × (ΔbChange / bDecay)
//! ΔLP = supply × γ / (1 − γ)                  (ROUND_DOWN 0dp)
//! ```
//!
//! The `/2` gives the single-sided supplier half-weight LP credit per unit
//! of decay closed, relative to a paired contribution.

use super::guardrails::{ensure_non_negative, ensure_reserve};
use crate::domain::{InternalBalances, Rounding, SingleEntryResult};
use crate::error::{AmmError, Result};
use crate::math::{Decimal, QTY_DECIMALS};

/// Returns `true` if the divergence between the external and internal base
/// reserves, re-expressed in quote-token units at the internal ratio Ω,
/// strictly exceeds one unit.
///
/// Below that threshold decay is ignored and liquidity entries proceed as
/// plain pair entries.
///
/// # Errors
///
/// - [`AmmError::NegativeInput`] if `base_token_reserve_qty` is negative.
/// - [`AmmError::InsufficientLiquidity`] if either internal reserve is zero.
///
/// # Examples
///
/// ```
/// use elastic_amm::domain::InternalBalances;
/// use elastic_amm::math::Decimal;
/// use elastic_amm::pricing::is_sufficient_decay_present;
///
/// let internal = InternalBalances::new(
///     Decimal::from(1_000u32),
///     Decimal::from(5_000u32),
///     Decimal::zero(),
/// )
/// .expect("valid balances");
///
/// // |950 − 1000| / (1000 / 5000) = 250 quote units of divergence.
/// let present = is_sufficient_decay_present(&Decimal::from(950u32), &internal)
///     .expect("valid reserves");
/// assert!(present);
/// ```
pub fn is_sufficient_decay_present(
    base_token_reserve_qty: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<bool> {
    ensure_non_negative(base_token_reserve_qty)?;
    ensure_reserve(internal_balances.base_token_reserve_qty())?;
    ensure_reserve(internal_balances.quote_token_reserve_qty())?;

    let divergence =
        (base_token_reserve_qty - internal_balances.base_token_reserve_qty()).abs();
    let omega = internal_balances.omega()?;
    let divergence_in_quote_units = divergence.checked_div(&omega)?;
    Ok(divergence_in_quote_units > Decimal::one())
}

/// Computes the base tokens consumed and LP tokens issued when resolving
/// *quote* decay (α < α′) by supplying base tokens.
///
/// The addressable gap is `maxBase = α′ − α`. The contribution is clamped
/// to it, and the supplier earns LP per the gamma formula against the quote
/// decay being closed. The internal balances are returned unchanged: adding
/// base restores the external balance towards the curve without repricing
/// it.
///
/// # Errors
///
/// - [`AmmError::NegativeInput`] for negative inputs.
/// - [`AmmError::InsufficientDecay`] if `base_token_qty_min` meets or
///   exceeds the addressable gap.
/// - [`AmmError::InsufficientChangeInDecay`] if the clamped contribution
///   closes no quote decay.
/// - [`AmmError::NoQuoteDecay`] if no quote decay is present at all.
pub fn calculate_add_base_token_liquidity_quantities(
    base_token_qty_desired: &Decimal,
    base_token_qty_min: &Decimal,
    base_token_reserve_qty: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<SingleEntryResult> {
    ensure_non_negative(base_token_qty_desired)?;
    ensure_non_negative(base_token_qty_min)?;
    ensure_non_negative(base_token_reserve_qty)?;
    ensure_non_negative(total_supply_of_liquidity_tokens)?;

    let max_base_token_qty =
        internal_balances.base_token_reserve_qty() - base_token_reserve_qty;
    if base_token_qty_min >= &max_base_token_qty {
        return Err(AmmError::InsufficientDecay);
    }
    let base_token_qty = base_token_qty_desired.min(&max_base_token_qty);

    let quote_per_base = internal_balances.quote_per_base()?;
    let quote_token_qty_decay_change =
        (&base_token_qty * &quote_per_base).round_to(QTY_DECIMALS, Rounding::Down);
    if !quote_token_qty_decay_change.is_positive() {
        return Err(AmmError::InsufficientChangeInDecay);
    }

    let quote_token_decay =
        (&max_base_token_qty * &quote_per_base).round_to(QTY_DECIMALS, Rounding::Down);
    if !quote_token_decay.is_positive() {
        return Err(AmmError::NoQuoteDecay);
    }

    let liquidity_token_qty = calculate_liquidity_token_qty_for_single_asset_entry(
        total_supply_of_liquidity_tokens,
        &base_token_qty,
        internal_balances.base_token_reserve_qty(),
        &quote_token_qty_decay_change,
        &quote_token_decay,
    )?;

    Ok(SingleEntryResult::new(
        base_token_qty,
        liquidity_token_qty,
        internal_balances.clone(),
    ))
}

/// Computes the quote tokens consumed and LP tokens issued when resolving
/// *base* decay (α > α′) by supplying quote tokens.
///
/// The surplus `baseDecay = α − α′` is addressable by up to
/// `maxQuote = baseDecay / Ω` quote tokens. The returned internal balances
/// carry the repriced curve (`α′ += ΔαChange`, `β′ += quote`), so a
/// subsequent pair entry composes against the post-decay state.
///
/// # Errors
///
/// - [`AmmError::NegativeInput`] for negative inputs.
/// - [`AmmError::InsufficientLiquidity`] if either internal reserve is zero.
/// - [`AmmError::InsufficientDecay`] if `quote_token_qty_min` meets or
///   exceeds the addressable quote quantity.
/// - [`AmmError::InsufficientChangeInDecay`] if the clamped contribution
///   closes no base decay.
pub fn calculate_add_quote_token_liquidity_quantities(
    quote_token_qty_desired: &Decimal,
    quote_token_qty_min: &Decimal,
    base_token_reserve_qty: &Decimal,
    total_supply_of_liquidity_tokens: &Decimal,
    internal_balances: &InternalBalances,
) -> Result<SingleEntryResult> {
    ensure_non_negative(quote_token_qty_desired)?;
    ensure_non_negative(quote_token_qty_min)?;
    ensure_non_negative(base_token_reserve_qty)?;
    ensure_non_negative(total_supply_of_liquidity_tokens)?;
    ensure_reserve(internal_balances.base_token_reserve_qty())?;
    ensure_reserve(internal_balances.quote_token_reserve_qty())?;

    let base_token_decay =
        base_token_reserve_qty - internal_balances.base_token_reserve_qty();
    let omega = internal_balances.omega()?;

    let max_quote_token_qty = base_token_decay.checked_div(&omega)?;
    if quote_token_qty_min >= &max_quote_token_qty {
        return Err(AmmError::InsufficientDecay);
    }
    let quote_token_qty = quote_token_qty_desired.min(&max_quote_token_qty);

    let base_token_qty_decay_change =
        (&quote_token_qty * &omega).round_to(QTY_DECIMALS, Rounding::Down);
    if !base_token_qty_decay_change.is_positive() {
        return Err(AmmError::InsufficientChangeInDecay);
    }

    let updated_balances =
        internal_balances.crediting(&base_token_qty_decay_change, &quote_token_qty);

    let liquidity_token_qty = calculate_liquidity_token_qty_for_single_asset_entry(
        total_supply_of_liquidity_tokens,
        &quote_token_qty,
        updated_balances.quote_token_reserve_qty(),
        &base_token_qty_decay_change,
        &base_token_decay,
    )?;

    Ok(SingleEntryResult::new(
        quote_token_qty,
        liquidity_token_qty,
        updated_balances,
    ))
}

/// Computes the LP tokens issued for a single-asset entry via the gamma
/// formula.
///
/// `token_qty` is the decay-closing contribution, `internal_token_reserve_qty`
/// the internal reserve on the contributed side, `decay_change` the
/// opposite-side decay closed by the contribution, and `decay` the total
/// opposite-side decay. Gamma is truncated at 18 decimal places before the
/// issuance division, and the result at 0.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if the internal reserve is zero.
/// - [`AmmError::DivisionByZero`] if `decay` is zero or gamma reaches 1.
pub fn calculate_liquidity_token_qty_for_single_asset_entry(
    total_supply_of_liquidity_tokens: &Decimal,
    token_qty: &Decimal,
    internal_token_reserve_qty: &Decimal,
    decay_change: &Decimal,
    decay: &Decimal,
) -> Result<Decimal> {
    ensure_reserve(internal_token_reserve_qty)?;

    let half_share = token_qty
        .checked_div(internal_token_reserve_qty)?
        .checked_div(&Decimal::from(2u32))?;
    let closed_fraction = decay_change.checked_div(decay)?;
    let gamma = (&half_share * &closed_fraction).round_to(QTY_DECIMALS, Rounding::Down);

    let numerator = total_supply_of_liquidity_tokens * &gamma;
    let denominator = &Decimal::one() - &gamma;
    Ok(numerator
        .checked_div(&denominator)?
        .round_to(0, Rounding::Down))
}
