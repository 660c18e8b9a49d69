//! Swap pricing: output-given-input, input-given-output, fees, exchange
//! rate, and price impact.
//!
//! The pricing curve is constant-product (`x · y = k`) with the fee charged
//! to the input side:
//!
//! 1. `inQtyLessFee = inQty × (10 000 − feeBP)`
//! 2. `out = inQtyLessFee × outReserve / (inReserve × 10 000 + inQtyLessFee)`
//!
//! Outputs are truncated to whole token units at the final step because
//! on-chain reserves are integer wei; intermediate products are rounded
//! down at 18 decimal places.
//!
//! When the external base reserve has shrunk below the internal one
//! (a rebase-down), [`calculate_base_token_qty`] rescales the curve by the
//! internal pricing ratio Ω so the quote-token price of base is preserved.

use super::guardrails::{ensure_non_negative, ensure_reserve};
use crate::domain::{BasisPoints, InternalBalances, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{Decimal, QTY_DECIMALS};

/// Computes the fee charged on a swap: `swapAmount × feeBP / 10 000`.
///
/// # Errors
///
/// Returns [`AmmError::NegativeInput`] if `swap_amount` is negative.
///
/// # Examples
///
/// ```
/// use elastic_amm::domain::BasisPoints;
/// use elastic_amm::math::Decimal;
/// use elastic_amm::pricing::calculate_fees;
///
/// let fee = calculate_fees(&Decimal::from(10_000u32), BasisPoints::new(30))
///     .expect("non-negative amount");
/// assert_eq!(fee, Decimal::from(30u32));
/// ```
pub fn calculate_fees(swap_amount: &Decimal, fee_basis_points: BasisPoints) -> Result<Decimal> {
    ensure_non_negative(swap_amount)?;
    let scaled = swap_amount * &fee_basis_points.as_decimal();
    Ok(scaled
        .checked_div(&Decimal::basis_points())?
        .round_to(QTY_DECIMALS, Rounding::Down))
}

/// Computes the proportional counterpart quantity at the current reserve
/// ratio: `tokenAQty × reserveB / reserveA`.
///
/// # Errors
///
/// - [`AmmError::InsufficientQty`] if `token_a_qty` is not positive.
/// - [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for
///   negative / zero reserves.
pub fn calculate_qty(
    token_a_qty: &Decimal,
    reserve_a: &Decimal,
    reserve_b: &Decimal,
) -> Result<Decimal> {
    if !token_a_qty.is_positive() {
        return Err(AmmError::InsufficientQty);
    }
    ensure_reserve(reserve_a)?;
    ensure_reserve(reserve_b)?;
    Ok((token_a_qty * reserve_b)
        .checked_div(reserve_a)?
        .round_to(QTY_DECIMALS, Rounding::Down))
}

/// Computes the swap output after the input-side fee.
///
/// ```text
/// inQtyLessFee = inQty × (10 000 − feeBP)          (ROUND_DOWN 18dp)
/// numerator    = inQtyLessFee × outReserve          (ROUND_DOWN 18dp)
/// denominator  = inReserve × 10 000 + inQtyLessFee
/// out          = numerator / denominator            (ROUND_DOWN 0dp)
/// ```
///
/// # Errors
///
/// - [`AmmError::NegativeInput`] if any input is negative.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn calculate_qty_to_return_after_fees(
    token_a_qty: &Decimal,
    token_a_reserve_qty: &Decimal,
    token_b_reserve_qty: &Decimal,
    fee_basis_points: BasisPoints,
) -> Result<Decimal> {
    ensure_non_negative(token_a_qty)?;
    ensure_reserve(token_a_reserve_qty)?;
    ensure_reserve(token_b_reserve_qty)?;

    let difference_in_bp = Decimal::from(fee_basis_points.complement());
    let token_a_qty_less_fee =
        (token_a_qty * &difference_in_bp).round_to(QTY_DECIMALS, Rounding::Down);
    let numerator =
        (&token_a_qty_less_fee * token_b_reserve_qty).round_to(QTY_DECIMALS, Rounding::Down);
    let denominator =
        &(token_a_reserve_qty * &Decimal::basis_points()) + &token_a_qty_less_fee;

    Ok(numerator
        .checked_div(&denominator)?
        .round_to(0, Rounding::Down))
}

/// Computes the base tokens received for a quote-token input, rescaling the
/// curve when quote decay is present.
///
/// During a rebase-down the external base reserve shrinks below the
/// internal one; pricing against the unmodified curve would over-price the
/// output, so the virtual quote reserve is shrunk to `externalBase / Ω`
/// first.
///
/// # Errors
///
/// - [`AmmError::InsufficientTokenQty`] if `quote_token_qty` or
///   `base_token_qty_min` is not positive.
/// - [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for
///   malformed or empty reserves.
/// - [`AmmError::InsufficientBaseTokenQty`] if the computed output does not
///   exceed `base_token_qty_min`.
pub fn calculate_base_token_qty(
    quote_token_qty: &Decimal,
    base_token_qty_min: &Decimal,
    base_token_reserve_qty: &Decimal,
    fee_basis_points: BasisPoints,
    internal_balances: &InternalBalances,
) -> Result<Decimal> {
    if !quote_token_qty.is_positive() || !base_token_qty_min.is_positive() {
        return Err(AmmError::InsufficientTokenQty);
    }
    ensure_reserve(base_token_reserve_qty)?;
    ensure_reserve(internal_balances.base_token_reserve_qty())?;
    ensure_reserve(internal_balances.quote_token_reserve_qty())?;

    let base_token_qty =
        if base_token_reserve_qty < internal_balances.base_token_reserve_qty() {
            let omega = internal_balances.omega()?;
            let implied_quote_reserve = base_token_reserve_qty.checked_div(&omega)?;
            calculate_qty_to_return_after_fees(
                quote_token_qty,
                &implied_quote_reserve,
                base_token_reserve_qty,
                fee_basis_points,
            )?
        } else {
            calculate_qty_to_return_after_fees(
                quote_token_qty,
                internal_balances.quote_token_reserve_qty(),
                internal_balances.base_token_reserve_qty(),
                fee_basis_points,
            )?
        };

    if &base_token_qty <= base_token_qty_min {
        return Err(AmmError::InsufficientBaseTokenQty);
    }
    Ok(base_token_qty)
}

/// Computes the quote tokens received for a base-token input, priced
/// against the internal balances.
///
/// # Errors
///
/// - [`AmmError::InsufficientTokenQty`] if neither `base_token_qty` nor
///   `quote_token_qty_min` is positive.
/// - [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for
///   malformed or empty internal reserves.
/// - [`AmmError::InsufficientQuoteTokenQty`] if the computed output does
///   not exceed `quote_token_qty_min`.
pub fn calculate_quote_token_qty(
    base_token_qty: &Decimal,
    quote_token_qty_min: &Decimal,
    fee_basis_points: BasisPoints,
    internal_balances: &InternalBalances,
) -> Result<Decimal> {
    if !base_token_qty.is_positive() && !quote_token_qty_min.is_positive() {
        return Err(AmmError::InsufficientTokenQty);
    }
    ensure_reserve(internal_balances.base_token_reserve_qty())?;
    ensure_reserve(internal_balances.quote_token_reserve_qty())?;

    let quote_token_qty = calculate_qty_to_return_after_fees(
        base_token_qty,
        internal_balances.base_token_reserve_qty(),
        internal_balances.quote_token_reserve_qty(),
        fee_basis_points,
    )?;

    if &quote_token_qty <= quote_token_qty_min {
        return Err(AmmError::InsufficientQuoteTokenQty);
    }
    Ok(quote_token_qty)
}

/// Computes the exchange rate `inputReserve / outputReserve`, unrounded.
///
/// # Errors
///
/// [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for
/// negative / zero reserves.
///
/// # Examples
///
/// ```
/// use elastic_amm::math::Decimal;
/// use elastic_amm::pricing::calculate_exchange_rate;
///
/// let rate = calculate_exchange_rate(&Decimal::from(50_000u32), &Decimal::from(10_000u32))
///     .expect("non-zero reserves");
/// assert_eq!(rate, Decimal::from(5u32));
/// ```
pub fn calculate_exchange_rate(
    input_token_reserve_qty: &Decimal,
    output_token_reserve_qty: &Decimal,
) -> Result<Decimal> {
    ensure_reserve(input_token_reserve_qty)?;
    ensure_reserve(output_token_reserve_qty)?;
    input_token_reserve_qty.checked_div(output_token_reserve_qty)
}

/// Computes the after-fee swap output reduced by the slippage tolerance:
/// `out × (1 − slippage / 100)`.
///
/// # Errors
///
/// Propagates [`calculate_qty_to_return_after_fees`] errors;
/// [`AmmError::NegativeInput`] if `slippage_percent` is negative.
pub fn calculate_output_amount_less_fees(
    input_token_amount: &Decimal,
    input_token_reserve_qty: &Decimal,
    output_token_reserve_qty: &Decimal,
    slippage_percent: &Decimal,
    fee_basis_points: BasisPoints,
) -> Result<Decimal> {
    ensure_non_negative(slippage_percent)?;
    let output_amount = calculate_qty_to_return_after_fees(
        input_token_amount,
        input_token_reserve_qty,
        output_token_reserve_qty,
        fee_basis_points,
    )?;
    let retained =
        &Decimal::one() - &slippage_percent.checked_div(&Decimal::from(100u32))?;
    Ok((&output_amount * &retained).round_to(QTY_DECIMALS, Rounding::Down))
}

/// Solves the after-fee output formula for the required input, given a
/// desired output and a slippage tolerance.
///
/// ```text
/// numerator   = outQty × inReserve × 10 000
/// slipTerm    = outReserve × slippage / 100
/// denominator = (outQty + slipTerm − outReserve) × (10 000 − feeBP)
/// inQty       = |numerator / denominator|
/// ```
///
/// The absolute value is taken because the reserve term is negative in the
/// common case `outQty < outReserve`.
///
/// # Errors
///
/// - [`AmmError::NegativeInput`] for negative amounts or slippage.
/// - [`AmmError::InsufficientLiquidity`] for zero reserves.
/// - [`AmmError::DivisionByZero`] if the denominator vanishes (the desired
///   output plus the slippage term exactly equals the output reserve, or
///   the fee is 100%).
pub fn calculate_input_amount_from_output_amount(
    output_token_amount: &Decimal,
    input_token_reserve_qty: &Decimal,
    output_token_reserve_qty: &Decimal,
    slippage_percent: &Decimal,
    fee_basis_points: BasisPoints,
) -> Result<Decimal> {
    ensure_non_negative(output_token_amount)?;
    ensure_non_negative(slippage_percent)?;
    ensure_reserve(input_token_reserve_qty)?;
    ensure_reserve(output_token_reserve_qty)?;

    let numerator =
        &(output_token_amount * input_token_reserve_qty) * &Decimal::basis_points();
    let slippage_multiplier = (output_token_reserve_qty * slippage_percent)
        .checked_div(&Decimal::from(100u32))?;
    let reserve_term =
        &(output_token_amount + &slippage_multiplier) - output_token_reserve_qty;
    let denominator = &reserve_term * &Decimal::from(fee_basis_points.complement());

    Ok(numerator
        .checked_div(&denominator)?
        .abs()
        .round_to(QTY_DECIMALS, Rounding::Down))
}

/// Computes the price impact of a trade as a percentage.
///
/// The nominal output at the current exchange rate is compared to the
/// realized after-fee, after-slippage output:
/// `impact = 100 − (realized / nominal × 100)`.
///
/// # Errors
///
/// - [`AmmError::InsufficientQty`] if `input_token_amount` is not positive.
/// - [`AmmError::NegativeInput`] / [`AmmError::InsufficientLiquidity`] for
///   malformed or empty reserves.
pub fn calculate_price_impact(
    input_token_amount: &Decimal,
    input_token_reserve_qty: &Decimal,
    output_token_reserve_qty: &Decimal,
    slippage_percent: &Decimal,
    fee_basis_points: BasisPoints,
) -> Result<Decimal> {
    if !input_token_amount.is_positive() {
        return Err(AmmError::InsufficientQty);
    }
    ensure_reserve(input_token_reserve_qty)?;
    ensure_reserve(output_token_reserve_qty)?;
    ensure_non_negative(slippage_percent)?;

    let initial_rate =
        calculate_exchange_rate(input_token_reserve_qty, output_token_reserve_qty)?;
    let output_less_fees = calculate_output_amount_less_fees(
        input_token_amount,
        input_token_reserve_qty,
        output_token_reserve_qty,
        slippage_percent,
        fee_basis_points,
    )?;
    let initial_output = input_token_amount.checked_div(&initial_rate)?;
    let hundred = Decimal::from(100u32);
    let realized_ratio = &output_less_fees.checked_div(&initial_output)? * &hundred;
    Ok(&hundred - &realized_ratio)
}
