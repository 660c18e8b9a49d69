//! The pricing operations: swap quoting, decay resolution, liquidity
//! issuance, and redemption.
//!
//! Every function here is pure: reserves, supply, and fee levels arrive as
//! arguments (conventionally read from the exchange's `internalBalances()`
//! view and `balanceOf` calls) and results are returned by value. Nothing
//! is cached, mutated, or logged.
//!
//! | Concern | Functions |
//! |---------|-----------|
//! | Swap quoting | [`calculate_fees`], [`calculate_qty`], [`calculate_qty_to_return_after_fees`], [`calculate_base_token_qty`], [`calculate_quote_token_qty`], [`calculate_exchange_rate`], [`calculate_output_amount_less_fees`], [`calculate_input_amount_from_output_amount`], [`calculate_price_impact`] |
//! | Decay | [`is_sufficient_decay_present`], [`calculate_add_base_token_liquidity_quantities`], [`calculate_add_quote_token_liquidity_quantities`], [`calculate_liquidity_token_qty_for_single_asset_entry`] |
//! | Liquidity | [`calculate_add_token_pair_liquidity_quantities`], [`calculate_liquidity_token_qty_for_double_asset_entry`], [`calculate_add_liquidity_quantities`], [`calculate_liquidity_token_fees`], [`calculate_token_amounts_from_lp_tokens`], [`calculate_lp_token_amount`], [`calculate_share_of_pool`] |

mod decay;
mod guardrails;
mod liquidity;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use decay::{
    calculate_add_base_token_liquidity_quantities,
    calculate_add_quote_token_liquidity_quantities,
    calculate_liquidity_token_qty_for_single_asset_entry, is_sufficient_decay_present,
};
pub use liquidity::{
    calculate_add_liquidity_quantities, calculate_add_token_pair_liquidity_quantities,
    calculate_liquidity_token_fees, calculate_liquidity_token_qty_for_double_asset_entry,
    calculate_lp_token_amount, calculate_share_of_pool, calculate_token_amounts_from_lp_tokens,
};
pub use swap::{
    calculate_base_token_qty, calculate_exchange_rate, calculate_fees,
    calculate_input_amount_from_output_amount, calculate_output_amount_less_fees,
    calculate_price_impact, calculate_qty, calculate_qty_to_return_after_fees,
    calculate_quote_token_qty,
};
