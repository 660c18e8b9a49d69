//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use elastic_amm::prelude::*;
//! ```
//!
//! This re-exports the domain types, the decimal backend, the error types,
//! and every pricing operation so that consumers don't need to import from
//! individual submodules.

// Re-export domain types
pub use crate::domain::{
    BasisPoints, InternalBalances, PairEntryResult, RedemptionResult, Rounding,
    SingleEntryResult,
};

// Re-export the arithmetic backend
pub use crate::math::{Decimal, BASIS_POINTS, QTY_DECIMALS};

// Re-export error types
pub use crate::error::{AmmError, Result};

// Re-export the pricing operations
pub use crate::pricing::{
    calculate_add_base_token_liquidity_quantities, calculate_add_liquidity_quantities,
    calculate_add_quote_token_liquidity_quantities, calculate_add_token_pair_liquidity_quantities,
    calculate_base_token_qty, calculate_exchange_rate, calculate_fees,
    calculate_input_amount_from_output_amount, calculate_liquidity_token_fees,
    calculate_liquidity_token_qty_for_double_asset_entry,
    calculate_liquidity_token_qty_for_single_asset_entry, calculate_lp_token_amount,
    calculate_output_amount_less_fees, calculate_price_impact, calculate_qty,
    calculate_qty_to_return_after_fees, calculate_quote_token_qty, calculate_share_of_pool,
    calculate_token_amounts_from_lp_tokens, is_sufficient_decay_present,
};
