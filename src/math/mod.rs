//! Arbitrary-precision arithmetic for the pricing core.
//!
//! This module provides the [`Decimal`] backend used by every formula in the
//! crate, along with the two scale constants the on-chain contracts fix:
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | [`BASIS_POINTS`] | 10 000 | denominator for fees and percentages |
//! | [`QTY_DECIMALS`] | 18 | decimal places of a token quantity (WAD scale) |

mod decimal;

pub use decimal::{Decimal, BASIS_POINTS, QTY_DECIMALS};
