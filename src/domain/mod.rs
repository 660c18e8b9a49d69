//! Fundamental domain value types used throughout the pricing core.
//!
//! This module contains the value types that model the exchange domain:
//! basis points, rounding modes, the internal reserve book, and the result
//! records returned by liquidity entries and redemptions. All types use
//! newtypes or records with validated constructors to enforce invariants.

mod basis_points;
mod entry;
mod internal_balances;
mod rounding;

pub use basis_points::BasisPoints;
pub use entry::{PairEntryResult, RedemptionResult, SingleEntryResult};
pub use internal_balances::InternalBalances;
pub use rounding::Rounding;
