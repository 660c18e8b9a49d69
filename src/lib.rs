//! # Elastic AMM
//!
//! Off-chain computation core for an elastic automated market maker:
//! a pure, deterministic numeric library mirroring the pricing, liquidity
//! issuance, and decay-rebalancing math of the on-chain exchange contract,
//! so that clients can preview trades, minting, and redemptions before
//! committing a transaction.
//!
//! The exchange pairs a possibly elastic-supply (rebasing) **base** token
//! with a **quote** token on a constant-product curve defined by a virtual
//! reserve book — the *internal balances*. A rebase moves the external base
//! balance α away from the internal reserve α′; that divergence (*decay*)
//! is resolved by single-asset liquidity entries that are rewarded via the
//! gamma formula.
//!
//! # Quick Start
//!
//! ```rust
//! use elastic_amm::prelude::*;
//!
//! // Reserves as read from the chain.
//! let internal = InternalBalances::new(
//!     Decimal::from(10_000u32),
//!     Decimal::from(50_000u32),
//!     Decimal::from(500_000_000u32),
//! )?;
//!
//! // Quote 1 000 base tokens in, 30 bp fee.
//! let quote_out = calculate_quote_token_qty(
//!     &Decimal::from(1_000u32),
//!     &Decimal::one(),
//!     BasisPoints::new(30),
//!     &internal,
//! )?;
//! assert!(quote_out.is_positive());
//! # Ok::<(), AmmError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  wallets, routers, UIs
//! └──────┬───────┘
//!        │ reserves, supply, desired amounts (by value)
//!        ▼
//! ┌──────────────┐
//! │   Pricing     │  swap quoting · decay resolution · liquidity · redemption
//! └──────┬───────┘
//!        │ Decimal arithmetic, explicit rounding
//!        ▼
//! ┌──────────────┐
//! │ Domain + Math │  BasisPoints, InternalBalances, Rounding, Decimal
//! └──────────────┘
//! ```
//!
//! Every operation is pure and reentrant: no shared state, no I/O, no
//! logging. Concurrent invocations from independent callers do not
//! interact.
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`BasisPoints`](domain::BasisPoints), [`InternalBalances`](domain::InternalBalances), [`Rounding`](domain::Rounding), result records |
//! | [`math`] | [`Decimal`](math::Decimal) arbitrary-precision backend and scale constants |
//! | [`pricing`] | The quoting operations: swaps, decay, liquidity, redemption |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum with stable kinds |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod pricing;
