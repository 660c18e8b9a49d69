//! Unified error types for the elastic AMM pricing core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every variant carries a stable symbolic identifier, exposed
//! through [`AmmError::kind`], so UI code can match on error kinds
//! programmatically without depending on display strings.
//!
//! # Categories
//!
//! | Category | Meaning | Caller action |
//! |----------|---------|---------------|
//! | Validation | malformed or out-of-domain input | fix the input |
//! | Market state | pool state cannot serve the request | re-read on-chain state |
//! | Below minimum | computed output under the declared floor | loosen the minimum or retry |
//!
//! No variant is recoverable inside the core: errors surface at the point
//! of detection without logging or fallback.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

// ---------------------------------------------------------------------------
// AmmError
// ---------------------------------------------------------------------------

/// Unified error enum for the pricing core.
///
/// Every fallible operation in the crate returns `Result<T, AmmError>`.
/// Use [`kind`](Self::kind) for stable programmatic matching and the
/// `Display` implementation for human-readable messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    // ----- Validation -------------------------------------------------------
    /// An input failed to parse as a finite number.
    #[error("value is not a finite number")]
    Nan,

    /// A quantity input was negative where a non-negative value is required.
    #[error("quantity must not be negative")]
    NegativeInput,

    /// Division by a zero value that does not represent a reserve.
    #[error("division by zero")]
    DivisionByZero,

    /// The token quantity to convert was not positive.
    #[error("token quantity must be greater than zero")]
    InsufficientQty,

    /// A swap-preview quantity input was not positive.
    #[error("swap quantity inputs must be greater than zero")]
    InsufficientTokenQty,

    /// First-ever liquidity was requested with a non-positive base quantity.
    #[error("desired base token quantity must be greater than zero")]
    InsufficientBaseQtyDesired,

    /// First-ever liquidity was requested with a non-positive quote quantity.
    #[error("desired quote token quantity must be greater than zero")]
    InsufficientQuoteQtyDesired,

    // ----- Market state -----------------------------------------------------
    /// A reserve value was zero where a non-zero reserve is required.
    ///
    /// Callers rely on this kind to render an empty-pool UI.
    #[error("insufficient liquidity in the pool")]
    InsufficientLiquidity,

    /// The decay-resolving minimum meets or exceeds the addressable decay.
    #[error("minimum exceeds the resolvable decay")]
    InsufficientDecay,

    /// The decay-closing contribution produces no opposite-side change.
    #[error("contribution produces no change in decay")]
    InsufficientChangeInDecay,

    /// No quote-token decay is present to resolve.
    #[error("no quote token decay present")]
    NoQuoteDecay,

    // ----- Below minimum ----------------------------------------------------
    /// The computed base token output is below the declared minimum.
    #[error("base token output below the declared minimum")]
    InsufficientBaseTokenQty,

    /// The computed quote token output is below the declared minimum.
    #[error("quote token output below the declared minimum")]
    InsufficientQuoteTokenQty,

    /// The accumulated base contribution is below the declared minimum.
    #[error("base token contribution below the declared minimum")]
    InsufficientBaseQty,

    /// The accumulated quote contribution is below the declared minimum.
    #[error("quote token contribution below the declared minimum")]
    InsufficientQuoteQty,
}

impl AmmError {
    /// Returns the stable symbolic identifier for this error kind.
    ///
    /// Identifiers never change across releases and are suitable for
    /// programmatic matching (no localization is applied).
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nan => "NAN_ERROR",
            Self::NegativeInput => "NEGATIVE_INPUT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InsufficientQty => "INSUFFICIENT_QTY",
            Self::InsufficientTokenQty => "INSUFFICIENT_TOKEN_QTY",
            Self::InsufficientBaseQtyDesired => "INSUFFICIENT_BASE_QTY_DESIRED",
            Self::InsufficientQuoteQtyDesired => "INSUFFICIENT_QUOTE_QTY_DESIRED",
            Self::InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
            Self::InsufficientDecay => "INSUFFICIENT_DECAY",
            Self::InsufficientChangeInDecay => "INSUFFICIENT_CHANGE_IN_DECAY",
            Self::NoQuoteDecay => "NO_QUOTE_DECAY",
            Self::InsufficientBaseTokenQty => "INSUFFICIENT_BASE_TOKEN_QTY",
            Self::InsufficientQuoteTokenQty => "INSUFFICIENT_QUOTE_TOKEN_QTY",
            Self::InsufficientBaseQty => "INSUFFICIENT_BASE_QTY",
            Self::InsufficientQuoteQty => "INSUFFICIENT_QUOTE_QTY",
        }
    }

    /// Returns `true` if this error indicates malformed caller input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Nan
                | Self::NegativeInput
                | Self::DivisionByZero
                | Self::InsufficientQty
                | Self::InsufficientTokenQty
                | Self::InsufficientBaseQtyDesired
                | Self::InsufficientQuoteQtyDesired
        )
    }

    /// Returns `true` if this error indicates a pool state that cannot
    /// serve the request; the caller should re-read on-chain state.
    #[must_use]
    pub const fn is_market_state(&self) -> bool {
        matches!(
            self,
            Self::InsufficientLiquidity
                | Self::InsufficientDecay
                | Self::InsufficientChangeInDecay
                | Self::NoQuoteDecay
        )
    }

    /// Returns `true` if this error indicates a computed output below a
    /// caller-declared minimum.
    #[must_use]
    pub const fn is_below_minimum(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBaseTokenQty
                | Self::InsufficientQuoteTokenQty
                | Self::InsufficientBaseQty
                | Self::InsufficientQuoteQty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- kind stability ------------------------------------------------------

    #[test]
    fn kinds_are_stable_identifiers() {
        assert_eq!(AmmError::Nan.kind(), "NAN_ERROR");
        assert_eq!(AmmError::NegativeInput.kind(), "NEGATIVE_INPUT");
        assert_eq!(AmmError::InsufficientQty.kind(), "INSUFFICIENT_QTY");
        assert_eq!(
            AmmError::InsufficientLiquidity.kind(),
            "INSUFFICIENT_LIQUIDITY"
        );
        assert_eq!(
            AmmError::InsufficientBaseTokenQty.kind(),
            "INSUFFICIENT_BASE_TOKEN_QTY"
        );
        assert_eq!(
            AmmError::InsufficientQuoteTokenQty.kind(),
            "INSUFFICIENT_QUOTE_TOKEN_QTY"
        );
        assert_eq!(AmmError::InsufficientBaseQty.kind(), "INSUFFICIENT_BASE_QTY");
        assert_eq!(
            AmmError::InsufficientQuoteQty.kind(),
            "INSUFFICIENT_QUOTE_QTY"
        );
        assert_eq!(
            AmmError::InsufficientBaseQtyDesired.kind(),
            "INSUFFICIENT_BASE_QTY_DESIRED"
        );
        assert_eq!(
            AmmError::InsufficientQuoteQtyDesired.kind(),
            "INSUFFICIENT_QUOTE_QTY_DESIRED"
        );
        assert_eq!(AmmError::InsufficientDecay.kind(), "INSUFFICIENT_DECAY");
        assert_eq!(
            AmmError::InsufficientChangeInDecay.kind(),
            "INSUFFICIENT_CHANGE_IN_DECAY"
        );
        assert_eq!(AmmError::NoQuoteDecay.kind(), "NO_QUOTE_DECAY");
        assert_eq!(
            AmmError::InsufficientTokenQty.kind(),
            "INSUFFICIENT_TOKEN_QTY"
        );
        assert_eq!(AmmError::DivisionByZero.kind(), "DIVISION_BY_ZERO");
    }

    #[test]
    fn kinds_are_unique() {
        let all = [
            AmmError::Nan,
            AmmError::NegativeInput,
            AmmError::DivisionByZero,
            AmmError::InsufficientQty,
            AmmError::InsufficientTokenQty,
            AmmError::InsufficientBaseQtyDesired,
            AmmError::InsufficientQuoteQtyDesired,
            AmmError::InsufficientLiquidity,
            AmmError::InsufficientDecay,
            AmmError::InsufficientChangeInDecay,
            AmmError::NoQuoteDecay,
            AmmError::InsufficientBaseTokenQty,
            AmmError::InsufficientQuoteTokenQty,
            AmmError::InsufficientBaseQty,
            AmmError::InsufficientQuoteQty,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.kind(), b.kind(), "duplicate kind for {a:?} and {b:?}");
            }
        }
    }

    // -- category predicates -------------------------------------------------

    #[test]
    fn categories_are_disjoint_and_exhaustive() {
        let all = [
            AmmError::Nan,
            AmmError::NegativeInput,
            AmmError::DivisionByZero,
            AmmError::InsufficientQty,
            AmmError::InsufficientTokenQty,
            AmmError::InsufficientBaseQtyDesired,
            AmmError::InsufficientQuoteQtyDesired,
            AmmError::InsufficientLiquidity,
            AmmError::InsufficientDecay,
            AmmError::InsufficientChangeInDecay,
            AmmError::NoQuoteDecay,
            AmmError::InsufficientBaseTokenQty,
            AmmError::InsufficientQuoteTokenQty,
            AmmError::InsufficientBaseQty,
            AmmError::InsufficientQuoteQty,
        ];
        for err in all {
            let hits = usize::from(err.is_validation())
                + usize::from(err.is_market_state())
                + usize::from(err.is_below_minimum());
            assert_eq!(hits, 1, "{err:?} must belong to exactly one category");
        }
    }

    #[test]
    fn validation_examples() {
        assert!(AmmError::Nan.is_validation());
        assert!(AmmError::NegativeInput.is_validation());
        assert!(!AmmError::InsufficientLiquidity.is_validation());
    }

    #[test]
    fn market_state_examples() {
        assert!(AmmError::InsufficientLiquidity.is_market_state());
        assert!(AmmError::InsufficientDecay.is_market_state());
        assert!(!AmmError::InsufficientBaseQty.is_market_state());
    }

    #[test]
    fn below_minimum_examples() {
        assert!(AmmError::InsufficientBaseTokenQty.is_below_minimum());
        assert!(AmmError::InsufficientQuoteQty.is_below_minimum());
        assert!(!AmmError::NoQuoteDecay.is_below_minimum());
    }

    // -- Display -------------------------------------------------------------

    #[test]
    fn display_is_readable() {
        let msg = format!("{}", AmmError::InsufficientLiquidity);
        assert!(msg.contains("liquidity"), "unexpected message: {msg}");
    }

    // -- Result alias --------------------------------------------------------

    #[test]
    fn result_alias() {
        let ok: Result<u32> = Ok(7);
        assert_eq!(ok, Ok(7));
        let err: Result<u32> = Err(AmmError::Nan);
        assert!(err.is_err());
    }
}
