//! Property-based tests using `proptest` for pricing invariants.
//!
//! Covers the core numeric properties:
//!
//! 1. **Swap output bounds** — `0 ≤ out ≤ outReserve` for positive inputs.
//! 2. **Fee growth** — the reserve product never shrinks across a swap.
//! 3. **Exchange-rate symmetry** — `rate(a, b) × rate(b, a) ≈ 1`.
//! 4. **Decay detection determinism** — repeated calls agree.
//! 5. **Pair-entry dilution** — `ΔLP / (supply + ΔLP) ≈ quote / (extQuote + quote)`.
//! 6. **First liquidity** — issued LP is the geometric mean of the deposit.
//! 7. **Gamma monotonicity** — closing more decay never earns fewer LP.
//! 8. **Quote inversion** — input-from-output round-trips the forward
//!    formula at zero slippage, within truncation slack.

use proptest::prelude::*;

use crate::domain::{BasisPoints, InternalBalances, Rounding};
use crate::math::{Decimal, QTY_DECIMALS};
use crate::pricing::{
    calculate_add_base_token_liquidity_quantities, calculate_add_token_pair_liquidity_quantities,
    calculate_exchange_rate, calculate_input_amount_from_output_amount,
    calculate_liquidity_token_qty_for_double_asset_entry, calculate_qty_to_return_after_fees,
    is_sufficient_decay_present,
};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn dec(v: u64) -> Decimal {
    Decimal::from(v)
}

fn internal(base: u64, quote: u64) -> InternalBalances {
    let Ok(b) = InternalBalances::new(dec(base), dec(quote), Decimal::zero()) else {
        panic!("valid balances");
    };
    b
}

proptest! {
    // -- 1. Swap output bounds ----------------------------------------------

    #[test]
    fn swap_output_is_bounded_by_reserve(
        in_qty in 1u64..1_000_000,
        in_reserve in 1u64..1_000_000_000,
        out_reserve in 1u64..1_000_000_000,
        fee_bp in 0u32..1_000,
    ) {
        let Ok(out) = calculate_qty_to_return_after_fees(
            &dec(in_qty),
            &dec(in_reserve),
            &dec(out_reserve),
            BasisPoints::new(fee_bp),
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(!out.is_negative());
        prop_assert!(out <= dec(out_reserve));
    }

    // -- 2. Fee growth --------------------------------------------------------

    #[test]
    fn reserve_product_never_shrinks(
        in_qty in 1u64..1_000_000,
        in_reserve in 1u64..1_000_000_000,
        out_reserve in 1u64..1_000_000_000,
        fee_bp in 0u32..1_000,
    ) {
        let Ok(out) = calculate_qty_to_return_after_fees(
            &dec(in_qty),
            &dec(in_reserve),
            &dec(out_reserve),
            BasisPoints::new(fee_bp),
        ) else {
            panic!("expected Ok");
        };
        let k_before = &dec(in_reserve) * &dec(out_reserve);
        let k_after =
            &(&dec(in_reserve) + &dec(in_qty)) * &(&dec(out_reserve) - &out);
        prop_assert!(k_after >= k_before);
    }

    // -- 3. Exchange-rate symmetry -------------------------------------------

    #[test]
    fn exchange_rate_symmetry(
        reserve_a in 1u64..1_000_000_000_000,
        reserve_b in 1u64..1_000_000_000_000,
    ) {
        let Ok(ab) = calculate_exchange_rate(&dec(reserve_a), &dec(reserve_b)) else {
            panic!("expected Ok");
        };
        let Ok(ba) = calculate_exchange_rate(&dec(reserve_b), &dec(reserve_a)) else {
            panic!("expected Ok");
        };
        let product = &ab * &ba;
        let Ok(tolerance) = Decimal::parse("1e-18") else {
            panic!("expected Ok");
        };
        prop_assert!((&product - &Decimal::one()).abs() < tolerance);
    }

    // -- 4. Decay detection determinism --------------------------------------

    #[test]
    fn decay_detection_is_deterministic(
        external_base in 0u64..2_000_000,
        internal_base in 1u64..1_000_000,
        internal_quote in 1u64..1_000_000,
    ) {
        let balances = internal(internal_base, internal_quote);
        let Ok(first) = is_sufficient_decay_present(&dec(external_base), &balances) else {
            panic!("expected Ok");
        };
        let Ok(second) = is_sufficient_decay_present(&dec(external_base), &balances) else {
            panic!("expected Ok");
        };
        prop_assert_eq!(first, second);
    }

    // -- 5. Pair-entry dilution ----------------------------------------------

    #[test]
    fn pair_entry_lp_matches_quote_share(
        quote_qty in 1u64..1_000_000,
        quote_reserve in 1u64..1_000_000_000,
        supply in 1u64..1_000_000_000,
    ) {
        let Ok(minted) = calculate_liquidity_token_qty_for_double_asset_entry(
            &dec(supply),
            &dec(quote_qty),
            &dec(quote_reserve),
        ) else {
            panic!("expected Ok");
        };
        let Ok(lp_share) = minted.checked_div(&(&dec(supply) + &minted)) else {
            panic!("expected Ok");
        };
        let Ok(quote_share) =
            dec(quote_qty).checked_div(&(&dec(quote_reserve) + &dec(quote_qty)))
        else {
            panic!("expected Ok");
        };
        let Ok(tolerance) = Decimal::parse("1e-9") else {
            panic!("expected Ok");
        };
        prop_assert!((&lp_share - &quote_share).abs() < tolerance);
    }

    // -- 6. First liquidity ---------------------------------------------------

    #[test]
    fn first_liquidity_is_geometric_mean(
        base in 1u64..1_000_000,
        quote in 1u64..1_000_000,
    ) {
        let balances = internal(1, 1);
        let Ok(result) = calculate_add_token_pair_liquidity_quantities(
            &dec(base),
            &dec(quote),
            &Decimal::zero(),
            &Decimal::zero(),
            &Decimal::zero(),
            &Decimal::zero(),
            &balances,
        ) else {
            panic!("expected Ok");
        };
        let minted = result.liquidity_token_qty();
        let product = &dec(base) * &dec(quote);
        // minted = √(base × quote) truncated at 18dp:
        // minted² ≤ product < (minted + 1e-18)²
        let Ok(ulp) = Decimal::parse("1e-18") else {
            panic!("expected Ok");
        };
        let upper = &*minted + &ulp;
        prop_assert!(&(minted * minted) <= &product);
        prop_assert!(&(&upper * &upper) > &product);
    }

    // -- 7. Gamma monotonicity ------------------------------------------------

    #[test]
    fn gamma_lp_monotonic_in_decay_closed(
        internal_base in 100u64..1_000_000,
        internal_quote in 100u64..1_000_000,
        supply in 1_000u64..1_000_000_000,
        gap_pct in 2u64..50,
        hi_pct in 2u64..=100,
        lo_pct in 1u64..=100,
    ) {
        let gap = (internal_base * gap_pct / 100).max(2);
        let external_base = internal_base - gap;
        let balances = internal(internal_base, internal_quote);

        let larger = (gap * hi_pct / 100).max(2).min(gap);
        let smaller = (larger * lo_pct / 100).max(1);

        let Ok(small_entry) = calculate_add_base_token_liquidity_quantities(
            &dec(smaller),
            &Decimal::zero(),
            &dec(external_base),
            &dec(supply),
            &balances,
        ) else {
            panic!("expected Ok");
        };
        let Ok(large_entry) = calculate_add_base_token_liquidity_quantities(
            &dec(larger),
            &Decimal::zero(),
            &dec(external_base),
            &dec(supply),
            &balances,
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(
            large_entry.liquidity_token_qty() >= small_entry.liquidity_token_qty()
        );
    }

    // -- 8. Quote inversion ---------------------------------------------------

    #[test]
    fn input_from_output_round_trips(
        in_qty in 10_000u64..100_000,
        in_reserve in 10_000_000u64..100_000_000,
        out_reserve in 10_000_000u64..100_000_000,
        fee_bp in 0u32..1_000,
    ) {
        let fee = BasisPoints::new(fee_bp);
        let Ok(out) = calculate_qty_to_return_after_fees(
            &dec(in_qty),
            &dec(in_reserve),
            &dec(out_reserve),
            fee,
        ) else {
            panic!("expected Ok");
        };
        let Ok(recovered) = calculate_input_amount_from_output_amount(
            &out,
            &dec(in_reserve),
            &dec(out_reserve),
            &Decimal::zero(),
            fee,
        ) else {
            panic!("expected Ok");
        };
        // The forward formula truncates its output to whole units; the
        // inversion recovers the input up to that slack scaled by the
        // marginal rate, well under 20 units in these ranges.
        let drift = (&recovered - &dec(in_qty)).abs();
        prop_assert!(drift <= dec(20), "drift {} too large", drift);
    }
}

// ---------------------------------------------------------------------------
// Deterministic companions to the properties above
// ---------------------------------------------------------------------------

#[cfg(test)]
mod fixed_cases {
    use super::*;

    #[test]
    fn swap_output_rounds_to_whole_units() {
        let Ok(out) = calculate_qty_to_return_after_fees(
            &dec(1_000),
            &dec(10_000),
            &dec(50_000),
            BasisPoints::new(30),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out, out.round_to(0, Rounding::Down));
        assert_eq!(out, out.round_to(QTY_DECIMALS, Rounding::Down));
    }
}
