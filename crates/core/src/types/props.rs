//! Property-based tests for the money arithmetic engine.
//!
//! - Scale invariant: every result carries the currency's scale
//! - Exactness: plus/minus agree with decimal arithmetic
//! - Ordering: compare_to is antisymmetric and agrees with equality

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Money;
use crate::currency::CurrencyUnit;
use crate::error::MoneyError;

/// Strategy to generate a currency with its scale (0 to 3 places).
fn currency() -> impl Strategy<Value = CurrencyUnit> {
    prop::sample::select(vec!["JPY", "GBP", "KWD"]).prop_map(|code| CurrencyUnit::of(code).unwrap())
}

/// Strategy to generate signed minor-unit counts.
fn minor_units() -> impl Strategy<Value = i64> {
    -10_000_000_000i64..10_000_000_000i64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amounts, plus and minus are exact and keep the scale.
    #[test]
    fn prop_plus_minus_exact(currency in currency(), a in minor_units(), b in minor_units()) {
        let left = Money::of_minor(&currency, a).unwrap();
        let right = Money::of_minor(&currency, b).unwrap();

        let sum = left.plus(&right).unwrap();
        let difference = left.minus(&right).unwrap();

        prop_assert_eq!(sum.amount(), left.amount() + right.amount());
        prop_assert_eq!(difference.amount(), left.amount() - right.amount());
        prop_assert_eq!(sum.scale(), currency.decimal_places());
        prop_assert_eq!(difference.scale(), currency.decimal_places());
        prop_assert_eq!(sum.amount_minor(), i128::from(a) + i128::from(b));
    }

    /// *For any* amount, negation is an involution that keeps the scale.
    #[test]
    fn prop_negated_involution(currency in currency(), a in minor_units()) {
        let value = Money::of_minor(&currency, a).unwrap();
        prop_assert_eq!(value.negated().negated(), value.clone());
        prop_assert_eq!(value.negated().scale(), value.scale());
        prop_assert_eq!(value.plus(&value.negated()).unwrap(), Money::zero(&currency));
    }

    /// *For any* pair, compare_to is antisymmetric and zero iff equal.
    #[test]
    fn prop_compare_to_total_order(currency in currency(), a in minor_units(), b in minor_units()) {
        let left = Money::of_minor(&currency, a).unwrap();
        let right = Money::of_minor(&currency, b).unwrap();

        let forward = left.compare_to(&right).unwrap();
        let backward = right.compare_to(&left).unwrap();
        prop_assert_eq!(forward, backward.reverse());
        prop_assert_eq!(forward.is_eq(), left == right);
        prop_assert_eq!(forward, a.cmp(&b));
    }

    /// *For any* amount with more places than the currency allows,
    /// construction fails instead of rounding.
    #[test]
    fn prop_excess_scale_rejected(currency in currency(), mantissa in 1i64..1_000_000i64) {
        let amount = Decimal::new(mantissa, currency.decimal_places() + 1);
        let rejected = matches!(
            Money::of(&currency, amount),
            Err(MoneyError::ScaleMismatch { .. })
        );
        prop_assert!(rejected);
    }
}
