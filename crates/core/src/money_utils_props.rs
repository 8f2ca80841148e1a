//! Property-based tests for the null-tolerant money operations.
//!
//! - Absent operands are identities (add) or propagate (max/min/subtract)
//! - Extrema always return one of their inputs, ties favour the first
//! - Currency mismatches only fail when both operands are present
//! - Canonical text round-trips through parse

use proptest::prelude::*;

use super::MoneyUtils;
use crate::currency::CurrencyUnit;
use crate::error::MoneyError;
use crate::types::Money;

/// Strategy to generate a currency from a mix of scales (0, 2 and 3 places).
fn currency() -> impl Strategy<Value = CurrencyUnit> {
    prop::sample::select(vec!["GBP", "EUR", "JPY", "BHD", "USD"])
        .prop_map(|code| CurrencyUnit::of(code).unwrap())
}

/// Strategy to generate signed minor-unit counts (-10,000,000.00 to 10,000,000.00 in GBP).
fn minor_units() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

fn money_in(currency: &CurrencyUnit, minor: i64) -> Money {
    Money::of_minor(currency, minor).unwrap()
}

/// Strategy to generate two values sharing one currency.
fn same_currency_pair() -> impl Strategy<Value = (Money, Money)> {
    (currency(), minor_units(), minor_units())
        .prop_map(|(currency, a, b)| (money_in(&currency, a), money_in(&currency, b)))
}

/// Strategy to generate two values in different currencies.
fn cross_currency_pair() -> impl Strategy<Value = (Money, Money)> {
    (minor_units(), minor_units()).prop_map(|(a, b)| {
        (
            money_in(&CurrencyUnit::of("GBP").unwrap(), a),
            money_in(&CurrencyUnit::of("EUR").unwrap(), b),
        )
    })
}

/// Strategy to generate any single value.
fn any_money() -> impl Strategy<Value = Money> {
    (currency(), minor_units()).prop_map(|(currency, minor)| money_in(&currency, minor))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* currency, zero is zero, and absent counts as zero.
    #[test]
    fn prop_zero_is_zero(currency in currency()) {
        prop_assert!(MoneyUtils::is_zero(Some(&Money::zero(&currency))));
        prop_assert!(MoneyUtils::is_zero(None));
    }

    /// *For any* present value, default_to_zero hands back the same value,
    /// and for absent it yields zero in the requested currency.
    #[test]
    fn prop_default_to_zero(value in any_money(), other in currency()) {
        prop_assert_eq!(MoneyUtils::default_to_zero(Some(value.clone()), &other), value.clone());
        prop_assert_eq!(MoneyUtils::default_to_zero(None, value.currency()), Money::zero(value.currency()));
    }

    /// *For any* same-currency pair, max and min return one of the inputs,
    /// ordered correctly, with ties going to the first argument.
    #[test]
    fn prop_extrema_select_an_input((a, b) in same_currency_pair()) {
        let max = MoneyUtils::max(Some(&a), Some(&b)).unwrap().unwrap();
        let min = MoneyUtils::min(Some(&a), Some(&b)).unwrap().unwrap();

        prop_assert!(std::ptr::eq(max, &a) || std::ptr::eq(max, &b));
        prop_assert!(std::ptr::eq(min, &a) || std::ptr::eq(min, &b));
        prop_assert!(max >= min);
        if a == b {
            prop_assert!(std::ptr::eq(max, &a));
            prop_assert!(std::ptr::eq(min, &a));
        }
    }

    /// *For any* value, max and min with itself are idempotent.
    #[test]
    fn prop_extrema_idempotent(a in any_money()) {
        prop_assert_eq!(MoneyUtils::max(Some(&a), Some(&a)).unwrap(), Some(&a));
        prop_assert_eq!(MoneyUtils::min(Some(&a), Some(&a)).unwrap(), Some(&a));
    }

    /// *For any* cross-currency pair, every binary operation fails when
    /// both are present and succeeds when either is absent.
    #[test]
    fn prop_currency_mismatch_only_when_both_present((a, b) in cross_currency_pair()) {
        let is_mismatch = |err: MoneyError| matches!(err, MoneyError::CurrencyMismatch { .. });

        prop_assert!(MoneyUtils::max(Some(&a), Some(&b)).map_err(is_mismatch).unwrap_err());
        prop_assert!(MoneyUtils::min(Some(&a), Some(&b)).map_err(is_mismatch).unwrap_err());
        prop_assert!(MoneyUtils::add(Some(a.clone()), Some(b.clone())).map_err(is_mismatch).unwrap_err());
        prop_assert!(MoneyUtils::subtract(Some(a.clone()), Some(b.clone())).map_err(is_mismatch).unwrap_err());

        prop_assert!(MoneyUtils::max(Some(&a), None).is_ok());
        prop_assert!(MoneyUtils::min(None, Some(&b)).is_ok());
        prop_assert!(MoneyUtils::add(Some(a.clone()), None).is_ok());
        prop_assert!(MoneyUtils::subtract(None, Some(b)).is_ok());
    }

    /// *For any* value, absent is the additive identity on either side.
    #[test]
    fn prop_add_absent_identity(v in any_money()) {
        prop_assert_eq!(MoneyUtils::add(None, Some(v.clone())).unwrap(), Some(v.clone()));
        prop_assert_eq!(MoneyUtils::add(Some(v.clone()), None).unwrap(), Some(v));
        prop_assert_eq!(MoneyUtils::add(None, None).unwrap(), None);
    }

    /// *For any* value, subtracting from absent negates it, and subtracting
    /// absent leaves it unchanged.
    #[test]
    fn prop_subtract_absent(v in any_money()) {
        prop_assert_eq!(MoneyUtils::subtract(None, Some(v.clone())).unwrap(), Some(v.negated()));
        prop_assert_eq!(MoneyUtils::subtract(Some(v.clone()), None).unwrap(), Some(v));
        prop_assert_eq!(MoneyUtils::subtract(None, None).unwrap(), None);
    }

    /// *For any* same-currency pair, add then subtract returns the start
    /// and every result keeps the currency's scale.
    #[test]
    fn prop_add_subtract_inverse((a, b) in same_currency_pair()) {
        let sum = MoneyUtils::add(Some(a.clone()), Some(b.clone())).unwrap();
        prop_assert_eq!(sum.as_ref().map(Money::scale), Some(a.currency().decimal_places()));
        let back = MoneyUtils::subtract(sum, Some(b)).unwrap();
        prop_assert_eq!(back, Some(a));
    }

    /// *For any* value, the canonical string parses back to an equal value.
    #[test]
    fn prop_canonical_round_trip(v in any_money()) {
        prop_assert_eq!(Money::parse(&v.to_string()).unwrap(), v);
    }
}
