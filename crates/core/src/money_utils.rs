//! Null-tolerant operations over optional monetary values.
//!
//! Each operation has its own rule for an absent operand:
//!
//! | Operation          | One absent                         | Both absent |
//! |--------------------|------------------------------------|-------------|
//! | `is_zero`          | `true`                             | n/a         |
//! | `default_to_zero`  | zero in the given currency         | n/a         |
//! | `max` / `min`      | the present value                  | absent      |
//! | `add`              | the present value                  | absent      |
//! | `subtract`         | `a` if `b` is absent, else `-b`    | absent      |
//!
//! Currencies are only checked when both operands are present, and a
//! present operand that is passed through is never rebuilt: owned values are
//! moved out, borrowed values come back as the same reference.

use crate::currency::CurrencyUnit;
use crate::error::{MoneyError, MoneyResult};
use crate::types::Money;

/// Stateless null-tolerant money operations.
pub struct MoneyUtils;

impl MoneyUtils {
    /// Fails with `NullArgument` carrying `message` verbatim if `value` is
    /// absent; otherwise hands the value back.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::MoneyUtils;
    ///
    /// assert_eq!(MoneyUtils::check_not_null(Some(5), "unused"), Ok(5));
    /// let err = MoneyUtils::check_not_null(None::<i32>, "Hello").unwrap_err();
    /// assert_eq!(err.to_string(), "Hello");
    /// ```
    pub fn check_not_null<T>(value: Option<T>, message: &str) -> MoneyResult<T> {
        value.ok_or_else(|| MoneyError::NullArgument(message.to_string()))
    }

    /// True if the value is absent or has a zero amount.
    #[must_use]
    pub fn is_zero(money: Option<&Money>) -> bool {
        money.is_none_or(Money::is_zero)
    }

    /// Returns `money` unchanged, or zero in `currency` if it is absent.
    ///
    /// `currency` is only consulted for the absent case.
    #[must_use]
    pub fn default_to_zero(money: Option<Money>, currency: &CurrencyUnit) -> Money {
        money.unwrap_or_else(|| Money::zero(currency))
    }

    /// The larger of two optional values; ties return `a`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if both are present in different currencies.
    pub fn max<'a>(a: Option<&'a Money>, b: Option<&'a Money>) -> MoneyResult<Option<&'a Money>> {
        match (a, b) {
            (Some(a), Some(b)) => Ok(Some(if a.compare_to(b)?.is_lt() { b } else { a })),
            (a, None) => Ok(a),
            (None, b) => Ok(b),
        }
    }

    /// The smaller of two optional values; ties return `a`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if both are present in different currencies.
    pub fn min<'a>(a: Option<&'a Money>, b: Option<&'a Money>) -> MoneyResult<Option<&'a Money>> {
        match (a, b) {
            (Some(a), Some(b)) => Ok(Some(if a.compare_to(b)?.is_gt() { b } else { a })),
            (a, None) => Ok(a),
            (None, b) => Ok(b),
        }
    }

    /// Adds two optional values; an absent operand is the identity.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if both are present in different currencies.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::MoneyUtils;
    /// use coinage_core::types::Money;
    ///
    /// let sum = MoneyUtils::add(Money::parse("GBP 20").ok(), Money::parse("GBP 30").ok()).unwrap();
    /// assert_eq!(sum, Money::parse("GBP 50").ok());
    /// assert_eq!(MoneyUtils::add(None, None).unwrap(), None);
    /// ```
    pub fn add(a: Option<Money>, b: Option<Money>) -> MoneyResult<Option<Money>> {
        match (a, b) {
            (Some(a), Some(b)) => a.plus(&b).map(Some),
            (a, None) => Ok(a),
            (None, b) => Ok(b),
        }
    }

    /// Subtracts `b` from `a`; an absent `a` yields `-b`, an absent `b`
    /// yields `a` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if both are present in different currencies.
    pub fn subtract(a: Option<Money>, b: Option<Money>) -> MoneyResult<Option<Money>> {
        match (a, b) {
            (Some(a), Some(b)) => a.minus(&b).map(Some),
            (a, None) => Ok(a),
            (None, Some(b)) => Ok(Some(b.negated())),
        }
    }

    /// Sums optional values, skipping absent ones. All absent (or empty)
    /// yields absent.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if present values differ in currency.
    pub fn total<I>(values: I) -> MoneyResult<Option<Money>>
    where
        I: IntoIterator<Item = Option<Money>>,
    {
        values.into_iter().try_fold(None, Self::add)
    }
}

#[cfg(test)]
#[path = "money_utils_props.rs"]
mod props;
