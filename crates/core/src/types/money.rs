//! Money type with exact decimal amount and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! The amount is a `rust_decimal::Decimal` whose scale always equals the
//! currency's decimal places. Nothing in this module rounds implicitly:
//! construction rejects excess fractional digits, addition and subtraction
//! are exact, and multiplication or division take an explicit strategy.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::parse::{DecimalLiteral, split_canonical};
use crate::currency::{CurrencyCatalog, CurrencyRegistry, CurrencyUnit, default_registry};
use crate::error::{MoneyError, MoneyResult};

/// Message of the `NullArgument` error raised by [`Money::total`].
pub const EMPTY_TOTAL: &str = "Money iterator must not be empty";

/// An amount of money in a specific currency.
///
/// Immutable: every operation returns a new value. Two values are equal iff
/// they have the same currency and the same amount.
#[derive(Clone)]
pub struct Money {
    currency: CurrencyUnit,
    amount: Decimal,
}

impl Money {
    // ========== Construction ==========

    /// Creates a value, zero-padding the amount to the currency's scale.
    ///
    /// # Errors
    ///
    /// Returns `ScaleMismatch` if `amount` has more fractional digits than
    /// the currency allows. Round before calling if that is intended.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::currency::CurrencyUnit;
    /// use coinage_core::types::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let gbp = CurrencyUnit::of("GBP").unwrap();
    /// let money = Money::of(&gbp, dec!(12.5)).unwrap();
    /// assert_eq!(money.to_string(), "GBP 12.50");
    /// assert!(Money::of(&gbp, dec!(12.505)).is_err());
    /// ```
    pub fn of(currency: &CurrencyUnit, amount: Decimal) -> MoneyResult<Self> {
        let places = currency.decimal_places();
        if amount.scale() > places {
            return Err(MoneyError::ScaleMismatch {
                currency: currency.clone(),
                amount: amount.to_string(),
                decimal_places: places,
            });
        }

        let mut amount = amount;
        amount.rescale(places);
        if amount.scale() != places {
            return Err(MoneyError::Overflow);
        }
        if amount.is_zero() {
            amount.set_sign_positive(true);
        }

        Ok(Self {
            currency: currency.clone(),
            amount,
        })
    }

    /// Creates a value from a whole number of major units.
    pub fn of_major(currency: &CurrencyUnit, major: i64) -> MoneyResult<Self> {
        Self::of(currency, Decimal::from(major))
    }

    /// Creates a value from a number of minor units (e.g. cents).
    pub fn of_minor(currency: &CurrencyUnit, minor: i64) -> MoneyResult<Self> {
        let amount = Decimal::try_new(minor, currency.decimal_places()).map_err(|_| MoneyError::Overflow)?;
        Self::of(currency, amount)
    }

    /// The zero amount at the currency's scale.
    #[must_use]
    pub fn zero(currency: &CurrencyUnit) -> Self {
        let mut amount = Decimal::ZERO;
        amount.rescale(currency.decimal_places());
        Self {
            currency: currency.clone(),
            amount,
        }
    }

    /// Parses the canonical form using the default registry.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed text, `UnknownCurrency` for an unknown
    /// code and `ScaleMismatch` if the literal has too many fractional digits.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::types::Money;
    ///
    /// let money = Money::parse("GBP -10").unwrap();
    /// assert_eq!(money.to_string(), "GBP -10.00");
    /// ```
    pub fn parse(text: &str) -> MoneyResult<Self> {
        Self::parse_in(default_registry(), text)
    }

    /// Parses the canonical form, resolving the code in `registry`.
    pub fn parse_in<C: CurrencyCatalog>(registry: &CurrencyRegistry<C>, text: &str) -> MoneyResult<Self> {
        let (code, literal) = split_canonical(text).map_err(|reason| MoneyError::parse(text, reason))?;
        let lexed = DecimalLiteral::lex(literal).map_err(|reason| MoneyError::parse(text, reason))?;
        let currency = registry.get(code)?;

        // Checked on the literal so digits beyond the decimal type's range
        // still report the scale rather than a range failure.
        let places = currency.decimal_places();
        if lexed.scale() > places {
            return Err(MoneyError::ScaleMismatch {
                currency,
                amount: literal.to_string(),
                decimal_places: places,
            });
        }

        let amount = lexed.to_decimal().map_err(|reason| MoneyError::parse(text, reason))?;
        Self::of(&currency, amount)
    }

    /// Sums a non-empty sequence of same-currency values.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` if the sequence is empty and `CurrencyMismatch`
    /// if currencies differ.
    pub fn total<I>(values: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut values = values.into_iter();
        let first = values
            .next()
            .ok_or_else(|| MoneyError::NullArgument(EMPTY_TOTAL.into()))?;
        values.try_fold(first, |total, money| total.plus(&money))
    }

    /// Sums a possibly empty sequence; an empty sequence totals zero.
    pub fn total_in<I>(currency: &CurrencyUnit, values: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        values
            .into_iter()
            .try_fold(Self::zero(currency), |total, money| total.plus(&money))
    }

    /// Returns a value in the same currency with a different amount.
    pub fn with_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        Self::of(&self.currency, amount)
    }

    // ========== Accessors ==========

    /// The currency.
    #[must_use]
    pub fn currency(&self) -> &CurrencyUnit {
        &self.currency
    }

    /// The exact amount; its scale equals the currency's decimal places.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The scale of the amount.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.amount.scale()
    }

    /// The amount in minor units, e.g. 1234 for `GBP 12.34`.
    #[must_use]
    pub fn amount_minor(&self) -> i128 {
        self.amount.mantissa()
    }

    /// The whole major units, truncated toward zero.
    #[must_use]
    pub fn amount_major(&self) -> Decimal {
        self.amount.trunc()
    }

    /// The minor units beyond the major part, signed, e.g. -34 for `GBP -12.34`.
    #[must_use]
    pub fn minor_part(&self) -> i128 {
        self.amount.fract().mantissa()
    }

    // ========== Predicates ==========

    /// True iff the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// True iff the amount is greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// True iff the amount is zero or greater.
    #[must_use]
    pub fn is_positive_or_zero(&self) -> bool {
        self.amount >= Decimal::ZERO
    }

    /// True iff the amount is less than zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// True iff the amount is zero or less.
    #[must_use]
    pub fn is_negative_or_zero(&self) -> bool {
        self.amount <= Decimal::ZERO
    }

    /// True iff both values are in the same currency.
    #[must_use]
    pub fn is_same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Compares amounts; fails if the currencies differ.
    pub fn compare_to(&self, other: &Self) -> MoneyResult<Ordering> {
        self.check_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// True iff this amount is greater; fails if the currencies differ.
    pub fn is_greater_than(&self, other: &Self) -> MoneyResult<bool> {
        self.compare_to(other).map(Ordering::is_gt)
    }

    /// True iff this amount is smaller; fails if the currencies differ.
    pub fn is_less_than(&self, other: &Self) -> MoneyResult<bool> {
        self.compare_to(other).map(Ordering::is_lt)
    }

    /// True iff the amounts are equal; fails if the currencies differ.
    pub fn is_equal_amount(&self, other: &Self) -> MoneyResult<bool> {
        self.compare_to(other).map(Ordering::is_eq)
    }

    // ========== Arithmetic ==========

    /// Adds a value in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currencies differ, `Overflow` if the
    /// sum does not fit.
    pub fn plus(&self, other: &Self) -> MoneyResult<Self> {
        self.check_currency(other)?;
        self.plus_amount(other.amount)
    }

    /// Subtracts a value in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currencies differ, `Overflow` if the
    /// difference does not fit.
    pub fn minus(&self, other: &Self) -> MoneyResult<Self> {
        self.check_currency(other)?;
        self.minus_amount(other.amount)
    }

    /// Adds a decimal amount, which must fit the currency's scale.
    pub fn plus_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        let amount = self.conform(amount)?;
        let sum = self.amount.checked_add(amount).ok_or(MoneyError::Overflow)?;
        self.with_exact(sum)
    }

    /// Subtracts a decimal amount, which must fit the currency's scale.
    pub fn minus_amount(&self, amount: Decimal) -> MoneyResult<Self> {
        let amount = self.conform(amount)?;
        let difference = self.amount.checked_sub(amount).ok_or(MoneyError::Overflow)?;
        self.with_exact(difference)
    }

    /// Adds whole major units.
    pub fn plus_major(&self, major: i64) -> MoneyResult<Self> {
        self.plus_amount(Decimal::from(major))
    }

    /// Subtracts whole major units.
    pub fn minus_major(&self, major: i64) -> MoneyResult<Self> {
        self.minus_amount(Decimal::from(major))
    }

    /// Adds minor units.
    pub fn plus_minor(&self, minor: i64) -> MoneyResult<Self> {
        self.plus_amount(self.minor_units(minor)?)
    }

    /// Subtracts minor units.
    pub fn minus_minor(&self, minor: i64) -> MoneyResult<Self> {
        self.minus_amount(self.minor_units(minor)?)
    }

    /// Multiplies by `factor`, rounding the product to the currency's scale
    /// with `strategy`.
    pub fn multiplied_by(&self, factor: Decimal, strategy: RoundingStrategy) -> MoneyResult<Self> {
        let product = self.amount.checked_mul(factor).ok_or(MoneyError::Overflow)?;
        self.with_exact(product.round_dp_with_strategy(self.currency.decimal_places(), strategy))
    }

    /// Divides by `divisor`, rounding the quotient to the currency's scale
    /// with `strategy`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn divided_by(&self, divisor: Decimal, strategy: RoundingStrategy) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = self.amount.checked_div(divisor).ok_or(MoneyError::Overflow)?;
        self.with_exact(quotient.round_dp_with_strategy(self.currency.decimal_places(), strategy))
    }

    /// Flips the sign.
    #[must_use]
    pub fn negated(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        Self {
            currency: self.currency.clone(),
            amount: -self.amount,
        }
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.is_negative() { self.negated() } else { self.clone() }
    }

    fn check_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.clone(),
                actual: other.currency.clone(),
            })
        }
    }

    /// Rejects operands with more fractional digits than the currency allows.
    fn conform(&self, amount: Decimal) -> MoneyResult<Decimal> {
        let places = self.currency.decimal_places();
        if amount.scale() > places {
            return Err(MoneyError::ScaleMismatch {
                currency: self.currency.clone(),
                amount: amount.to_string(),
                decimal_places: places,
            });
        }
        Ok(amount)
    }

    fn minor_units(&self, minor: i64) -> MoneyResult<Decimal> {
        Decimal::try_new(minor, self.currency.decimal_places()).map_err(|_| MoneyError::Overflow)
    }

    /// Wraps an arithmetic result. The decimal type may shed scale when a
    /// result nears its range; that is an overflow, never a rounding.
    fn with_exact(&self, amount: Decimal) -> MoneyResult<Self> {
        Self::of(&self.currency, amount).map_err(|err| match err {
            MoneyError::ScaleMismatch { .. } => MoneyError::Overflow,
            other => other,
        })
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency
            && self.amount == other.amount
            && self.amount.scale() == other.amount.scale()
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.amount.hash(state);
    }
}

/// Values in different currencies are unordered.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Money({} {})", self.currency.code(), self.amount)
    }
}

/// Renders the canonical form with the full scale, e.g. `GBP 20.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
