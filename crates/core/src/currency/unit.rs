//! The currency unit value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use super::catalog::{CurrencyCatalog, CurrencyEntry};
use super::registry::{CurrencyRegistry, default_registry};
use crate::error::{MoneyError, MoneyResult};

/// A currency: its ISO 4217 code, numeric code and scale.
///
/// Units are cheap handles onto shared, immutable data. Cloning bumps a
/// reference count; it never copies the currency data. Two units are equal
/// iff their codes are equal.
#[derive(Clone)]
pub struct CurrencyUnit(Arc<CurrencyData>);

#[derive(Debug)]
struct CurrencyData {
    code: String,
    numeric_code: Option<u16>,
    decimal_places: u32,
    pseudo: bool,
}

impl CurrencyUnit {
    /// Looks up a currency in the default ISO 4217 registry.
    ///
    /// The code is matched case-insensitively and normalized to upper case.
    ///
    /// # Example
    ///
    /// ```
    /// use coinage_core::currency::CurrencyUnit;
    ///
    /// let gbp = CurrencyUnit::of("gbp").unwrap();
    /// assert_eq!(gbp.code(), "GBP");
    /// assert_eq!(gbp.decimal_places(), 2);
    /// ```
    pub fn of(code: &str) -> MoneyResult<Self> {
        default_registry().get(code)
    }

    /// Looks up a currency in an explicit registry.
    pub fn of_in<C: CurrencyCatalog>(registry: &CurrencyRegistry<C>, code: &str) -> MoneyResult<Self> {
        registry.get(code)
    }

    /// Builds a unit from a normalized code and its catalog entry.
    pub(crate) fn from_entry(code: String, entry: CurrencyEntry) -> Self {
        Self(Arc::new(CurrencyData {
            code,
            numeric_code: entry.numeric_code,
            decimal_places: entry.decimal_places,
            pseudo: entry.pseudo,
        }))
    }

    /// The three-letter upper-case code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0.code
    }

    /// The ISO 4217 numeric code, if any.
    #[must_use]
    pub fn numeric_code(&self) -> Option<u16> {
        self.0.numeric_code
    }

    /// The numeric code as a zero-padded three digit string, or `""`.
    #[must_use]
    pub fn numeric3_code(&self) -> String {
        self.0
            .numeric_code
            .map(|n| format!("{n:03}"))
            .unwrap_or_default()
    }

    /// Number of minor-unit digits; every amount in this currency has this scale.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        self.0.decimal_places
    }

    /// True for currencies without a minor unit concept (precious metals,
    /// testing and "no currency" codes). Their amounts use scale 0.
    #[must_use]
    pub fn is_pseudo_currency(&self) -> bool {
        self.0.pseudo
    }

    /// True if both handles point at the same interned data.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.code == other.0.code
    }
}

impl Eq for CurrencyUnit {}

impl Hash for CurrencyUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.code.hash(state);
    }
}

impl PartialOrd for CurrencyUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurrencyUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.code.cmp(&other.0.code)
    }
}

impl fmt::Debug for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyUnit")
            .field("code", &self.0.code)
            .field("decimal_places", &self.0.decimal_places)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.code)
    }
}

impl FromStr for CurrencyUnit {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_known_currency() {
        let gbp = CurrencyUnit::of("GBP").unwrap();
        assert_eq!(gbp.code(), "GBP");
        assert_eq!(gbp.numeric_code(), Some(826));
        assert_eq!(gbp.numeric3_code(), "826");
        assert_eq!(gbp.decimal_places(), 2);
        assert!(!gbp.is_pseudo_currency());
    }

    #[test]
    fn test_of_is_case_insensitive_and_normalized() {
        let lower = CurrencyUnit::of("eur").unwrap();
        let upper = CurrencyUnit::of("EUR").unwrap();
        assert_eq!(lower.code(), "EUR");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_of_unknown_currency() {
        assert_eq!(
            CurrencyUnit::of("ABC"),
            Err(MoneyError::UnknownCurrency("ABC".into()))
        );
        assert!(matches!(
            CurrencyUnit::of("GB"),
            Err(MoneyError::UnknownCurrency(_))
        ));
        assert!(matches!(
            CurrencyUnit::of(""),
            Err(MoneyError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_of_returns_shared_instance() {
        let a = CurrencyUnit::of("JPY").unwrap();
        let b = CurrencyUnit::of("jpy").unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.decimal_places(), 0);
    }

    #[test]
    fn test_equality_is_by_code() {
        let a = CurrencyUnit::from_entry(
            "GBP".into(),
            CurrencyEntry::new(Some(826), 2),
        );
        let b = CurrencyUnit::from_entry("GBP".into(), CurrencyEntry::new(None, 3));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_ne!(a, CurrencyUnit::of("USD").unwrap());
    }

    #[test]
    fn test_numeric3_code_padding() {
        let all = CurrencyUnit::of("ALL").unwrap();
        assert_eq!(all.numeric3_code(), "008");

        let custom = CurrencyUnit::from_entry("XBT".into(), CurrencyEntry::new(None, 8));
        assert_eq!(custom.numeric3_code(), "");
    }

    #[test]
    fn test_pseudo_currency() {
        let gold = CurrencyUnit::of("XAU").unwrap();
        assert!(gold.is_pseudo_currency());
        assert_eq!(gold.decimal_places(), 0);
    }

    #[test]
    fn test_display_and_from_str() {
        let usd: CurrencyUnit = "usd".parse().unwrap();
        assert_eq!(usd.to_string(), "USD");
        assert!("NOPE".parse::<CurrencyUnit>().is_err());
    }

    #[test]
    fn test_ordering_by_code() {
        let mut units = vec![
            CurrencyUnit::of("USD").unwrap(),
            CurrencyUnit::of("EUR").unwrap(),
            CurrencyUnit::of("GBP").unwrap(),
        ];
        units.sort();
        let codes: Vec<&str> = units.iter().map(CurrencyUnit::code).collect();
        assert_eq!(codes, vec!["EUR", "GBP", "USD"]);
    }
}
