//! Currency catalogs: where currency metadata comes from.
//!
//! A catalog maps normalized three-letter codes to a [`CurrencyEntry`].
//! [`IsoCatalog`] ships the common ISO 4217 currencies and can be extended
//! with definitions loaded from configuration.

use std::collections::BTreeMap;

use coinage_shared::CurrencyDefinition;
use tracing::{debug, warn};

use crate::error::{MoneyError, MoneyResult};

/// Largest scale a currency may declare (the decimal type's limit).
pub const MAX_DECIMAL_PLACES: u32 = 28;

/// Metadata a catalog holds for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyEntry {
    /// ISO 4217 numeric code, if any.
    pub numeric_code: Option<u16>,
    /// Number of minor-unit digits.
    pub decimal_places: u32,
    /// True for pseudo currencies (no minor unit).
    pub pseudo: bool,
}

impl CurrencyEntry {
    /// Creates an entry for an ordinary currency.
    #[must_use]
    pub const fn new(numeric_code: Option<u16>, decimal_places: u32) -> Self {
        Self {
            numeric_code,
            decimal_places,
            pseudo: false,
        }
    }

    /// Creates an entry for a pseudo currency; amounts use scale 0.
    #[must_use]
    pub const fn pseudo(numeric_code: u16) -> Self {
        Self {
            numeric_code: Some(numeric_code),
            decimal_places: 0,
            pseudo: true,
        }
    }
}

/// Source of currency metadata.
pub trait CurrencyCatalog: Send + Sync {
    /// Returns the entry for a normalized (upper-case) code.
    fn lookup(&self, code: &str) -> Option<CurrencyEntry>;

    /// All codes known to the catalog, in ascending order.
    fn codes(&self) -> Vec<String>;
}

/// Normalizes a currency code to upper case, or `None` if it is not three
/// ASCII letters.
#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    (code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()))
        .then(|| code.to_ascii_uppercase())
}

/// (code, numeric code, decimal places)
const ISO_CURRENCIES: &[(&str, u16, u32)] = &[
    ("AED", 784, 2),
    ("AFN", 971, 2),
    ("ALL", 8, 2),
    ("AMD", 51, 2),
    ("ARS", 32, 2),
    ("AUD", 36, 2),
    ("BGN", 975, 2),
    ("BHD", 48, 3),
    ("BRL", 986, 2),
    ("CAD", 124, 2),
    ("CHF", 756, 2),
    ("CLF", 990, 4),
    ("CLP", 152, 0),
    ("CNY", 156, 2),
    ("COP", 170, 2),
    ("CZK", 203, 2),
    ("DKK", 208, 2),
    ("EGP", 818, 2),
    ("EUR", 978, 2),
    ("GBP", 826, 2),
    ("HKD", 344, 2),
    ("HUF", 348, 2),
    ("IDR", 360, 2),
    ("ILS", 376, 2),
    ("INR", 356, 2),
    ("IQD", 368, 3),
    ("ISK", 352, 0),
    ("JOD", 400, 3),
    ("JPY", 392, 0),
    ("KES", 404, 2),
    ("KRW", 410, 0),
    ("KWD", 414, 3),
    ("LYD", 434, 3),
    ("MXN", 484, 2),
    ("MYR", 458, 2),
    ("NGN", 566, 2),
    ("NOK", 578, 2),
    ("NZD", 554, 2),
    ("OMR", 512, 3),
    ("PEN", 604, 2),
    ("PHP", 608, 2),
    ("PKR", 586, 2),
    ("PLN", 985, 2),
    ("QAR", 634, 2),
    ("RON", 946, 2),
    ("RSD", 941, 2),
    ("SAR", 682, 2),
    ("SEK", 752, 2),
    ("SGD", 702, 2),
    ("THB", 764, 2),
    ("TND", 788, 3),
    ("TRY", 949, 2),
    ("TWD", 901, 2),
    ("UAH", 980, 2),
    ("UGX", 800, 0),
    ("USD", 840, 2),
    ("UYU", 858, 2),
    ("UYW", 927, 4),
    ("VND", 704, 0),
    ("XAF", 950, 0),
    ("XOF", 952, 0),
    ("XPF", 953, 0),
    ("ZAR", 710, 2),
];

/// (code, numeric code) for metals, SDRs and testing codes.
const ISO_PSEUDO_CURRENCIES: &[(&str, u16)] = &[
    ("XAG", 961),
    ("XAU", 959),
    ("XDR", 960),
    ("XPD", 964),
    ("XPT", 962),
    ("XTS", 963),
    ("XXX", 999),
];

/// Built-in ISO 4217 catalog, optionally extended from configuration.
#[derive(Debug, Clone)]
pub struct IsoCatalog {
    entries: BTreeMap<String, CurrencyEntry>,
}

impl IsoCatalog {
    /// Creates a catalog holding the built-in ISO 4217 table.
    #[must_use]
    pub fn new() -> Self {
        let ordinary = ISO_CURRENCIES
            .iter()
            .map(|&(code, numeric, places)| (code.to_string(), CurrencyEntry::new(Some(numeric), places)));
        let pseudo = ISO_PSEUDO_CURRENCIES
            .iter()
            .map(|&(code, numeric)| (code.to_string(), CurrencyEntry::pseudo(numeric)));

        Self {
            entries: ordinary.chain(pseudo).collect(),
        }
    }

    /// Creates the built-in catalog extended with extra definitions.
    ///
    /// A definition whose code already exists replaces the built-in entry.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` if a definition has a malformed code, a
    /// numeric code above 999, or more than [`MAX_DECIMAL_PLACES`] places.
    pub fn with_definitions(definitions: &[CurrencyDefinition]) -> MoneyResult<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            let (code, entry) = validate_definition(definition)?;
            if catalog.entries.insert(code.clone(), entry).is_some() {
                warn!(code = %code, "Currency definition overrides built-in entry");
            } else {
                debug!(code = %code, decimal_places = entry.decimal_places, "Registered currency");
            }
        }
        Ok(catalog)
    }
}

impl Default for IsoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyCatalog for IsoCatalog {
    fn lookup(&self, code: &str) -> Option<CurrencyEntry> {
        self.entries.get(code).copied()
    }

    fn codes(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

fn validate_definition(definition: &CurrencyDefinition) -> MoneyResult<(String, CurrencyEntry)> {
    let invalid = |reason: &str| MoneyError::InvalidCurrency {
        code: definition.code.clone(),
        reason: reason.to_string(),
    };

    let code = normalize_code(&definition.code).ok_or_else(|| invalid("code must be three ASCII letters"))?;
    if definition.numeric_code.is_some_and(|n| n > 999) {
        return Err(invalid("numeric code must be between 0 and 999"));
    }
    if definition.decimal_places > MAX_DECIMAL_PLACES {
        return Err(invalid("decimal places must not exceed 28"));
    }

    Ok((code, CurrencyEntry::new(definition.numeric_code, definition.decimal_places)))
}
