//! Interning registry of currency units.
//!
//! The registry sits in front of a [`CurrencyCatalog`] as a read-through,
//! write-once cache: the first lookup of a code builds the shared unit and
//! every later lookup hands out a clone of that same handle.

use moka::sync::Cache;
use once_cell::sync::Lazy;
use tracing::{debug, trace, warn};

use super::catalog::{CurrencyCatalog, IsoCatalog, MAX_DECIMAL_PLACES, normalize_code};
use super::unit::CurrencyUnit;
use crate::error::{MoneyError, MoneyResult};

static DEFAULT_REGISTRY: Lazy<CurrencyRegistry> = Lazy::new(|| CurrencyRegistry::new(IsoCatalog::new()));

/// The process-wide registry over the built-in ISO 4217 catalog.
#[must_use]
pub fn default_registry() -> &'static CurrencyRegistry {
    &DEFAULT_REGISTRY
}

/// Interning cache of currency units backed by a catalog.
///
/// Thread-safe; concurrent first lookups of the same code still yield a
/// single shared unit.
pub struct CurrencyRegistry<C = IsoCatalog> {
    catalog: C,
    units: Cache<String, CurrencyUnit>,
}

impl<C: CurrencyCatalog> CurrencyRegistry<C> {
    /// Creates an empty registry over `catalog`.
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            units: Cache::builder().build(),
        }
    }

    /// Returns the unit for `code`, interning it on first use.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` if the code is malformed or not in the catalog,
    /// and `InvalidCurrency` if the catalog declares more than
    /// [`MAX_DECIMAL_PLACES`] places for it.
    pub fn get(&self, code: &str) -> MoneyResult<CurrencyUnit> {
        let Some(normalized) = normalize_code(code) else {
            debug!(code, "Malformed currency code");
            return Err(MoneyError::UnknownCurrency(code.to_string()));
        };

        if let Some(unit) = self.units.get(&normalized) {
            trace!(code = %normalized, "Currency unit cache hit");
            return Ok(unit);
        }

        let Some(entry) = self.catalog.lookup(&normalized) else {
            debug!(code = %normalized, "Unknown currency code");
            return Err(MoneyError::UnknownCurrency(normalized));
        };
        if entry.decimal_places > MAX_DECIMAL_PLACES {
            warn!(
                code = %normalized,
                decimal_places = entry.decimal_places,
                "Catalog entry exceeds the maximum scale"
            );
            return Err(MoneyError::InvalidCurrency {
                code: normalized,
                reason: format!("decimal places must not exceed {MAX_DECIMAL_PLACES}"),
            });
        }

        debug!(
            code = %normalized,
            decimal_places = entry.decimal_places,
            "Interning currency unit"
        );
        let unit = self
            .units
            .entry(normalized.clone())
            .or_insert_with(|| CurrencyUnit::from_entry(normalized, entry))
            .into_value();
        Ok(unit)
    }

    /// All codes the underlying catalog knows, in ascending order.
    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.catalog.codes()
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
