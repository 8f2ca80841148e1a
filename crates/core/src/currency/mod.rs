//! Currency units, catalogs and the interning registry.

pub mod catalog;
pub mod registry;
pub mod unit;

pub use catalog::{CurrencyCatalog, CurrencyEntry, IsoCatalog, MAX_DECIMAL_PLACES};
pub use registry::{CurrencyRegistry, default_registry};
pub use unit::CurrencyUnit;
