//! Core money logic for Coinage.
//!
//! This crate contains pure value logic with ZERO network or storage
//! dependencies: exact decimal amounts bound to a currency, and the
//! null-tolerant operations built on top of them.
//!
//! # Modules
//!
//! - `currency` - Currency units, catalogs and the interning registry
//! - `types` - The `Money` value type and its strict text parser
//! - `money_utils` - Operations over optional `Money` values
//! - `error` - Typed failures shared by all of the above

pub mod currency;
pub mod error;
pub mod money_utils;
pub mod types;

pub use currency::CurrencyUnit;
pub use error::{MoneyError, MoneyResult};
pub use money_utils::MoneyUtils;
pub use types::Money;
