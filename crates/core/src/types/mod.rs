//! Monetary value types.

pub mod money;
pub mod parse;

pub use money::{EMPTY_TOTAL, Money};
pub use parse::parse_decimal;

#[cfg(test)]
mod props;
