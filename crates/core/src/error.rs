//! Error types for currency lookup and monetary arithmetic.
//!
//! Every failure is a programming or input error: nothing here is
//! retryable, and no operation returns a partial result.

use coinage_shared::AppError;
use thiserror::Error;

use crate::currency::CurrencyUnit;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors that can occur while building or combining monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Currency Errors ==========
    /// The code is not present in the catalog.
    #[error("Unknown currency '{0}'")]
    UnknownCurrency(String),

    /// A catalog definition is malformed.
    #[error("Invalid currency definition '{code}': {reason}")]
    InvalidCurrency {
        /// The offending code, as supplied.
        code: String,
        /// Why the definition was rejected.
        reason: String,
    },

    // ========== Amount Errors ==========
    /// The amount has more fractional digits than the currency allows.
    #[error(
        "Scale of amount {amount} is greater than the scale of the currency {currency} ({decimal_places})"
    )]
    ScaleMismatch {
        /// The target currency.
        currency: CurrencyUnit,
        /// The rejected amount, as written.
        amount: String,
        /// The currency's scale.
        decimal_places: u32,
    },

    /// A binary operation was given two values in different currencies.
    #[error("Currencies differ: {expected}/{actual}")]
    CurrencyMismatch {
        /// Currency of the receiver (left operand).
        expected: CurrencyUnit,
        /// Currency of the argument (right operand).
        actual: CurrencyUnit,
    },

    /// The exact result does not fit the decimal representation.
    #[error("Monetary amount overflowed the decimal range")]
    Overflow,

    /// Division by a zero divisor.
    #[error("Cannot divide a monetary amount by zero")]
    DivisionByZero,

    // ========== Input Errors ==========
    /// Malformed textual input.
    #[error("Money '{input}' cannot be parsed: {reason}")]
    Parse {
        /// The text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A required value was absent. Displays the caller's message verbatim.
    #[error("{0}")]
    NullArgument(String),
}

impl MoneyError {
    /// Returns the stable error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::InvalidCurrency { .. } => "INVALID_CURRENCY",
            Self::ScaleMismatch { .. } => "SCALE_MISMATCH",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::Overflow => "OVERFLOW",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Parse { .. } => "PARSE_ERROR",
            Self::NullArgument(_) => "NULL_ARGUMENT",
        }
    }

    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        match err {
            MoneyError::UnknownCurrency(_) => Self::NotFound(err.to_string()),
            MoneyError::InvalidCurrency { .. } => Self::Config(err.to_string()),
            MoneyError::Overflow => Self::Internal(err.to_string()),
            MoneyError::ScaleMismatch { .. }
            | MoneyError::CurrencyMismatch { .. }
            | MoneyError::DivisionByZero
            | MoneyError::Parse { .. }
            | MoneyError::NullArgument(_) => Self::Validation(err.to_string()),
        }
    }
}
