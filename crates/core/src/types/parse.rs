//! Strict parsing of the canonical `"<code> <amount>"` form.
//!
//! The amount grammar is `[+-]digits[.digits]`. Exponents, grouping
//! separators, locale variants and surrounding whitespace are rejected.

use rust_decimal::Decimal;

use crate::error::{MoneyError, MoneyResult};

/// Parses a plain decimal literal exactly, keeping its scale.
///
/// # Example
///
/// ```
/// use coinage_core::types::parse_decimal;
///
/// assert_eq!(parse_decimal("-10.50").unwrap().to_string(), "-10.50");
/// assert!(parse_decimal("1e3").is_err());
/// ```
pub fn parse_decimal(text: &str) -> MoneyResult<Decimal> {
    read_decimal(text).map_err(|reason| MoneyError::parse(text, reason))
}

/// Splits canonical money text into its code and amount literal.
pub(crate) fn split_canonical(text: &str) -> Result<(&str, &str), &'static str> {
    let (code, literal) = text
        .split_once(char::is_whitespace)
        .ok_or("expected '<code> <amount>'")?;
    if code.is_empty() {
        return Err("missing currency code");
    }
    if literal.is_empty() {
        return Err("missing amount");
    }
    Ok((code, literal))
}

pub(crate) fn read_decimal(literal: &str) -> Result<Decimal, &'static str> {
    DecimalLiteral::lex(literal)?.to_decimal()
}

/// A literal that matches the amount grammar but is not yet converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DecimalLiteral<'a> {
    negative: bool,
    digits: &'a str,
    scale: u32,
}

impl<'a> DecimalLiteral<'a> {
    /// Checks the grammar and records the number of fractional digits.
    pub(crate) fn lex(literal: &'a str) -> Result<Self, &'static str> {
        let (negative, digits) = match literal.as_bytes().first() {
            Some(b'-') => (true, &literal[1..]),
            Some(b'+') => (false, &literal[1..]),
            _ => (false, literal),
        };

        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits, None),
        };
        if integer.is_empty() {
            return Err("missing integer digits");
        }
        if !integer.bytes().all(|b| b.is_ascii_digit()) {
            return Err("unexpected character in amount");
        }
        let mut scale = 0;
        if let Some(fraction) = fraction {
            if fraction.is_empty() {
                return Err("missing fraction digits");
            }
            if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err("unexpected character in amount");
            }
            scale = u32::try_from(fraction.len()).unwrap_or(u32::MAX);
        }

        Ok(Self {
            negative,
            digits,
            scale,
        })
    }

    /// Number of digits after the decimal point.
    pub(crate) fn scale(&self) -> u32 {
        self.scale
    }

    /// Converts exactly, keeping the literal's scale.
    pub(crate) fn to_decimal(self) -> Result<Decimal, &'static str> {
        let magnitude = Decimal::from_str_exact(self.digits).map_err(|_| "amount is out of range")?;
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("20", dec!(20))]
    #[case("-10", dec!(-10))]
    #[case("+7", dec!(7))]
    #[case("0", dec!(0))]
    #[case("12.5", dec!(12.5))]
    #[case("0.001", dec!(0.001))]
    #[case("007.10", dec!(7.10))]
    fn test_read_decimal_accepts(#[case] literal: &str, #[case] expected: Decimal) {
        let value = read_decimal(literal).unwrap();
        assert_eq!(value, expected);
        assert_eq!(value.scale(), expected.scale());
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case("+")]
    #[case("1e3")]
    #[case("1E3")]
    #[case("1,000")]
    #[case("1_000")]
    #[case("1.")]
    #[case(".5")]
    #[case("1.2.3")]
    #[case(" 1")]
    #[case("1 ")]
    #[case("--1")]
    #[case("+-1")]
    #[case("12abc")]
    #[case("NaN")]
    #[case("1,5")]
    fn test_read_decimal_rejects(#[case] literal: &str) {
        assert!(read_decimal(literal).is_err(), "{literal:?} should be rejected");
    }

    #[test]
    fn test_read_decimal_out_of_range() {
        assert_eq!(
            read_decimal("99999999999999999999999999999999"),
            Err("amount is out of range")
        );
    }

    #[rstest]
    #[case("20", 0)]
    #[case("-10.5", 1)]
    #[case("+0.001", 3)]
    #[case("1.00000000000000000000000000001", 29)]
    fn test_lex_records_scale(#[case] literal: &str, #[case] scale: u32) {
        assert_eq!(DecimalLiteral::lex(literal).unwrap().scale(), scale);
    }

    #[test]
    fn test_read_decimal_keeps_trailing_zeros() {
        assert_eq!(read_decimal("1.500").unwrap().to_string(), "1.500");
    }

    #[test]
    fn test_parse_decimal_error_carries_input() {
        assert_eq!(
            parse_decimal("1e3"),
            Err(MoneyError::Parse {
                input: "1e3".into(),
                reason: "unexpected character in amount".into(),
            })
        );
    }

    #[rstest]
    #[case("GBP 20", Ok(("GBP", "20")))]
    #[case("GBP -10.5", Ok(("GBP", "-10.5")))]
    #[case("GBP\t20", Ok(("GBP", "20")))]
    #[case("GBP  20", Ok(("GBP", " 20")))]
    #[case("GBP20", Err("expected '<code> <amount>'"))]
    #[case("GBP ", Err("missing amount"))]
    #[case(" 20", Err("missing currency code"))]
    fn test_split_canonical(#[case] text: &str, #[case] expected: Result<(&str, &str), &str>) {
        assert_eq!(split_canonical(text), expected);
    }
}
