//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as display strings with an embedded currency glyph
//! (`"99€"`, `"$19.99"`). They are parsed once into a [`Price`] so that cart
//! arithmetic never round-trips through floating point or formatted text.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing or combining prices.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty (or only a currency glyph).
    #[error("price cannot be empty")]
    Empty,
    /// The amount is not a decimal number.
    #[error("invalid price amount: {0}")]
    InvalidAmount(String),
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
    /// The currency code is not supported.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
    /// Two prices in different currencies were combined.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Currency of the left-hand side.
        expected: CurrencyCode,
        /// Currency of the right-hand side.
        found: CurrencyCode,
    },
    /// The result does not fit in a decimal amount.
    #[error("price arithmetic overflowed")]
    Overflow,
}

/// A price with currency information.
///
/// ## Examples
///
/// ```
/// use miapp_core::{CurrencyCode, Price};
///
/// let price = Price::parse("99€").unwrap();
/// assert_eq!(price.currency(), CurrencyCode::EUR);
/// assert_eq!(price.to_string(), "99€");
/// assert_eq!(price.checked_times(2).unwrap().to_fixed_string(), "198.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., euros, not cents).
    amount: Decimal,
    /// ISO 4217 currency code.
    currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in minor units (e.g., cents).
    #[must_use]
    pub fn from_minor_units(minor: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(minor, 2), currency_code)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Parse a display string such as `"99€"`, `"$19.99"` or `"49"`.
    ///
    /// The currency glyph may lead or trail the amount. An amount without a
    /// glyph is taken to be in the default currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, the amount is not a decimal
    /// number, or the amount is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }

        let (number, currency_code) = CurrencyCode::strip_symbol(trimmed)
            .unwrap_or((trimmed, CurrencyCode::default()));
        let number = number.trim();
        if number.is_empty() {
            return Err(PriceError::Empty);
        }

        let amount = Decimal::from_str(number)
            .map_err(|_| PriceError::InvalidAmount(number.to_owned()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        Ok(Self::new(amount, currency_code))
    }

    /// The decimal amount in standard units.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this price.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Multiply by a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product does not fit.
    pub fn checked_times(&self, quantity: u32) -> Result<Self, PriceError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(PriceError::Overflow)
    }

    /// Add two prices of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::CurrencyMismatch`] if the currencies differ and
    /// [`PriceError::Overflow`] if the sum does not fit.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PriceError> {
        if self.currency_code != other.currency_code {
            return Err(PriceError::CurrencyMismatch {
                expected: self.currency_code,
                found: other.currency_code,
            });
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Self::new(amount, self.currency_code))
            .ok_or(PriceError::Overflow)
    }

    /// The bare amount with exactly two decimal places (e.g., `"197.00"`).
    ///
    /// Halves round away from zero, so `0.125` becomes `"0.13"`.
    #[must_use]
    pub fn to_fixed_string(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl fmt::Display for Price {
    /// Whole amounts drop their decimals (`99€`), others keep two (`$19.99`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = if self.amount.fract().is_zero() {
            format!("{:.0}", self.amount)
        } else {
            self.to_fixed_string()
        };
        let symbol = self.currency_code.symbol();
        if self.currency_code.symbol_trails() {
            write!(f, "{amount}{symbol}")
        } else {
            write!(f, "{symbol}{amount}")
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    EUR,
    USD,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// All supported currencies.
    pub const ALL: [Self; 5] = [Self::EUR, Self::USD, Self::GBP, Self::CAD, Self::AUD];

    /// Display glyph for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::EUR => "€",
            Self::USD => "$",
            Self::GBP => "£",
            Self::CAD => "CA$",
            Self::AUD => "A$",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EUR => "EUR",
            Self::USD => "USD",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Whether the glyph is written after the amount.
    #[must_use]
    pub const fn symbol_trails(&self) -> bool {
        matches!(self, Self::EUR)
    }

    /// Split a leading or trailing glyph off `s`.
    ///
    /// Longer glyphs are tried first so `CA$` is not read as `$`.
    fn strip_symbol(s: &str) -> Option<(&str, Self)> {
        let mut by_length = Self::ALL;
        by_length.sort_by_key(|c| core::cmp::Reverse(c.symbol().len()));

        by_length.into_iter().find_map(|currency| {
            let symbol = currency.symbol();
            s.strip_suffix(symbol)
                .or_else(|| s.strip_prefix(symbol))
                .map(|rest| (rest, currency))
        })
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PriceError::UnknownCurrency(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_parse_trailing_euro() {
        let price = Price::parse("99€").unwrap();
        assert_eq!(price.amount(), Decimal::from(99));
        assert_eq!(price.currency(), CurrencyCode::EUR);
    }

    #[test]
    fn test_parse_leading_symbols() {
        assert_eq!(Price::parse("$19.99").unwrap().currency(), CurrencyCode::USD);
        assert_eq!(Price::parse("£5").unwrap().currency(), CurrencyCode::GBP);
        assert_eq!(Price::parse("CA$12").unwrap().currency(), CurrencyCode::CAD);
        assert_eq!(Price::parse("A$12").unwrap().currency(), CurrencyCode::AUD);
    }

    #[test]
    fn test_parse_without_symbol_uses_default_currency() {
        let price = Price::parse(" 149 ").unwrap();
        assert_eq!(price.currency(), CurrencyCode::EUR);
        assert_eq!(price.amount(), Decimal::from(149));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Price::parse(""), Err(PriceError::Empty));
        assert_eq!(Price::parse("€"), Err(PriceError::Empty));
        assert_eq!(Price::parse("-5€"), Err(PriceError::Negative));
        assert!(matches!(
            Price::parse("gratis"),
            Err(PriceError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_display_keeps_glyph_position() {
        assert_eq!(Price::parse("99€").unwrap().to_string(), "99€");
        assert_eq!(Price::parse("$19.99").unwrap().to_string(), "$19.99");
        assert_eq!(
            Price::from_minor_units(14950, CurrencyCode::EUR).to_string(),
            "149.50€"
        );
    }

    #[test]
    fn test_fixed_string_has_two_decimals() {
        assert_eq!(Price::parse("197€").unwrap().to_fixed_string(), "197.00");
        assert_eq!(Price::zero(CurrencyCode::EUR).to_fixed_string(), "0.00");
    }

    #[test]
    fn test_fixed_string_rounds_half_up() {
        assert_eq!(Price::parse("0.125€").unwrap().to_fixed_string(), "0.13");
        assert_eq!(Price::parse("0.135€").unwrap().to_fixed_string(), "0.14");
        assert_eq!(Price::parse("0.124€").unwrap().to_fixed_string(), "0.12");
    }

    #[test]
    fn test_times_and_add() {
        let a = Price::parse("99€").unwrap();
        let b = Price::parse("49€").unwrap().checked_times(2).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().to_fixed_string(), "197.00");
    }

    #[test]
    fn test_arithmetic_overflow_is_an_error() {
        let max = Price::new(Decimal::MAX, CurrencyCode::EUR);
        assert_eq!(max.checked_times(2), Err(PriceError::Overflow));
        assert_eq!(max.checked_add(&max), Err(PriceError::Overflow));
        assert_eq!(max.checked_times(1), Ok(max));
    }

    #[test]
    fn test_add_rejects_currency_mismatch() {
        let eur = Price::parse("1€").unwrap();
        let usd = Price::parse("$1").unwrap();
        assert_eq!(
            eur.checked_add(&usd),
            Err(PriceError::CurrencyMismatch {
                expected: CurrencyCode::EUR,
                found: CurrencyCode::USD,
            })
        );
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("eur".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!("GBP".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
