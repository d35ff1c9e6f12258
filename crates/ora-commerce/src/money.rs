//! Money type for representing prices.
//!
//! Amounts are kept in the smallest unit of the currency (kopecks, cents) as
//! integers so totals never pick up floating-point drift.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whether the symbol is written after the amount.
    fn symbol_trails(&self) -> bool {
        matches!(self, Currency::RUB | Currency::EUR)
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Minor units per whole unit.
    pub fn minor_per_unit(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole units.
    ///
    /// ```
    /// use ora_commerce::money::{Currency, Money};
    /// let price = Money::whole(1500, Currency::RUB);
    /// assert_eq!(price.amount_minor, 150_000);
    /// ```
    pub fn whole(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(currency.minor_per_unit()), currency)
    }

    /// Shorthand for whole roubles, the catalog's native currency.
    pub fn rub(units: i64) -> Self {
        Self::whole(units, Currency::RUB)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Whole units, truncated toward zero.
    pub fn whole_units(&self) -> i64 {
        self.amount_minor / self.currency.minor_per_unit()
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / self.currency.minor_per_unit() as f64
    }

    /// Format for display, e.g. "1 500 ₽" or "$49.99".
    ///
    /// Fractional digits are only shown when the amount has them.
    pub fn display(&self) -> String {
        let per_unit = self.currency.minor_per_unit();
        let units = group_thousands(self.amount_minor.abs() / per_unit);
        let fraction = self.amount_minor.abs() % per_unit;
        let sign = if self.amount_minor < 0 { "-" } else { "" };

        let amount = if fraction == 0 {
            units
        } else {
            let places = self.currency.decimal_places() as usize;
            format!("{}.{:0places$}", units, fraction)
        };

        if self.currency.symbol_trails() {
            format!("{}{} {}", sign, amount, self.currency.symbol())
        } else {
            format!("{}{}{}", sign, self.currency.symbol(), amount)
        }
    }

    /// Try to add another Money value, returning None on currency mismatch
    /// or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Compare two amounts of the same currency.
    pub fn compare(&self, other: &Money) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount_minor.cmp(&other.amount_minor))
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Group digits by thousands with a space, as prices are printed on
/// the storefront.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_whole() {
        let m = Money::rub(1000);
        assert_eq!(m.amount_minor, 100_000);
        assert_eq!(m.whole_units(), 1000);
        assert_eq!(m.currency, Currency::RUB);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::rub(1500).display(), "1 500 \u{20bd}");
        assert_eq!(Money::rub(990).display(), "990 \u{20bd}");
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(-1050, Currency::EUR).display(), "-10.50 \u{20ac}");
    }

    #[test]
    fn test_try_add_rejects_mixed_currency() {
        let rub = Money::rub(10);
        let usd = Money::whole(10, Currency::USD);
        assert!(rub.try_add(&usd).is_none());
        assert_eq!(rub.try_add(&rub).unwrap(), Money::rub(20));
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::RUB);
        assert!(m.try_multiply(2).is_none());
        assert_eq!(Money::rub(3).try_multiply(4).unwrap(), Money::rub(12));
    }

    #[test]
    fn test_ordering_within_currency() {
        assert!(Money::rub(1000) < Money::rub(5000));
        assert!(Money::rub(1).partial_cmp(&Money::whole(1, Currency::USD)).is_none());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("rub"), Some(Currency::RUB));
        assert_eq!(Currency::from_code("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
