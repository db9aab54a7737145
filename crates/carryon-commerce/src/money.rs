//! Money type for representing prices.
//!
//! Uses cents-based integer representation so the cart summary (10% off,
//! flat shipping) stays exact. On the wire a price is a plain decimal number
//! like the product dataset uses (`250`, `49.99`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

/// Symbol used when formatting prices.
pub const CURRENCY_SYMBOL: &str = "$";

const CENTS_PER_UNIT: i64 = 100;

/// A monetary value in the storefront's single currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from whole currency units.
    pub const fn from_units(units: i64) -> Self {
        Self::new(units * CENTS_PER_UNIT)
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use carryon_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Whether the amount has no fractional cents part.
    pub fn is_whole(&self) -> bool {
        self.amount_cents % CENTS_PER_UNIT == 0
    }

    /// Format for display: `$250` for whole amounts, `$49.99` otherwise.
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without the symbol.
    pub fn display_amount(&self) -> String {
        if self.is_whole() {
            format!("{}", self.amount_cents / CENTS_PER_UNIT)
        } else {
            format!("{:.2}", self.to_decimal())
        }
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn checked_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Calculate a percentage of this amount, rounded to the nearest cent.
    pub fn percentage(&self, percent: u32) -> Money {
        let scaled = self.amount_cents as i128 * percent as i128;
        let rounded = (scaled + scaled.signum() * 50) / 100;
        Money::new(rounded as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_i64(self.amount_cents / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Whole(i64),
            Decimal(f64),
        }

        let money = match RawPrice::deserialize(deserializer)? {
            RawPrice::Whole(units) => units
                .checked_mul(CENTS_PER_UNIT)
                .map(Money::new)
                .ok_or_else(|| serde::de::Error::custom("price out of range"))?,
            RawPrice::Decimal(amount) if amount.is_finite() => Money::from_decimal(amount),
            RawPrice::Decimal(_) => return Err(serde::de::Error::custom("price is not finite")),
        };

        if money.is_negative() {
            return Err(serde::de::Error::custom("price must not be negative"));
        }
        Ok(money)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_units() {
        assert_eq!(Money::from_units(30).amount_cents, 3000);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_units(2730).display(), "$2730");
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(4950).display(), "$49.50");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(4);
        assert_eq!((a + b).amount_cents, 1400);
        assert_eq!((a - b).amount_cents, 600);
        assert_eq!((a * 3).amount_cents, 3000);
        assert_eq!(
            vec![a, b, b].into_iter().sum::<Money>().amount_cents,
            1800
        );
    }

    #[test]
    fn test_money_percentage() {
        assert_eq!(Money::from_units(3000).percentage(10), Money::from_units(300));
        // 10% of $0.05 rounds half away from zero
        assert_eq!(Money::new(5).percentage(10), Money::new(1));
    }

    #[test]
    fn test_money_checked_multiply_overflow() {
        assert!(Money::new(i64::MAX).checked_multiply(2).is_none());
        assert_eq!(Money::new(250).checked_multiply(2), Some(Money::new(500)));
    }

    #[test]
    fn test_money_serializes_as_decimal_number() {
        assert_eq!(serde_json::to_string(&Money::from_units(250)).unwrap(), "250");
        assert_eq!(serde_json::to_string(&Money::new(4999)).unwrap(), "49.99");
    }

    #[test]
    fn test_money_deserializes_integers_and_decimals() {
        let whole: Money = serde_json::from_str("250").unwrap();
        assert_eq!(whole, Money::from_units(250));

        let decimal: Money = serde_json::from_str("49.99").unwrap();
        assert_eq!(decimal, Money::new(4999));
    }

    #[test]
    fn test_money_rejects_negative_prices() {
        assert!(serde_json::from_str::<Money>("-1").is_err());
        assert!(serde_json::from_str::<Money>("\"12\"").is_err());
    }
}
