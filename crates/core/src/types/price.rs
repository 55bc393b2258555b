//! Type-safe price representation using decimal arithmetic.
//!
//! The catalog backend quotes all prices in rupees as plain JSON numbers,
//! so [`Price`] is a transparent wrapper over [`Decimal`] that keeps exact
//! arithmetic and renders with the ₹ symbol.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of rupees.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Unit price multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_accumulates() {
        let unit = Price::from_rupees(50);
        assert_eq!(unit.times(2), Price::from_rupees(100));
        assert_eq!(unit.times(0), Price::ZERO);
    }

    #[test]
    fn test_sum_of_line_totals() {
        // 2 x 50 + 1 x 30 = 130
        let total: Price = [Price::from_rupees(50).times(2), Price::from_rupees(30).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_rupees(130));
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::from_rupees(2999).to_string(), "₹2999.00");
        assert_eq!(
            Price::new(Decimal::new(79950, 2)).to_string(),
            "₹799.50"
        );
    }

    #[test]
    fn test_deserializes_from_json_number() {
        let price: Price = serde_json::from_str("2999").expect("integer price");
        assert_eq!(price, Price::from_rupees(2999));

        let price: Price = serde_json::from_str("799.5").expect("fractional price");
        assert_eq!(price, Price::new(Decimal::new(7995, 1)));
    }
}
