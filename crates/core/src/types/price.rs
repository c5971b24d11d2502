//! Decimal price arithmetic for catalog and cart amounts.
//!
//! Prices are plain USD amounts backed by [`rust_decimal::Decimal`], so cart
//! math never goes through floating point. Rounding follows standard currency
//! rounding: two decimal places, half-up at the cent boundary.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A USD amount in the currency's standard unit (dollars, not cents).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount (`$0.00`).
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal dollar amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a line quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Round to two decimal places, half-up at the cent boundary.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
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

impl fmt::Display for Price {
    /// Render for display with exactly two fraction digits, e.g. `$6.49`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_fraction_digits() {
        assert_eq!(Price::from_cents(649).to_string(), "$6.49");
        assert_eq!(Price::new(Decimal::new(55, 1)).to_string(), "$5.50");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_times_and_sum() {
        let buddha_bowl = Price::from_cents(649);
        let avocado_toast = Price::from_cents(449);

        let total: Price = [buddha_bowl.times(2), avocado_toast.times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(1747));
    }

    #[test]
    fn test_rounds_half_up_at_cent_boundary() {
        // $0.005 rounds up to $0.01
        let half_cent = Price::new(Decimal::new(5, 3));
        assert_eq!(half_cent.rounded(), Price::from_cents(1));

        // $0.004 rounds down to $0.00
        let below = Price::new(Decimal::new(4, 3));
        assert_eq!(below.rounded(), Price::ZERO);
    }

    #[test]
    fn test_serde_round_trip() {
        let price = Price::from_cents(799);
        let json = serde_json::to_string(&price).expect("serialize");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
