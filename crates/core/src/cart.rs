//! The cart aggregator.
//!
//! A cart is an ordered collection of (meal, quantity) lines keyed by meal
//! identity. Adding increments-or-inserts, removing decrements-or-deletes,
//! and both are total: no cart operation can fail. The cart is serializable
//! so the storefront can keep it in the session store.
//!
//! Invariants:
//! - quantity >= 1 for every line present
//! - at most one line per meal identifier
//! - lines iterate in insertion order

use serde::{Deserialize, Serialize};

use crate::catalog::Meal;
use crate::types::{MealId, Price};

/// One (meal, quantity) pairing in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog meal this line refers to.
    pub meal: Meal,
    /// Selected quantity, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Unit price x quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.meal.price.times(self.quantity)
    }
}

/// The shopping cart: an insertion-ordered set of lines keyed by meal id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `meal`.
    ///
    /// Increments the existing line for the meal's id, or appends a new
    /// line with quantity 1.
    pub fn add(&mut self, meal: &Meal) {
        match self.lines.iter_mut().find(|line| line.meal.id == meal.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                meal: meal.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove one unit of the meal with `id`.
    ///
    /// A line at quantity 1 is deleted; a higher quantity is decremented;
    /// an absent line is a no-op.
    pub fn remove(&mut self, id: MealId) {
        if let Some(index) = self.lines.iter().position(|line| line.meal.id == id) {
            if let Some(line) = self.lines.get_mut(index) {
                if line.quantity > 1 {
                    line.quantity -= 1;
                } else {
                    self.lines.remove(index);
                }
            }
        }
    }

    /// Sum of unit price x quantity over all lines, rounded to two decimal
    /// places half-up. `$0.00` for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .sum::<Price>()
            .rounded()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Iterate over the lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Delete every line (checkout submission).
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(id: i32, name: &str, cents: i64) -> Meal {
        Meal {
            id: MealId::new(id),
            name: name.to_owned(),
            price: Price::from_cents(cents),
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_increments_or_inserts() {
        let buddha_bowl = meal(1, "Vegan Buddha Bowl", 649);
        let toast = meal(3, "Avocado Toast", 449);

        let mut cart = Cart::new();
        cart.add(&buddha_bowl);
        cart.add(&buddha_bowl);
        cart.add(&toast);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 3);

        let quantities: Vec<u32> = cart.lines().map(|line| line.quantity).collect();
        assert_eq!(quantities, vec![2, 1]);
    }

    #[test]
    fn test_remove_decrements_then_deletes() {
        let curry = meal(4, "Lentil Curry", 799);

        let mut cart = Cart::new();
        cart.add(&curry);
        cart.add(&curry);

        cart.remove(curry.id);
        assert_eq!(cart.total_quantity(), 1);

        cart.remove(curry.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let toast = meal(3, "Avocado Toast", 449);

        let mut cart = Cart::new();
        cart.add(&toast);

        let before = cart.clone();
        cart.remove(MealId::new(99));
        assert_eq!(cart, before);

        let mut empty = Cart::new();
        empty.remove(MealId::new(1));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let buddha_bowl = meal(1, "Vegan Buddha Bowl", 649);
        let toast = meal(3, "Avocado Toast", 449);

        let mut cart = Cart::new();
        cart.add(&buddha_bowl);
        cart.add(&toast);

        let before = cart.clone();
        cart.add(&toast);
        cart.remove(toast.id);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_subtotal_matches_menu_prices() {
        let buddha_bowl = meal(1, "Vegan Buddha Bowl", 649);
        let toast = meal(3, "Avocado Toast", 449);

        let mut cart = Cart::new();
        cart.add(&buddha_bowl);
        cart.add(&buddha_bowl);
        cart.add(&toast);

        assert_eq!(cart.subtotal(), Price::from_cents(1747));
        assert_eq!(cart.subtotal().to_string(), "$17.47");
    }

    #[test]
    fn test_single_quinoa_salad_subtotal() {
        let salad = meal(2, "Quinoa Salad", 549);

        let mut cart = Cart::new();
        cart.add(&salad);

        assert_eq!(cart.subtotal().to_string(), "$5.49");
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        assert_eq!(Cart::new().subtotal().to_string(), "$0.00");
    }

    #[test]
    fn test_clear_deletes_all_lines() {
        let salad = meal(2, "Quinoa Salad", 549);

        let mut cart = Cart::new();
        cart.add(&salad);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let salad = meal(2, "Quinoa Salad", 549);

        let mut cart = Cart::new();
        cart.add(&salad);
        cart.add(&salad);

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
