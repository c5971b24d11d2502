//! The static catalog supplier.
//!
//! The menu is fixed: six plant-based meals compiled into the binary and
//! loaded into a [`Catalog`] once at process start.

use plantpower_core::{Catalog, Meal, MealId, Price};

/// Build the fixed meal catalog.
#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        meal(
            1,
            "Vegan Buddha Bowl",
            649,
            "A nourishing bowl filled with quinoa, roasted vegetables, and tahini dressing.",
        ),
        meal(
            2,
            "Quinoa Salad",
            549,
            "Fresh mixed greens with quinoa, cherry tomatoes, and a zesty lemon vinaigrette.",
        ),
        meal(
            3,
            "Avocado Toast",
            449,
            "Creamy avocado spread on artisanal whole grain toast, topped with microgreens.",
        ),
        meal(
            4,
            "Lentil Curry",
            799,
            "Hearty red lentils simmered in a fragrant coconut curry sauce, served with brown rice.",
        ),
        meal(
            5,
            "Mushroom Risotto",
            849,
            "Creamy Arborio rice cooked with a medley of wild mushrooms and truffle oil.",
        ),
        meal(
            6,
            "Veggie Burger",
            599,
            "A plant-based patty made with black beans and quinoa, served on a whole wheat bun.",
        ),
    ])
}

fn meal(id: i32, name: &str, cents: i64, description: &str) -> Meal {
    Meal {
        id: MealId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        image: "/static/images/meals/placeholder.svg".to_owned(),
        description: description.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_meals_with_unique_ids() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);

        let mut ids: Vec<i32> = catalog.iter().map(|m| m.id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_menu_prices() {
        let catalog = catalog();
        let price_of = |name: &str| {
            catalog
                .find_exact(name)
                .map(|m| m.price.to_string())
                .expect("meal on menu")
        };

        assert_eq!(price_of("Vegan Buddha Bowl"), "$6.49");
        assert_eq!(price_of("Quinoa Salad"), "$5.49");
        assert_eq!(price_of("Avocado Toast"), "$4.49");
        assert_eq!(price_of("Lentil Curry"), "$7.99");
        assert_eq!(price_of("Mushroom Risotto"), "$8.49");
        assert_eq!(price_of("Veggie Burger"), "$5.99");
    }
}
