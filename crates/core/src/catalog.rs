//! The fixed meal catalog and its search operations.
//!
//! The catalog is built once at process start from a static list and never
//! changes afterwards, so every operation here is a pure read over an
//! immutable, ordered collection.

use serde::{Deserialize, Serialize};

use crate::types::{MealId, Price};

/// Minimum query length (in characters) before suggestions are produced.
///
/// Single-character queries match too much of the menu to be useful, so
/// they return nothing.
pub const MIN_SUGGESTION_QUERY_LEN: usize = 2;

/// An orderable meal.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Unique identifier within the catalog.
    pub id: MealId,
    /// Display name, unique in practice.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Image path served under `/static`.
    pub image: String,
    /// Short menu description.
    pub description: String,
}

/// The fixed, ordered set of orderable meals.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    meals: Vec<Meal>,
}

impl Catalog {
    /// Build a catalog from an ordered list of meals.
    #[must_use]
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// Look up a meal by identifier.
    #[must_use]
    pub fn get(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|meal| meal.id == id)
    }

    /// All meals whose name contains `query` as a case-insensitive
    /// substring, in catalog order.
    ///
    /// Queries shorter than [`MIN_SUGGESTION_QUERY_LEN`] characters produce
    /// no suggestions.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<&Meal> {
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.meals
            .iter()
            .filter(|meal| meal.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The first meal whose name case-insensitively equals `query`.
    ///
    /// Names are unique in practice; on a tie the first match in catalog
    /// order wins.
    #[must_use]
    pub fn find_exact(&self, query: &str) -> Option<&Meal> {
        let needle = query.to_lowercase();
        self.meals
            .iter()
            .find(|meal| meal.name.to_lowercase() == needle)
    }

    /// Iterate over all meals in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Meal> {
        self.meals.iter()
    }

    /// Number of meals in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Meal;
    type IntoIter = core::slice::Iter<'a, Meal>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.iter()
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
            image: format!("/static/images/meals/{id}.jpg"),
            description: String::new(),
        }
    }

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            meal(1, "Vegan Buddha Bowl", 649),
            meal(2, "Quinoa Salad", 549),
            meal(3, "Avocado Toast", 449),
            meal(4, "Lentil Curry", 799),
        ])
    }

    #[test]
    fn test_short_queries_produce_no_suggestions() {
        let catalog = test_catalog();
        assert!(catalog.suggestions("").is_empty());
        assert!(catalog.suggestions("q").is_empty());
        assert!(catalog.suggestions("V").is_empty());
    }

    #[test]
    fn test_suggestions_match_case_insensitive_substring() {
        let catalog = test_catalog();

        let names: Vec<&str> = catalog
            .suggestions("QUINOA")
            .iter()
            .map(|meal| meal.name.as_str())
            .collect();
        assert_eq!(names, vec!["Quinoa Salad"]);

        // Substring in the middle of a name matches too
        let names: Vec<&str> = catalog
            .suggestions("oa")
            .iter()
            .map(|meal| meal.name.as_str())
            .collect();
        assert_eq!(names, vec!["Quinoa Salad", "Avocado Toast"]);
    }

    #[test]
    fn test_every_meal_is_suggested_for_its_own_name() {
        let catalog = test_catalog();
        for meal in catalog.iter() {
            let suggested = catalog.suggestions(&meal.name);
            assert!(
                suggested.iter().any(|m| m.id == meal.id),
                "{} missing from its own suggestions",
                meal.name
            );
        }
    }

    #[test]
    fn test_suggestions_preserve_catalog_order() {
        let catalog = test_catalog();
        // "a" appears in every name; use a two-char query hitting several
        let ids: Vec<i32> = catalog
            .suggestions("al")
            .iter()
            .map(|meal| meal.id.as_i32())
            .collect();
        assert_eq!(ids, vec![2]);

        let ids: Vec<i32> = catalog
            .suggestions("an")
            .iter()
            .map(|meal| meal.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_find_exact_ignores_case() {
        let catalog = test_catalog();
        let found = catalog.find_exact("avocado toast").expect("match");
        assert_eq!(found.id, MealId::new(3));
        assert!(catalog.find_exact("Avocado").is_none());
        assert!(catalog.find_exact("").is_none());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = test_catalog();
        assert_eq!(
            catalog.get(MealId::new(2)).map(|m| m.name.as_str()),
            Some("Quinoa Salad")
        );
        assert!(catalog.get(MealId::new(99)).is_none());
    }
}
