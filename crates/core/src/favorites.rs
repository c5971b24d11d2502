//! The user's favorite-meal set.
//!
//! Membership is toggled by the user and always derived state (which meals
//! render with a filled heart) is computed from this set at render time.
//! Iteration is stable in insertion order.

use serde::{Deserialize, Serialize};

use crate::types::MealId;

/// Set of favorited meal identifiers, independent of cart state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    ids: Vec<MealId>,
}

impl Favorites {
    /// Create an empty favorites set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Toggle membership of `id`: remove it if present, else insert it.
    ///
    /// Toggling twice with the same id restores the original set.
    pub fn toggle(&mut self, id: MealId) {
        if let Some(index) = self.ids.iter().position(|&fav| fav == id) {
            self.ids.remove(index);
        } else {
            self.ids.push(id);
        }
    }

    /// Whether `id` is currently favorited.
    #[must_use]
    pub fn contains(&self, id: MealId) -> bool {
        self.ids.contains(&id)
    }

    /// Iterate over favorited ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = MealId> + '_ {
        self.ids.iter().copied()
    }

    /// Number of favorited meals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no meals are favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
