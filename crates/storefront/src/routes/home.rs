//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use plantpower_core::{Favorites, Meal};

use crate::filters;
use crate::routes::Layout;
use crate::routes::favorites::load_favorites;
use crate::state::AppState;

/// Meal display data for templates.
#[derive(Clone)]
pub struct MealView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub favorited: bool,
}

impl MealView {
    /// Build the display view for a meal.
    ///
    /// Favorited-ness is derived from the canonical favorites set at
    /// render time.
    #[must_use]
    pub fn build(meal: &Meal, favorites: &Favorites) -> Self {
        Self {
            id: meal.id.as_i32(),
            name: meal.name.clone(),
            price: meal.price.to_string(),
            image: meal.image.clone(),
            description: meal.description.clone(),
            favorited: favorites.contains(meal.id),
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub meals: Vec<MealView>,
}

/// Display the home page: the full menu grid.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let favorites = load_favorites(&session).await;
    let meals = state
        .catalog()
        .iter()
        .map(|meal| MealView::build(meal, &favorites))
        .collect();

    HomeTemplate {
        layout: Layout::load(&session).await,
        meals,
    }
}
