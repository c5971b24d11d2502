//! Favorites route handlers.
//!
//! The favorites set lives in the session; the heart button is an HTMX
//! fragment that swaps itself on toggle.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use plantpower_core::{Favorites, MealId};

use crate::filters;
use crate::models::session_keys;
use crate::routes::Layout;
use crate::routes::home::MealView;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the favorites set from the session, or an empty one.
pub(crate) async fn load_favorites(session: &Session) -> Favorites {
    session
        .get::<Favorites>(session_keys::FAVORITES)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Save the favorites set to the session.
pub(crate) async fn save_favorites(
    session: &Session,
    favorites: &Favorites,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::FAVORITES, favorites).await
}

/// Toggle favorite form data.
#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteForm {
    pub meal_id: i32,
}

/// Favorites page template.
#[derive(Template, WebTemplate)]
#[template(path = "favorites/index.html")]
pub struct FavoritesTemplate {
    pub layout: Layout,
    pub meals: Vec<MealView>,
}

/// Heart button fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/favorite_button.html")]
pub struct FavoriteButtonTemplate {
    pub meal: MealView,
}

/// Display the favorites page.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let favorites = load_favorites(&session).await;

    // Favorited meals in toggle order; ids no longer on the menu are skipped
    let meals = favorites
        .iter()
        .filter_map(|id| state.catalog().get(id))
        .map(|meal| MealView::build(meal, &favorites))
        .collect();

    FavoritesTemplate {
        layout: Layout::load(&session).await,
        meals,
    }
}

/// Toggle a favorite (HTMX).
///
/// Returns the heart button fragment reflecting the new state.
#[instrument(skip(state, session))]
pub async fn toggle(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ToggleFavoriteForm>,
) -> Response {
    let id = MealId::new(form.meal_id);
    let Some(meal) = state.catalog().get(id) else {
        tracing::warn!(meal_id = form.meal_id, "Favorite toggle for unknown meal");
        return StatusCode::NOT_FOUND.into_response();
    };

    let mut favorites = load_favorites(&session).await;
    favorites.toggle(id);

    if let Err(e) = save_favorites(&session, &favorites).await {
        tracing::error!("Failed to save favorites to session: {e}");
    }

    FavoriteButtonTemplate {
        meal: MealView::build(meal, &favorites),
    }
    .into_response()
}
