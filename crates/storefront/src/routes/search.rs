//! Search route handlers.
//!
//! Suggestions are a live HTMX fragment driven by keystrokes; the search
//! page itself runs an exact-match lookup over the catalog.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::routes::Layout;
use crate::routes::favorites::load_favorites;
use crate::routes::home::MealView;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// A single suggestion row.
#[derive(Clone)]
pub struct SuggestionView {
    pub name: String,
}

/// Search suggestions template (HTMX fragment).
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_suggestions.html")]
pub struct SearchSuggestionsTemplate {
    pub suggestions: Vec<SuggestionView>,
}

/// Full search page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/search.html")]
pub struct SearchPageTemplate {
    pub layout: Layout,
    pub query: String,
    pub result: Option<MealView>,
    pub searched: bool,
}

/// Search suggestions endpoint (HTMX).
///
/// Returns an HTML fragment listing the matching meal names. Queries of
/// a single character or less match nothing, per the catalog policy.
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let query_str = query.q.trim();

    let suggestions = state
        .catalog()
        .suggestions(query_str)
        .into_iter()
        .map(|meal| SuggestionView {
            name: meal.name.clone(),
        })
        .collect();

    SearchSuggestionsTemplate { suggestions }
}

/// Full search page.
///
/// With a `q` parameter, runs the exact-match lookup and renders the
/// single highlighted result (or an empty state).
#[instrument(skip(state, session))]
pub async fn search_page(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let query_str = query.q.trim();
    let searched = !query_str.is_empty();

    let result = if searched {
        let favorites = load_favorites(&session).await;
        state
            .catalog()
            .find_exact(query_str)
            .map(|meal| MealView::build(meal, &favorites))
    } else {
        None
    };

    SearchPageTemplate {
        layout: Layout::load(&session).await,
        query: query_str.to_string(),
        result,
        searched,
    }
}
