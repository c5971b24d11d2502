//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (full menu)
//! GET  /health                 - Health check
//!
//! # Search
//! GET  /search                 - Search page (?q= runs exact-match lookup)
//! GET  /search/suggest         - Live suggestions fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a meal (returns count badge, triggers cart-updated)
//! POST /cart/remove            - Decrement/remove a line (returns count badge, triggers cart-updated)
//! GET  /cart/items             - Cart items fragment
//! GET  /cart/count             - Cart count badge fragment
//!
//! # Checkout
//! GET  /checkout               - Checkout form (redirects to /cart when empty)
//! POST /checkout               - Capture form, clear cart, show confirmation
//!
//! # Favorites
//! GET  /favorites              - Favorites page
//! POST /favorites/toggle       - Toggle a favorite (returns heart button fragment)
//!
//! # Notifications
//! GET  /notifications          - Notifications page
//!
//! # Auth (mock login)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! POST /auth/logout            - Logout action
//!
//! # Account (requires auth)
//! GET  /account                - Profile & settings
//! POST /account/profile        - Update name / email
//! POST /account/settings       - Update preferences
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod favorites;
pub mod home;
pub mod notifications;
pub mod search;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, UserProfile, session_keys};
use crate::state::AppState;

/// Data every full page template needs for the shared chrome: header,
/// bottom navigation, and the cart badge.
///
/// Derived from the session on each request; nothing here is cached in
/// duplicated flags.
#[derive(Clone, Default)]
pub struct Layout {
    /// Logged-in identity, if any.
    pub current_user: Option<CurrentUser>,
    /// Units in the cart, for the badge's initial render.
    pub cart_count: u32,
    /// Dark color scheme preference.
    pub dark_mode: bool,
}

impl Layout {
    /// Build the layout context from the session.
    pub async fn load(session: &Session) -> Self {
        let current_user = session
            .get::<CurrentUser>(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();

        let cart_count = cart::load_cart(session).await.total_quantity();

        let dark_mode = session
            .get::<UserProfile>(session_keys::PROFILE)
            .await
            .ok()
            .flatten()
            .is_some_and(|profile| profile.preferences.dark_mode);

        Self {
            current_user,
            cart_count,
            dark_mode,
        }
    }
}

/// Create the search routes router.
pub fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(search::search_page))
        .route("/suggest", get(search::suggest))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/items", get(cart::items))
        .route("/count", get(cart::count))
}

/// Create the favorites routes router.
pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favorites::index))
        .route("/toggle", post(favorites::toggle))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route("/profile", post(account::update_profile))
        .route("/settings", post(account::update_settings))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Search routes
        .nest("/search", search_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route(
            "/checkout",
            get(checkout::show).post(checkout::submit),
        )
        // Favorites routes
        .nest("/favorites", favorites_routes())
        // Notifications
        .route("/notifications", get(notifications::index))
        // Auth routes
        .nest("/auth", auth_routes())
        // Account routes
        .nest("/account", account_routes())
}
