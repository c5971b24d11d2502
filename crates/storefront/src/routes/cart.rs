//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself is stored in the session; every mutation loads it,
//! applies the core operation, and saves it back, firing a `cart-updated`
//! trigger so dependent fragments (count badge, items list) refresh.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use plantpower_core::{Cart, CartLine, MealId};

use crate::filters;
use crate::models::session_keys;
use crate::routes::Layout;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub meal_id: i32,
    pub name: String,
    pub image: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }

    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().map(CartLineView::from).collect(),
            subtotal: cart.subtotal().to_string(),
            item_count: cart.total_quantity(),
        }
    }
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            meal_id: line.meal.id.as_i32(),
            name: line.meal.name.clone(),
            image: line.meal.image.clone(),
            unit_price: line.meal.price.to_string(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, or an empty one.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Save the cart to the session.
pub(crate) async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub meal_id: i32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub meal_id: i32,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        layout: Layout::load(&session).await,
        cart: CartView::from(&cart),
    }
}

/// Add a meal to the cart (HTMX).
///
/// Increments the existing line or inserts a new one at quantity 1.
/// Returns the count badge with an HTMX trigger so other fragments update.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let mut cart = load_cart(&session).await;

    match state.catalog().get(MealId::new(form.meal_id)) {
        Some(meal) => {
            cart.add(meal);
            if let Err(e) = save_cart(&session, &cart).await {
                tracing::error!("Failed to save cart to session: {e}");
            }
        }
        None => {
            // Unknown id: logged no-op, the badge still renders
            tracing::warn!(meal_id = form.meal_id, "Add to cart for unknown meal");
        }
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_quantity(),
        },
    )
        .into_response()
}

/// Remove one unit of a meal from the cart (HTMX).
///
/// Deletes the line when it reaches zero; removing an absent line is a
/// no-op, matching the cart semantics.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.remove(MealId::new(form.meal_id));

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate {
            count: cart.total_quantity(),
        },
    )
        .into_response()
}

/// Get the cart items fragment (HTMX).
#[instrument(skip(session))]
pub async fn items(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartItemsTemplate {
        cart: CartView::from(&cart),
    }
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartCountTemplate {
        count: cart.total_quantity(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantpower_core::{Meal, Price};

    fn meal(id: i32, name: &str, cents: i64) -> Meal {
        Meal {
            id: MealId::new(id),
            name: name.to_string(),
            price: Price::from_cents(cents),
            image: String::new(),
            description: String::new(),
        }
    }

    #[test]
    fn test_cart_view_formats_totals() {
        let mut cart = Cart::new();
        cart.add(&meal(1, "Vegan Buddha Bowl", 649));
        cart.add(&meal(1, "Vegan Buddha Bowl", 649));
        cart.add(&meal(3, "Avocado Toast", 449));

        let view = CartView::from(&cart);
        assert_eq!(view.subtotal, "$17.47");
        assert_eq!(view.item_count, 3);
        assert_eq!(view.lines.len(), 2);

        let first = view.lines.first().expect("line present");
        assert_eq!(first.quantity, 2);
        assert_eq!(first.unit_price, "$6.49");
        assert_eq!(first.line_total, "$12.98");
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert!(view.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);

        assert_eq!(CartView::from(&Cart::new()).subtotal, "$0.00");
    }
}
