//! Checkout route handlers.
//!
//! Checkout captures the form, reads the cart subtotal, clears the cart,
//! and renders a confirmation. There is no payment backend; the card
//! fields are captured and discarded.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use crate::filters;
use crate::routes::Layout;
use crate::routes::cart::{CartView, load_cart, save_cart};

/// Payment methods offered on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
}

/// Checkout form data. All fields are optional until submit.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub cvv: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutShowTemplate {
    pub layout: Layout,
    pub cart: CartView,
    pub error: Option<String>,
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub layout: Layout,
    pub reference: String,
    pub total: String,
    pub item_count: u32,
    pub placed_at: String,
}

/// Display the checkout form.
///
/// An empty cart has nothing to check out; redirect back to the cart page.
#[instrument(skip(session))]
pub async fn show(session: Session, Query(query): Query<MessageQuery>) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    CheckoutShowTemplate {
        layout: Layout::load(&session).await,
        cart: CartView::from(&cart),
        error: query.error.map(error_message),
    }
    .into_response()
}

/// Handle checkout form submission.
///
/// Reads the cart subtotal and the captured form fields, clears the cart,
/// and renders the confirmation.
#[instrument(skip(session, form))]
pub async fn submit(session: Session, Form(form): Form<CheckoutForm>) -> Response {
    let mut cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }

    if let Err(code) = validate(&form) {
        return Redirect::to(&format!("/checkout?error={code}")).into_response();
    }

    let total = cart.subtotal();
    let item_count = cart.total_quantity();

    cart.clear();
    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to clear cart after checkout: {e}");
    }

    let reference = order_reference();
    tracing::info!(%reference, %total, item_count, "Order placed");

    ConfirmationTemplate {
        layout: Layout::load(&session).await,
        reference,
        total: total.to_string(),
        item_count,
        placed_at: Utc::now().format("%B %-d, %Y at %H:%M UTC").to_string(),
    }
    .into_response()
}

/// Check the captured fields: a cardholder name always, the card fields
/// only when paying by card.
fn validate(form: &CheckoutForm) -> Result<(), &'static str> {
    if is_blank(form.name.as_deref()) {
        return Err("name");
    }

    if form.payment_method == PaymentMethod::Card {
        if is_blank(form.card_number.as_deref()) {
            return Err("card_number");
        }
        if is_blank(form.expiry_date.as_deref()) {
            return Err("expiry_date");
        }
        if is_blank(form.cvv.as_deref()) {
            return Err("cvv");
        }
    }

    Ok(())
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Human-readable message for an error code in the query string.
fn error_message(code: String) -> String {
    match code.as_str() {
        "name" => "Please enter the name on the order.".to_string(),
        "card_number" => "Please enter a card number.".to_string(),
        "expiry_date" => "Please enter the card expiry date.".to_string(),
        "cvv" => "Please enter the card CVV.".to_string(),
        _ => "Please check the form and try again.".to_string(),
    }
}

/// Short order reference shown on the confirmation page.
fn order_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    let short = id.get(..8).unwrap_or(&id);
    format!("PP-{}", short.to_uppercase())
}
