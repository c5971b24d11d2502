//! Integration tests for the cart flow.
//!
//! These tests require a running storefront (cargo run -p
//! plantpower-storefront). Each test uses its own cookie store, so carts
//! never leak between tests.

use reqwest::StatusCode;

use plantpower_core::Price;
use plantpower_integration_tests::{session_client, storefront_base_url};

/// Add a meal to the cart by id, asserting the request succeeds.
async fn add_to_cart(client: &reqwest::Client, base_url: &str, meal_id: i32) {
    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("meal_id", meal_id.to_string())])
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Cart Flow Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health_check() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_cart_starts_empty() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Your cart is empty."));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_add_and_remove_round_trip() {
    let client = session_client();
    let base_url = storefront_base_url();

    // Two Buddha Bowls and one Avocado Toast
    add_to_cart(&client, &base_url, 1).await;
    add_to_cart(&client, &base_url, 1).await;
    add_to_cart(&client, &base_url, 3).await;

    let resp = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to get cart count");
    let count = resp.text().await.expect("Failed to read body");
    assert_eq!(count.trim(), "3");

    // Cart page shows the expected subtotal: 2 x $6.49 + $4.49
    let expected_subtotal = Price::from_cents(1747).to_string();
    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart page");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains(&expected_subtotal));

    // Remove everything again
    for meal_id in [1, 1, 3] {
        let resp = client
            .post(format!("{base_url}/cart/remove"))
            .form(&[("meal_id", meal_id.to_string())])
            .send()
            .await
            .expect("Failed to remove from cart");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to get cart count");
    let count = resp.text().await.expect("Failed to read body");
    assert_eq!(count.trim(), "0");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_remove_absent_line_is_noop() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/cart/remove"))
        .form(&[("meal_id", "99")])
        .send()
        .await
        .expect("Failed to post remove");

    assert_eq!(resp.status(), StatusCode::OK);
    let count = resp.text().await.expect("Failed to read body");
    assert_eq!(count.trim(), "0");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_checkout_clears_cart() {
    let client = session_client();
    let base_url = storefront_base_url();

    add_to_cart(&client, &base_url, 2).await;

    let resp = client
        .post(format!("{base_url}/checkout"))
        .form(&[
            ("payment_method", "card"),
            ("card_number", "4242 4242 4242 4242"),
            ("expiry_date", "12/27"),
            ("cvv", "123"),
            ("name", "John Doe"),
        ])
        .send()
        .await
        .expect("Failed to submit checkout");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Thank you for your order!"));
    assert!(body.contains("$5.49"));

    // Cart is empty afterwards
    let resp = client
        .get(format!("{base_url}/cart/count"))
        .send()
        .await
        .expect("Failed to get cart count");
    let count = resp.text().await.expect("Failed to read body");
    assert_eq!(count.trim(), "0");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_checkout_with_empty_cart_redirects() {
    let client = session_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("Failed to get checkout page");

    // Redirect lands back on the cart page
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().path().ends_with("/cart"));
}
