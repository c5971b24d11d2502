//! Integration tests for PlantPower.
//!
//! The tests in `tests/` drive a running storefront over HTTP with a
//! cookie-holding client, exercising the session-held cart, favorites,
//! and login flows end to end.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p plantpower-storefront
//!
//! # Run integration tests (ignored by default)
//! cargo test -p plantpower-integration-tests -- --ignored
//! ```
//!
//! Set `STOREFRONT_BASE_URL` to point the tests at a non-default address.

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create a client with a cookie store, so the session survives across
/// requests the way a browser's would.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
