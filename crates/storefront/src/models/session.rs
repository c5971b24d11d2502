//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use plantpower_core::Email;

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
}

/// Session keys for per-user state.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the user's editable profile and preferences.
    pub const PROFILE: &str = "profile";

    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for the favorites set.
    pub const FAVORITES: &str = "favorites";
}
