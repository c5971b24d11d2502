//! Domain models for storefront.
//!
//! Everything here is session-held, serializable state: the logged-in
//! identity, the editable profile, and the session key names.

pub mod session;
pub mod user;

pub use session::{CurrentUser, keys as session_keys};
pub use user::{Language, Preferences, UserProfile};
