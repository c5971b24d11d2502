//! Authentication route handlers.
//!
//! Login is a mock: any credentials with a well-formed email and a
//! non-empty password are accepted, and a canned identity is stored in
//! the session. There is no password verification and no user store.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use plantpower_core::Email;

use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::{CurrentUser, UserProfile, session_keys};
use crate::routes::Layout;

/// Display name assigned by the mock login.
const MOCK_DISPLAY_NAME: &str = "John Doe";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
    pub error: Option<String>,
}

/// Display the login page.
#[instrument(skip(session))]
pub async fn login_page(session: Session, Query(query): Query<MessageQuery>) -> impl IntoResponse {
    let error = query.error.map(|code| match code.as_str() {
        "email" => "Please enter a valid email address.".to_string(),
        "password" => "Please enter a password.".to_string(),
        _ => "Login failed, please try again.".to_string(),
    });

    LoginTemplate {
        layout: Layout::load(&session).await,
        error,
    }
}

/// Handle login form submission.
///
/// Accepts any credentials whose email parses and whose password is
/// non-empty, then stores the canned identity and a fresh profile.
#[instrument(skip(session, form))]
pub async fn login(session: Session, Form(form): Form<LoginForm>) -> Response {
    let Ok(email) = Email::parse(form.email.trim()) else {
        return Redirect::to("/auth/login?error=email").into_response();
    };

    if form.password.is_empty() {
        return Redirect::to("/auth/login?error=password").into_response();
    }

    let user = CurrentUser {
        name: MOCK_DISPLAY_NAME.to_string(),
        email: email.clone(),
    };

    if let Err(e) = set_current_user(&session, &user).await {
        tracing::error!("Failed to set session: {e}");
        return Redirect::to("/auth/login?error=session").into_response();
    }

    let profile = UserProfile::for_login(MOCK_DISPLAY_NAME, email);
    if let Err(e) = session.insert(session_keys::PROFILE, &profile).await {
        tracing::error!("Failed to store profile in session: {e}");
    }

    tracing::info!(email = %user.email, "User logged in");
    Redirect::to("/account").into_response()
}

/// Handle logout.
///
/// Clears the identity and profile; the cart and favorites stay with the
/// session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session user: {e}");
    }
    if let Err(e) = session.remove::<UserProfile>(session_keys::PROFILE).await {
        tracing::error!("Failed to clear session profile: {e}");
    }

    Redirect::to("/").into_response()
}
