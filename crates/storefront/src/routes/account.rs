//! Account route handlers: profile and settings forms.
//!
//! Both pages require login via the `RequireAuth` extractor; the edited
//! profile lives in the session alongside the identity.

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

use crate::error::Result;
use crate::filters;
use crate::middleware::{RequireAuth, set_current_user};
use crate::models::{CurrentUser, Language, UserProfile, session_keys};
use crate::routes::Layout;

/// One row in the language selector.
#[derive(Clone)]
pub struct LanguageOption {
    pub name: &'static str,
    pub selected: bool,
}

/// Profile display data for the account page.
#[derive(Clone)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub notifications: bool,
    pub dark_mode: bool,
    pub languages: Vec<LanguageOption>,
}

impl From<&UserProfile> for ProfileView {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.to_string(),
            avatar: profile.avatar.clone(),
            notifications: profile.preferences.notifications,
            dark_mode: profile.preferences.dark_mode,
            languages: Language::ALL
                .iter()
                .map(|&language| LanguageOption {
                    name: language.as_str(),
                    selected: language == profile.preferences.language,
                })
                .collect(),
        }
    }
}

/// Profile form data.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

/// Settings form data. Checkboxes submit no value when unchecked.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub notifications: Option<String>,
    #[serde(default)]
    pub dark_mode: Option<String>,
    pub language: Language,
}

/// Query parameters for save/error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub saved: Option<String>,
    pub error: Option<String>,
}

/// Account page template: profile and settings.
#[derive(Template, WebTemplate)]
#[template(path = "account/show.html")]
pub struct AccountTemplate {
    pub layout: Layout,
    pub profile: ProfileView,
    pub saved: bool,
    pub error: Option<String>,
}

/// Get the profile from the session, falling back to a fresh one for the
/// logged-in identity.
async fn load_profile(session: &Session, user: &CurrentUser) -> UserProfile {
    session
        .get::<UserProfile>(session_keys::PROFILE)
        .await
        .ok()
        .flatten()
        .unwrap_or_else(|| UserProfile::for_login(&user.name, user.email.clone()))
}

/// Save the profile to the session.
async fn save_profile(session: &Session, profile: &UserProfile) -> Result<()> {
    session.insert(session_keys::PROFILE, profile).await?;
    Ok(())
}

/// Display the account page.
#[instrument(skip(session))]
pub async fn index(
    RequireAuth(user): RequireAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let profile = load_profile(&session, &user).await;

    let error = query.error.map(|code| match code.as_str() {
        "name" => "Please enter a name.".to_string(),
        "email" => "Please enter a valid email address.".to_string(),
        _ => "Could not save your changes.".to_string(),
    });

    AccountTemplate {
        layout: Layout::load(&session).await,
        profile: ProfileView::from(&profile),
        saved: query.saved.is_some(),
        error,
    }
}

/// Handle profile form submission: name and email.
#[instrument(skip(session, form))]
pub async fn update_profile(
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<ProfileForm>,
) -> Result<Response> {
    let name = form.name.trim();
    if name.is_empty() {
        return Ok(Redirect::to("/account?error=name").into_response());
    }

    let Ok(email) = Email::parse(form.email.trim()) else {
        return Ok(Redirect::to("/account?error=email").into_response());
    };

    let mut profile = load_profile(&session, &user).await;
    profile.name = name.to_string();
    profile.email = email.clone();
    save_profile(&session, &profile).await?;

    // Keep the session identity in step with the edited profile
    let updated = CurrentUser {
        name: name.to_string(),
        email,
    };
    set_current_user(&session, &updated).await?;

    Ok(Redirect::to("/account?saved=1").into_response())
}

/// Handle settings form submission: notifications, dark mode, language.
#[instrument(skip(session, form))]
pub async fn update_settings(
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<SettingsForm>,
) -> Result<Response> {
    let mut profile = load_profile(&session, &user).await;
    profile.preferences.notifications = form.notifications.is_some();
    profile.preferences.dark_mode = form.dark_mode.is_some();
    profile.preferences.language = form.language;
    save_profile(&session, &profile).await?;

    Ok(Redirect::to("/account?saved=1").into_response())
}
