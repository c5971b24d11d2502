//! User profile and preferences.
//!
//! Plain mutable field bags edited through the account forms. All fields
//! carry defaults until the user changes them; the core logic never reads
//! these.

use serde::{Deserialize, Serialize};

use plantpower_core::Email;

/// A user's editable profile, stored in the session after login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Avatar image path served under `/static`.
    pub avatar: String,
    /// UI preferences.
    pub preferences: Preferences,
}

impl UserProfile {
    /// Profile created at login time for `email`.
    #[must_use]
    pub fn for_login(name: &str, email: Email) -> Self {
        Self {
            name: name.to_owned(),
            email,
            avatar: "/static/images/avatar-placeholder.svg".to_owned(),
            preferences: Preferences::default(),
        }
    }
}

/// UI preferences edited on the settings form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Whether to show notification prompts.
    pub notifications: bool,
    /// Dark color scheme.
    pub dark_mode: bool,
    /// Display language.
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            language: Language::English,
        }
    }
}

/// Display languages offered on the settings form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    /// Every selectable language, in display order.
    pub const ALL: [Self; 4] = [Self::English, Self::Spanish, Self::French, Self::German];

    /// The language name as shown in the selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.notifications);
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.language, Language::English);
    }

    #[test]
    fn test_language_serde_uses_variant_names() {
        let json = serde_json::to_string(&Language::Spanish).expect("serialize");
        assert_eq!(json, "\"Spanish\"");
        let back: Language = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Language::Spanish);
    }

    #[test]
    fn test_profile_for_login() {
        let email = Email::parse("jane@example.com").expect("valid email");
        let profile = UserProfile::for_login("John Doe", email.clone());
        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.email, email);
        assert!(!profile.avatar.is_empty());
    }
}
