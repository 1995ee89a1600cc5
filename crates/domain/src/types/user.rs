//! Signed-in user types
//!
//! The user is owned by the server. The client reads it on bootstrap and
//! may update name, picture and theme; email is never sent back.

use serde::{Deserialize, Serialize};

use super::Theme;

/// Current user as returned by `GET /api/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub theme: Option<Theme>,
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.email)
    }
}

/// Body of `POST /api/auth/google`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCodeExchange {
    pub code: String,
}

/// Successful code exchange: the user plus the session token to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub user: User,
    pub token: String,
}

/// Body of `PUT /api/auth/me`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl ProfileUpdate {
    /// Seed an update with the user's current editable values. An unset name
    /// is seeded with the display name.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.display_name().to_string(),
            profile_picture: user.profile_picture.clone(),
            theme: user.theme,
        }
    }
}
