// ============================================================================
// SESSION STATE - Sesión y formulario de login
// ============================================================================

use crate::models::UserProfile;

/// Estado de sesión. `LoggedIn` siempre lleva el usuario.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(UserProfile),
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::LoggedIn(user) => Some(user),
            Session::LoggedOut => None,
        }
    }
}

/// Campos transitorios del formulario de login
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

impl LoginForm {
    /// Ambos campos deben tener contenido (sin trim: "  " es válido)
    pub fn has_credentials(username: &str, password: &str) -> bool {
        !username.is_empty() && !password.is_empty()
    }
}
