use serde::{Deserialize, Serialize};

/// Perfil del usuario logueado
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl UserProfile {
    /// Perfil creado por el login manual: solo se conoce el nombre
    pub fn from_username(username: &str) -> Self {
        Self {
            name: username.to_string(),
            email: String::new(),
            avatar_url: String::new(),
        }
    }

    pub fn has_avatar(&self) -> bool {
        !self.avatar_url.trim().is_empty()
    }
}
