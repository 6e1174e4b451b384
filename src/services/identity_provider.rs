// ============================================================================
// IDENTITY PROVIDER - Login federado (simulado)
// ============================================================================

use crate::errors::AuthError;
use crate::models::{mock_user, UserProfile};

/// Proveedor de identidad externo (p.ej. Google Sign-In)
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn sign_in(&self) -> Result<UserProfile, AuthError>;
}

/// Proveedor simulado: siempre devuelve el perfil de prueba
#[derive(Clone, Copy, Debug, Default)]
pub struct MockIdentityProvider;

impl IdentityProvider for MockIdentityProvider {
    async fn sign_in(&self) -> Result<UserProfile, AuthError> {
        log::info!("🔑 [IDP] Login federado simulado");
        Ok(mock_user())
    }
}
