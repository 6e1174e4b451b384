// ============================================================================
// ERRORS - Errores de autenticación y de almacenamiento local
// ============================================================================

use thiserror::Error;

/// Errores visibles para el usuario en el formulario de login
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both username and password")]
    MissingCredentials,

    /// El proveedor de identidad rechazó o no completó el login federado.
    /// `reason` solo va a los logs, el usuario ve el mensaje genérico.
    #[error("Google login failed")]
    ProviderFailed { reason: String },
}

/// Errores del almacenamiento clave-valor (localStorage o memoria)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No se pudo acceder a localStorage")]
    Unavailable,

    #[error("Error leyendo '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Error guardando '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Error serializando datos: {0}")]
    Serialize(#[from] serde_json::Error),
}
