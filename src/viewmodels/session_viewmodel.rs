// ============================================================================
// SESSION VIEWMODEL - Dueño del estado + efectos sobre la caché
// ============================================================================
// Cada operación: reduce -> publica estado (notifica a la vista) -> espera el
// efecto de caché. Cuando el future termina la caché ya refleja la transición.
// ============================================================================

use crate::errors::AuthError;
use crate::services::{BrowserStorage, IdentityProvider, KeyValueStore, ListingCache, MockIdentityProvider};
use crate::state::{reduce, AppState, CacheEffect, Event, ReactiveState};

/// ViewModel usado en el navegador
pub type BrowserSessionViewModel = SessionViewModel<BrowserStorage, MockIdentityProvider>;

pub struct SessionViewModel<S: KeyValueStore, P: IdentityProvider> {
    state: ReactiveState<AppState>,
    cache: ListingCache<S>,
    identity: P,
}

impl<S: KeyValueStore, P: IdentityProvider> SessionViewModel<S, P> {
    pub fn new(cache: ListingCache<S>, identity: P) -> Self {
        Self {
            state: ReactiveState::new(AppState::new()),
            cache,
            identity,
        }
    }

    /// Copia del estado actual
    pub fn state(&self) -> AppState {
        self.state.get()
    }

    /// Ejecutar `callback` tras cada cambio publicado
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }

    pub fn cache(&self) -> &ListingCache<S> {
        &self.cache
    }

    /// Lectura inicial de la caché (al arrancar la app)
    pub async fn restore_listings(&self) {
        let listings = self.cache.load().await;
        log::info!("💾 [SESSION] {} empleos restaurados desde caché", listings.len());
        let _ = self.dispatch(Event::ListingsRestored(listings)).await;
    }

    /// Texto del input de usuario; no re-renderiza
    pub fn set_username(&self, username: String) {
        self.dispatch_quiet(Event::UsernameChanged(username));
    }

    /// Texto del input de contraseña; no re-renderiza
    pub fn set_password(&self, password: String) {
        self.dispatch_quiet(Event::PasswordChanged(password));
    }

    /// Login manual con usuario + contraseña
    pub async fn submit_credentials(&self, username: String, password: String) -> Result<(), AuthError> {
        log::info!("🔐 [LOGIN] Login manual para '{}'", username);
        self.dispatch(Event::CredentialsSubmitted { username, password }).await
    }

    /// Login federado a través del proveedor de identidad
    pub async fn federated_login(&self) -> Result<(), AuthError> {
        log::info!("🔐 [LOGIN] Login federado iniciado");
        let result = self.identity.sign_in().await;
        self.dispatch(Event::FederatedLoginFinished(result)).await
    }

    /// Cerrar sesión y borrar la caché. Idempotente.
    pub async fn logout(&self) {
        log::info!("👋 [SESSION] Logout");
        // LoggedOut nunca se rechaza
        let _ = self.dispatch(Event::LoggedOut).await;
    }

    async fn dispatch(&self, event: Event) -> Result<(), AuthError> {
        let current = self.state.get();
        let transition = reduce(&current, event);

        if transition.state != current {
            self.state.set(transition.state);
        }

        if let Some(effect) = transition.effect {
            self.apply(effect).await;
        }

        match transition.rejected {
            Some(error) => {
                // Única línea de log por login rechazado; las vistas no repiten
                match &error {
                    AuthError::ProviderFailed { reason } => {
                        log::warn!("⚠️ [LOGIN] {} ({})", error, reason)
                    }
                    AuthError::MissingCredentials => log::warn!("⚠️ [LOGIN] {}", error),
                }
                Err(error)
            }
            None => Ok(()),
        }
    }

    fn dispatch_quiet(&self, event: Event) {
        let transition = reduce(&self.state.get(), event);
        self.state.set_quiet(transition.state);
    }

    async fn apply(&self, effect: CacheEffect) {
        let result = match &effect {
            CacheEffect::Persist(listings) => self.cache.save(listings).await,
            CacheEffect::Clear => self.cache.clear().await,
        };
        if let Err(e) = result {
            // Un fallo de caché no revierte la transición ya publicada
            log::error!("❌ [CACHE] {} no aplicado: {}", effect_name(&effect), e);
        }
    }
}

impl BrowserSessionViewModel {
    /// ViewModel sobre localStorage con la clave de configuración
    pub fn browser(cache_key: &str) -> Self {
        Self::new(ListingCache::new(BrowserStorage::new(), cache_key), MockIdentityProvider)
    }
}

fn effect_name(effect: &CacheEffect) -> &'static str {
    match effect {
        CacheEffect::Persist(_) => "persist",
        CacheEffect::Clear => "clear",
    }
}
