// ============================================================================
// APP STATE - Estado global inmutable + reducer
// ============================================================================
// El estado nunca se muta en sitio: cada evento produce un AppState nuevo y,
// si hace falta, un efecto sobre la caché que ejecuta el ViewModel.
// ============================================================================

use crate::errors::AuthError;
use crate::models::{mock_jobs, Job, UserProfile};
use crate::state::session_state::{LoginForm, Session};

/// Estado global de la aplicación
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppState {
    pub session: Session,
    pub form: LoginForm,
    pub listings: Vec<Job>,
}

/// Eventos que cambian el estado
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Resultado de la lectura de caché al arrancar
    ListingsRestored(Vec<Job>),
    UsernameChanged(String),
    PasswordChanged(String),
    CredentialsSubmitted { username: String, password: String },
    FederatedLoginFinished(Result<UserProfile, AuthError>),
    LoggedOut,
}

/// Efecto sobre la caché que debe aplicarse tras la transición
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheEffect {
    Persist(Vec<Job>),
    Clear,
}

/// Resultado de aplicar un evento
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effect: Option<CacheEffect>,
    /// Error de login mostrado en el formulario, si el evento fue rechazado
    pub rejected: Option<AuthError>,
}

impl Transition {
    fn unchanged(state: &AppState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
            rejected: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.user()
    }

    /// Estado tras un login correcto: sesión abierta + listado fijo
    fn logged_in(&self, user: UserProfile) -> (AppState, CacheEffect) {
        let listings = mock_jobs();
        let state = AppState {
            session: Session::LoggedIn(user),
            form: LoginForm {
                error: None,
                ..self.form.clone()
            },
            listings: listings.clone(),
        };
        (state, CacheEffect::Persist(listings))
    }

    fn rejected(&self, error: AuthError) -> Transition {
        let mut state = self.clone();
        state.form.error = Some(error.to_string());
        Transition {
            state,
            effect: None,
            rejected: Some(error),
        }
    }
}

/// Reducer puro: (estado, evento) -> transición
pub fn reduce(state: &AppState, event: Event) -> Transition {
    match event {
        Event::ListingsRestored(listings) => {
            let mut next = state.clone();
            next.listings = listings;
            Transition {
                state: next,
                effect: None,
                rejected: None,
            }
        }
        Event::UsernameChanged(username) => {
            let mut next = state.clone();
            next.form.username = username;
            Transition {
                state: next,
                effect: None,
                rejected: None,
            }
        }
        Event::PasswordChanged(password) => {
            let mut next = state.clone();
            next.form.password = password;
            Transition {
                state: next,
                effect: None,
                rejected: None,
            }
        }
        Event::CredentialsSubmitted { username, password } => {
            if state.is_logged_in() {
                return Transition::unchanged(state);
            }
            let mut with_input = state.clone();
            with_input.form.username = username.clone();
            with_input.form.password = password.clone();

            if !LoginForm::has_credentials(&username, &password) {
                return with_input.rejected(AuthError::MissingCredentials);
            }

            let (next, effect) = with_input.logged_in(UserProfile::from_username(&username));
            Transition {
                state: next,
                effect: Some(effect),
                rejected: None,
            }
        }
        Event::FederatedLoginFinished(result) => {
            if state.is_logged_in() {
                return Transition::unchanged(state);
            }
            match result {
                Ok(user) => {
                    let (next, effect) = state.logged_in(user);
                    Transition {
                        state: next,
                        effect: Some(effect),
                        rejected: None,
                    }
                }
                Err(error) => state.rejected(error),
            }
        }
        Event::LoggedOut => Transition {
            state: AppState::new(),
            effect: Some(CacheEffect::Clear),
            rejected: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mock_user;

    fn submit(state: &AppState, username: &str, password: &str) -> Transition {
        reduce(
            state,
            Event::CredentialsSubmitted {
                username: username.to_string(),
                password: password.to_string(),
            },
        )
    }

    #[test]
    fn empty_username_is_rejected() {
        let t = submit(&AppState::new(), "", "x");

        assert!(!t.state.is_logged_in());
        assert_eq!(t.rejected, Some(AuthError::MissingCredentials));
        assert_eq!(
            t.state.form.error.as_deref(),
            Some("Please enter both username and password")
        );
        assert_eq!(t.effect, None);
        assert!(t.state.listings.is_empty());
    }

    #[test]
    fn empty_password_is_rejected() {
        let t = submit(&AppState::new(), "alice", "");
        assert!(!t.state.is_logged_in());
        assert_eq!(t.rejected, Some(AuthError::MissingCredentials));
    }

    #[test]
    fn rejected_submit_keeps_restored_listings() {
        let restored = reduce(&AppState::new(), Event::ListingsRestored(mock_jobs())).state;
        let t = submit(&restored, "", "");
        assert_eq!(t.state.listings, mock_jobs());
    }

    #[test]
    fn valid_credentials_log_in_with_mock_listings() {
        let t = submit(&AppState::new(), "alice", "pw");

        let user = t.state.user().expect("user after login");
        assert_eq!(user.name, "alice");
        assert_eq!(user.email, "");
        assert_eq!(user.avatar_url, "");
        assert_eq!(t.state.listings.len(), 3);
        assert_eq!(t.effect, Some(CacheEffect::Persist(mock_jobs())));
        assert_eq!(t.rejected, None);
    }

    #[test]
    fn successful_login_clears_previous_error() {
        let failed = submit(&AppState::new(), "alice", "").state;
        assert!(failed.form.error.is_some());

        let t = submit(&failed, "alice", "pw");
        assert_eq!(t.state.form.error, None);
    }

    #[test]
    fn federated_login_uses_provider_profile() {
        let t = reduce(&AppState::new(), Event::FederatedLoginFinished(Ok(mock_user())));

        assert_eq!(t.state.user().map(|u| u.name.as_str()), Some("John Doe"));
        assert_eq!(t.state.listings, mock_jobs());
        assert_eq!(t.effect, Some(CacheEffect::Persist(mock_jobs())));
    }

    #[test]
    fn federated_failure_stays_logged_out() {
        let t = reduce(
            &AppState::new(),
            Event::FederatedLoginFinished(Err(AuthError::ProviderFailed {
                reason: "cancelled".to_string(),
            })),
        );

        assert!(!t.state.is_logged_in());
        assert_eq!(t.state.form.error.as_deref(), Some("Google login failed"));
        assert_eq!(t.effect, None);
    }

    #[test]
    fn login_while_logged_in_is_ignored() {
        let logged = submit(&AppState::new(), "alice", "pw").state;

        let again = submit(&logged, "bob", "pw");
        assert_eq!(again.state, logged);
        assert_eq!(again.effect, None);

        let federated = reduce(&logged, Event::FederatedLoginFinished(Ok(mock_user())));
        assert_eq!(federated.state, logged);
        assert_eq!(federated.effect, None);
    }

    #[test]
    fn logout_resets_everything() {
        let mut logged = submit(&AppState::new(), "alice", "pw").state;
        logged.form.error = Some("stale".to_string());

        let t = reduce(&logged, Event::LoggedOut);

        assert_eq!(t.state, AppState::new());
        assert_eq!(t.state.user(), None);
        assert_eq!(t.effect, Some(CacheEffect::Clear));
    }

    #[test]
    fn logout_twice_matches_logout_once() {
        let logged = reduce(&AppState::new(), Event::FederatedLoginFinished(Ok(mock_user()))).state;

        let once = reduce(&logged, Event::LoggedOut);
        let twice = reduce(&once.state, Event::LoggedOut);

        assert_eq!(once.state, twice.state);
        assert_eq!(once.effect, twice.effect);
    }

    #[test]
    fn restored_listings_do_not_change_session() {
        let t = reduce(&AppState::new(), Event::ListingsRestored(mock_jobs()));
        assert!(!t.state.is_logged_in());
        assert_eq!(t.state.listings.len(), 3);
        assert_eq!(t.effect, None);
    }

    #[test]
    fn typing_updates_form_fields() {
        let s = reduce(&AppState::new(), Event::UsernameChanged("al".to_string())).state;
        let s = reduce(&s, Event::PasswordChanged("secret".to_string())).state;
        assert_eq!(s.form.username, "al");
        assert_eq!(s.form.password, "secret");
        assert!(!s.is_logged_in());
    }
}
