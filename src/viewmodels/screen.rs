// ============================================================================
// SCREEN - Proyección pura del estado a lo que se pinta
// ============================================================================

use crate::state::{AppState, Session};

pub const LOGIN_TITLE: &str = "Login to Job Listings";
pub const LISTINGS_TITLE: &str = "Job Listings";
pub const EMPTY_LISTINGS_TEXT: &str = "No jobs available";
pub const FALLBACK_USER_NAME: &str = "User";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Login(LoginScreen),
    Listings(ListingsScreen),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginScreen {
    pub title: String,
    pub username: String,
    pub password: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingsScreen {
    /// Solo presente si el perfil trae avatar
    pub avatar_url: Option<String>,
    pub greeting: String,
    pub title: String,
    pub body: ListingsBody,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingsBody {
    Empty(String),
    Cards(Vec<JobCard>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobCard {
    pub key: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

/// Proyectar el estado a pantalla
pub fn project(state: &AppState) -> Screen {
    match &state.session {
        Session::LoggedOut => Screen::Login(LoginScreen {
            title: LOGIN_TITLE.to_string(),
            username: state.form.username.clone(),
            password: state.form.password.clone(),
            error: state.form.error.clone().filter(|e| !e.is_empty()),
        }),
        Session::LoggedIn(user) => {
            let name = if user.name.is_empty() {
                FALLBACK_USER_NAME
            } else {
                user.name.as_str()
            };

            let body = if state.listings.is_empty() {
                ListingsBody::Empty(EMPTY_LISTINGS_TEXT.to_string())
            } else {
                ListingsBody::Cards(
                    state
                        .listings
                        .iter()
                        .map(|job| JobCard {
                            key: job.id.clone(),
                            title: job.title.clone(),
                            company: job.company.clone(),
                            description: job.description.clone(),
                        })
                        .collect(),
                )
            };

            Screen::Listings(ListingsScreen {
                avatar_url: user.has_avatar().then(|| user.avatar_url.clone()),
                greeting: format!("Welcome, {}!", name),
                title: LISTINGS_TITLE.to_string(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{mock_jobs, mock_user, UserProfile};

    fn logged_in(user: UserProfile, listings: Vec<crate::models::Job>) -> AppState {
        AppState {
            session: Session::LoggedIn(user),
            listings,
            ..AppState::new()
        }
    }

    #[test]
    fn fresh_install_shows_login_without_error() {
        match project(&AppState::new()) {
            Screen::Login(login) => {
                assert_eq!(login.title, LOGIN_TITLE);
                assert_eq!(login.error, None);
            }
            other => panic!("expected login screen, got {:?}", other),
        }
    }

    #[test]
    fn restored_listings_stay_hidden_while_logged_out() {
        let state = AppState {
            listings: mock_jobs(),
            ..AppState::new()
        };
        assert!(matches!(project(&state), Screen::Login(_)));
    }

    #[test]
    fn login_error_is_projected() {
        let mut state = AppState::new();
        state.form.error = Some("Please enter both username and password".to_string());
        let Screen::Login(login) = project(&state) else {
            panic!("expected login screen");
        };
        assert_eq!(login.error.as_deref(), Some("Please enter both username and password"));
    }

    #[test]
    fn zero_listings_show_empty_message() {
        let Screen::Listings(screen) = project(&logged_in(mock_user(), Vec::new())) else {
            panic!("expected listings screen");
        };
        assert_eq!(screen.body, ListingsBody::Empty(EMPTY_LISTINGS_TEXT.to_string()));
    }

    #[test]
    fn cards_follow_listing_order() {
        let Screen::Listings(screen) = project(&logged_in(mock_user(), mock_jobs())) else {
            panic!("expected listings screen");
        };
        let ListingsBody::Cards(cards) = screen.body else {
            panic!("expected cards");
        };
        let keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["1", "2", "3"]);
        assert_eq!(cards[2].title, "UI/UX Designer");
    }

    #[test]
    fn header_uses_avatar_and_name() {
        let Screen::Listings(screen) = project(&logged_in(mock_user(), mock_jobs())) else {
            panic!("expected listings screen");
        };
        assert_eq!(screen.greeting, "Welcome, John Doe!");
        assert_eq!(screen.avatar_url.as_deref(), Some("https://via.placeholder.com/150"));
    }

    #[test]
    fn manual_login_has_no_avatar() {
        let Screen::Listings(screen) =
            project(&logged_in(UserProfile::from_username("alice"), mock_jobs()))
        else {
            panic!("expected listings screen");
        };
        assert_eq!(screen.avatar_url, None);
        assert_eq!(screen.greeting, "Welcome, alice!");
    }

    #[test]
    fn empty_name_falls_back_to_user() {
        let Screen::Listings(screen) = project(&logged_in(UserProfile::default(), Vec::new())) else {
            panic!("expected listings screen");
        };
        assert_eq!(screen.greeting, "Welcome, User!");
    }
}
