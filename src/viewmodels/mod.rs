pub mod session_viewmodel;
pub mod screen;

pub use session_viewmodel::{SessionViewModel, BrowserSessionViewModel};
pub use screen::{project, Screen, LoginScreen, ListingsScreen, ListingsBody, JobCard};
