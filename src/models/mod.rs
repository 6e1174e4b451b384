pub mod job;
pub mod user;
pub mod mock;

pub use job::Job;
pub use user::UserProfile;
pub use mock::{mock_jobs, mock_user};
