// ============================================================================
// MOCK DATA - Datos fijos en lugar de backend / proveedor de identidad
// ============================================================================

use crate::models::{Job, UserProfile};

pub const MOCK_USER_NAME: &str = "John Doe";
pub const MOCK_USER_EMAIL: &str = "john.doe@example.com";
pub const MOCK_USER_AVATAR: &str = "https://via.placeholder.com/150";

/// Listado fijo que se carga tras cualquier login
pub fn mock_jobs() -> Vec<Job> {
    vec![
        Job::new("1", "Software Engineer", "Tech Corp", "Develop web applications."),
        Job::new("2", "Product Manager", "Innovate Inc", "Lead product development."),
        Job::new("3", "UI/UX Designer", "Design Studio", "Create user-friendly designs."),
    ]
}

/// Perfil devuelto por el login federado simulado
pub fn mock_user() -> UserProfile {
    UserProfile {
        name: MOCK_USER_NAME.to_string(),
        email: MOCK_USER_EMAIL.to_string(),
        avatar_url: MOCK_USER_AVATAR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mock_job_ids_are_unique() {
        let jobs = mock_jobs();
        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(jobs.len(), 3);
        assert_eq!(ids.len(), jobs.len());
    }
}
