use serde::{Deserialize, Serialize};

/// Oferta de empleo tal como se muestra en el listado y se guarda en caché
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Job {
    /// Identificador único; los blobs antiguos usaban `_id`. Un registro con
    /// `id` y `_id` a la vez es un campo duplicado y el blob entero no se lee.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

impl Job {
    pub fn new(id: &str, title: &str, company: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            description: description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_flat_field_names() {
        let job = Job::new("7", "Tester", "QA Ltd", "Break things.");
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "7",
                "title": "Tester",
                "company": "QA Ltd",
                "description": "Break things."
            })
        );
    }

    #[test]
    fn accepts_legacy_underscore_id() {
        let json = r#"{"_id":"1","title":"Software Engineer","company":"Tech Corp","description":"Develop web applications."}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "1");
        assert_eq!(job.company, "Tech Corp");
    }
}
