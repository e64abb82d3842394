//! Specialist template model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A generated specialist template.
///
/// `skills` and `use_cases` are JSON array strings; the catalog layer decodes
/// them when assembling API responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Specialist {
    /// Unique template identifier (UUID string)
    pub id: String,

    /// Template name
    pub name: String,

    /// Catalog category identifier (e.g. "business", "technical")
    pub category: String,

    /// One-line description
    pub description: String,

    /// System prompt for agents created from this template
    pub prompt: String,

    /// Skills as a JSON array string
    pub skills: String,

    /// Use cases as a JSON array string
    pub use_cases: String,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,
}

impl Specialist {
    /// Decode the skills JSON array, tolerating malformed data
    pub fn skills_vec(&self) -> Vec<String> {
        serde_json::from_str(&self.skills).unwrap_or_default()
    }

    /// Decode the use-cases JSON array, tolerating malformed data
    pub fn use_cases_vec(&self) -> Vec<String> {
        serde_json::from_str(&self.use_cases).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Specialist {
        Specialist {
            id: "spec-1".to_string(),
            name: "Requirements Analyst".to_string(),
            category: "business".to_string(),
            description: "Elicits and documents requirements".to_string(),
            prompt: "You are a requirements analyst.".to_string(),
            skills: r#"["Elicitation", "Documentation"]"#.to_string(),
            use_cases: r#"["Project kickoff"]"#.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_skills_decoding() {
        let spec = sample();
        assert_eq!(spec.skills_vec(), vec!["Elicitation", "Documentation"]);
        assert_eq!(spec.use_cases_vec(), vec!["Project kickoff"]);
    }

    #[test]
    fn test_malformed_arrays_tolerated() {
        let mut spec = sample();
        spec.skills = "not json".to_string();
        assert!(spec.skills_vec().is_empty());
    }
}
