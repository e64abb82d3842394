//! Specialist API models and DTOs

use crate::api::middleware::validation;
use crate::specialist::catalog::Category;
use serde::{Deserialize, Serialize};

/// Request to generate a new specialist template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSpecialistRequest {
    /// Catalog category id (required)
    pub category: String,

    /// Specialty the template should cover (required)
    pub specialty: String,

    /// Free-text requirements for the template (required)
    pub requirements: String,
}

impl GenerateSpecialistRequest {
    /// Validate the generate request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        validation::validate_not_empty(&self.category, "category")?;
        validation::validate_not_empty(&self.specialty, "specialty")?;
        validation::validate_not_empty(&self.requirements, "requirements")?;
        Ok(())
    }
}

/// Specialist response with decoded skill and use-case lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialistResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub prompt: String,
    pub skills: Vec<String>,
    pub use_cases: Vec<String>,
    pub created_at: String,
}

impl SpecialistResponse {
    /// Create a response from the database model
    pub fn from_db_specialist(specialist: crate::db::models::Specialist) -> Self {
        let skills = specialist.skills_vec();
        let use_cases = specialist.use_cases_vec();
        Self {
            id: specialist.id,
            name: specialist.name,
            category: specialist.category,
            description: specialist.description,
            prompt: specialist.prompt,
            skills,
            use_cases,
            created_at: specialist.created_at,
        }
    }
}

/// Catalog response: categories plus all templates
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub categories: Vec<Category>,
    pub templates: Vec<SpecialistResponse>,
}

/// Rendered markdown document for download
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResponse {
    /// Suggested file name
    pub filename: String,
    /// Markdown content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_valid() {
        let req = GenerateSpecialistRequest {
            category: "technical".to_string(),
            specialty: "APIs".to_string(),
            requirements: "versionamento".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_generate_request_missing_fields() {
        let req = GenerateSpecialistRequest {
            category: "technical".to_string(),
            specialty: "".to_string(),
            requirements: "versionamento".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
