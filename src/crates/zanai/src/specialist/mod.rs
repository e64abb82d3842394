//! Specialist template catalog and generation.
//!
//! The catalog merges the built-in seed templates with generated templates
//! persisted in the database. Generation asks the completion provider for a
//! structured template and falls back to a deterministic skeleton when the
//! provider is absent or fails.

pub mod catalog;
pub mod markdown;

use crate::db::models::Specialist;
use crate::db::repositories::SpecialistRepository;
use crate::db::DatabaseConnection;
use catalog::Category;
use llm::{ChatModel, ChatRequest, Message};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Errors surfaced by the specialist service.
#[derive(Debug, Error)]
pub enum SpecialistError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Specialist not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fields the provider is asked to produce for a new template.
#[derive(Debug, Deserialize)]
struct GeneratedFields {
    name: String,
    description: String,
    prompt: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    use_cases: Vec<String>,
}

/// Catalog queries and template generation.
#[derive(Clone)]
pub struct SpecialistService {
    db: DatabaseConnection,
    model: Option<Arc<dyn ChatModel>>,
    timeout: Duration,
}

impl SpecialistService {
    pub fn new(
        db: DatabaseConnection,
        model: Option<Arc<dyn ChatModel>>,
        timeout: Duration,
    ) -> Self {
        Self { db, model, timeout }
    }

    /// The full catalog: generated templates (newest first) followed by the
    /// built-in seeds.
    pub async fn catalog(&self) -> Result<(Vec<Category>, Vec<Specialist>), sqlx::Error> {
        let mut templates = SpecialistRepository::list(self.db.pool()).await?;
        templates.extend(catalog::seed_templates());
        Ok((catalog::categories(), templates))
    }

    /// Look up a template by id, checking generated templates then seeds.
    pub async fn get(&self, id: &str) -> Result<Specialist, SpecialistError> {
        if let Some(specialist) = SpecialistRepository::get_by_id(self.db.pool(), id).await? {
            return Ok(specialist);
        }
        catalog::seed_templates()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(SpecialistError::NotFound)
    }

    /// Generate and persist a new template.
    pub async fn generate(
        &self,
        category: &str,
        specialty: &str,
        requirements: &str,
    ) -> Result<Specialist, SpecialistError> {
        if !catalog::is_known_category(category) {
            return Err(SpecialistError::UnknownCategory(category.to_string()));
        }

        let fields = match self.generate_fields(category, specialty, requirements).await {
            Some(fields) => fields,
            None => skeleton_fields(specialty, requirements),
        };

        let specialist = Specialist {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            category: category.to_string(),
            description: fields.description,
            prompt: fields.prompt,
            skills: serde_json::to_string(&fields.skills).unwrap_or_else(|_| "[]".to_string()),
            use_cases: serde_json::to_string(&fields.use_cases)
                .unwrap_or_else(|_| "[]".to_string()),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        Ok(SpecialistRepository::create(self.db.pool(), &specialist).await?)
    }

    /// Render a template as a downloadable markdown document.
    pub async fn download(&self, id: &str) -> Result<(Specialist, String), SpecialistError> {
        let specialist = self.get(id).await?;
        let document = markdown::render(&specialist);
        Ok((specialist, document))
    }

    async fn generate_fields(
        &self,
        category: &str,
        specialty: &str,
        requirements: &str,
    ) -> Option<GeneratedFields> {
        let model = self.model.as_ref()?;

        let system = "Voce gera templates de agentes especialistas. Responda \
                      somente com um objeto JSON com as chaves: name, \
                      description, prompt, skills (lista de strings) e \
                      use_cases (lista de strings).";
        let user = format!(
            "Categoria: {category}\nEspecialidade: {specialty}\nRequisitos: {requirements}"
        );
        let request = ChatRequest::new(vec![Message::system(system), Message::user(user)]);

        match tokio::time::timeout(self.timeout, model.chat(request)).await {
            Ok(Ok(response)) => {
                let parsed = parse_generated(response.text());
                if parsed.is_none() {
                    warn!(category, specialty, "unparseable generation response, using skeleton");
                }
                parsed
            }
            Ok(Err(err)) => {
                warn!(category, specialty, error = %err, "generation call failed, using skeleton");
                None
            }
            Err(_) => {
                warn!(category, specialty, "generation call timed out, using skeleton");
                None
            }
        }
    }
}

/// Extract the generated fields from the provider's reply, tolerating prose
/// or code fences around the JSON object.
fn parse_generated(text: &str) -> Option<GeneratedFields> {
    let trimmed = text.trim();
    if let Ok(fields) = serde_json::from_str::<GeneratedFields>(trimmed) {
        return Some(fields);
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if start >= end {
        return None;
    }
    serde_json::from_str(&trimmed[start..=end]).ok()
}

/// Deterministic fallback when no provider output is available.
fn skeleton_fields(specialty: &str, requirements: &str) -> GeneratedFields {
    GeneratedFields {
        name: format!("Especialista em {specialty}"),
        description: format!("Especialista em {specialty} gerado em modo simulado."),
        prompt: format!(
            "Voce e um especialista em {specialty}. Atenda as solicitacoes \
             considerando os seguintes requisitos: {requirements}. Responda de \
             forma precisa, util e alinhada com sua especialidade."
        ),
        skills: vec![specialty.to_string()],
        use_cases: requirements
            .split(',')
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect(),
    }
}
