//! Composition API models and DTOs

use crate::api::middleware::validation;
use crate::api::models::agent::AgentResponse;
use serde::{Deserialize, Serialize};

/// Allowed composition statuses
pub const COMPOSITION_STATUSES: &[&str] = &["draft", "active", "inactive"];

/// Request to create a new composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCompositionRequest {
    /// Composition name (required, 1-255 characters)
    pub name: String,

    /// Owning workspace (required)
    pub workspace_id: String,

    /// Description (optional, defaults to "")
    pub description: Option<String>,

    /// Ordered member agent ids (optional, defaults to empty)
    pub agent_ids: Option<Vec<String>>,

    /// Status (optional, defaults to "draft")
    pub status: Option<String>,
}

impl CreateCompositionRequest {
    /// Validate the create request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        validation::validate_not_empty(&self.name, "name")?;
        validation::validate_string_length(&self.name, "name", 1, 255)?;
        validation::validate_not_empty(&self.workspace_id, "workspace_id")?;
        if let Some(status) = &self.status {
            validation::validate_one_of(status, "status", COMPOSITION_STATUSES)?;
        }
        Ok(())
    }
}

/// Request to update an existing composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCompositionRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub workspace_id: Option<String>,

    /// Replacement member list, in execution order
    pub agent_ids: Option<Vec<String>>,
}

impl UpdateCompositionRequest {
    /// Check if any fields are being updated
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.workspace_id.is_some()
            || self.agent_ids.is_some()
    }

    /// Validate the update request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        if let Some(name) = &self.name {
            validation::validate_not_empty(name, "name")?;
            validation::validate_string_length(name, "name", 1, 255)?;
        }
        if let Some(status) = &self.status {
            validation::validate_one_of(status, "status", COMPOSITION_STATUSES)?;
        }
        Ok(())
    }
}

/// Composition response for API, including the ordered member agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub workspace_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub agents: Vec<AgentResponse>,
}

impl CompositionResponse {
    /// Create a response from the database model and its member agents
    pub fn from_db_composition(
        composition: crate::db::models::Composition,
        members: Vec<crate::db::models::Agent>,
    ) -> Self {
        Self {
            id: composition.id,
            name: composition.name,
            description: composition.description,
            status: composition.status,
            workspace_id: composition.workspace_id,
            created_at: composition.created_at,
            updated_at: composition.updated_at,
            agents: members
                .into_iter()
                .map(AgentResponse::from_db_agent)
                .collect(),
        }
    }
}

/// Query parameters for listing compositions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositionListQuery {
    /// Filter by workspace (optional)
    pub workspace_id: Option<String>,
}

/// Request to execute a composition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteCompositionRequest {
    /// Input text handed to every member agent
    pub input: String,
}

impl ExecuteCompositionRequest {
    /// Validate the execute request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        validation::validate_not_empty(&self.input, "input")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valid() {
        let req = CreateCompositionRequest {
            name: "Pipeline".to_string(),
            workspace_id: "ws-1".to_string(),
            description: None,
            agent_ids: Some(vec!["agent-1".to_string()]),
            status: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_invalid_status() {
        let req = CreateCompositionRequest {
            name: "Pipeline".to_string(),
            workspace_id: "ws-1".to_string(),
            description: None,
            agent_ids: None,
            status: Some("bogus".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_execute_request_requires_input() {
        let req = ExecuteCompositionRequest {
            input: "  ".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
