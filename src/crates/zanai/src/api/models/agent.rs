//! Agent API models and DTOs

use crate::api::middleware::validation;
use serde::{Deserialize, Serialize};

/// Allowed agent types
pub const AGENT_TYPES: &[&str] = &["template", "custom", "composed"];

/// Allowed agent statuses
pub const AGENT_STATUSES: &[&str] = &["active", "inactive", "training"];

/// Request to create a new agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAgentRequest {
    /// Agent name (required, 1-255 characters)
    pub name: String,

    /// Owning workspace (required)
    pub workspace_id: String,

    /// Description (optional, defaults to "")
    pub description: Option<String>,

    /// Agent type (optional, defaults to "template")
    pub agent_type: Option<String>,

    /// Opaque configuration, YAML or JSON (optional, defaults to "")
    pub config: Option<String>,

    /// Knowledge base markdown (optional, defaults to "")
    pub knowledge: Option<String>,

    /// Status (optional, defaults to "active")
    pub status: Option<String>,
}

impl CreateAgentRequest {
    /// Validate the create request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        validation::validate_not_empty(&self.name, "name")?;
        validation::validate_string_length(&self.name, "name", 1, 255)?;
        validation::validate_not_empty(&self.workspace_id, "workspace_id")?;
        if let Some(agent_type) = &self.agent_type {
            validation::validate_one_of(agent_type, "agent_type", AGENT_TYPES)?;
        }
        if let Some(status) = &self.status {
            validation::validate_one_of(status, "status", AGENT_STATUSES)?;
        }
        Ok(())
    }
}

/// Request to update an existing agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAgentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub agent_type: Option<String>,
    pub config: Option<String>,
    pub knowledge: Option<String>,
    pub status: Option<String>,
    pub workspace_id: Option<String>,
}

impl UpdateAgentRequest {
    /// Check if any fields are being updated
    pub fn has_updates(&self) -> bool {
        self.name.is_some()
            || self.description.is_some()
            || self.agent_type.is_some()
            || self.config.is_some()
            || self.knowledge.is_some()
            || self.status.is_some()
            || self.workspace_id.is_some()
    }

    /// Validate the update request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        if let Some(name) = &self.name {
            validation::validate_not_empty(name, "name")?;
            validation::validate_string_length(name, "name", 1, 255)?;
        }
        if let Some(agent_type) = &self.agent_type {
            validation::validate_one_of(agent_type, "agent_type", AGENT_TYPES)?;
        }
        if let Some(status) = &self.status {
            validation::validate_one_of(status, "status", AGENT_STATUSES)?;
        }
        Ok(())
    }
}

/// Agent response for API (flattened database model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub agent_type: String,
    pub config: String,
    pub knowledge: String,
    pub status: String,
    pub workspace_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl AgentResponse {
    /// Create a response from the database model
    pub fn from_db_agent(agent: crate::db::models::Agent) -> Self {
        Self {
            id: agent.id,
            name: agent.name,
            description: agent.description,
            agent_type: agent.agent_type,
            config: agent.config,
            knowledge: agent.knowledge,
            status: agent.status,
            workspace_id: agent.workspace_id,
            created_at: agent.created_at,
            updated_at: agent.updated_at,
        }
    }
}

/// Query parameters for listing agents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListQuery {
    /// Filter by workspace (optional)
    pub workspace_id: Option<String>,

    /// Filter by status (optional)
    pub status: Option<String>,
}

/// Metadata block in an agent export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub version: String,
    pub exported_at: String,
    pub agent_id: String,
    pub agent_name: String,
}

/// Workspace block in an agent export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportWorkspace {
    pub name: String,
    pub description: String,
}

/// Agent export document: a self-contained snapshot of the agent and the
/// workspace it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentExportResponse {
    pub metadata: ExportMetadata,
    pub agent: AgentResponse,
    pub workspace: ExportWorkspace,
}
