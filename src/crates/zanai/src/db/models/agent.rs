//! Agent model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A configured AI persona belonging to a workspace.
///
/// The `config` field is an opaque YAML/JSON string and `knowledge` is opaque
/// markdown; neither is interpreted at the persistence layer. The execution
/// layer opportunistically parses `config` as JSON when building prompts.
///
/// # Timestamps
/// All timestamp fields are RFC3339 strings due to SQLite type limitations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Agent {
    /// Unique agent identifier (UUID string)
    pub id: String,

    /// Agent name
    pub name: String,

    /// Agent description
    pub description: String,

    /// Agent type: template, custom, composed
    pub agent_type: String,

    /// Opaque configuration (YAML or JSON string)
    pub config: String,

    /// Opaque knowledge base (markdown string)
    pub knowledge: String,

    /// Current status: active, inactive, training
    pub status: String,

    /// Owning workspace identifier
    pub workspace_id: String,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}

impl Agent {
    /// Create a new agent with the defaults applied on creation:
    /// type "template", status "active", empty description/config/knowledge.
    pub fn new(id: String, name: String, workspace_id: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            name,
            description: String::new(),
            agent_type: "template".to_string(),
            config: String::new(),
            knowledge: String::new(),
            status: "active".to_string(),
            workspace_id,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Builder method to set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method to set the agent type
    pub fn with_type(mut self, agent_type: impl Into<String>) -> Self {
        self.agent_type = agent_type.into();
        self
    }

    /// Builder method to set the opaque configuration
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }

    /// Builder method to set the knowledge base
    pub fn with_knowledge(mut self, knowledge: impl Into<String>) -> Self {
        self.knowledge = knowledge.into();
        self
    }

    /// Whether the agent is archived (status "inactive")
    pub fn is_archived(&self) -> bool {
        self.status == "inactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_creation_defaults() {
        let agent = Agent::new("agent-1".to_string(), "Dev Agent".to_string(), "ws-1".to_string());

        assert_eq!(agent.id, "agent-1");
        assert_eq!(agent.name, "Dev Agent");
        assert_eq!(agent.agent_type, "template");
        assert_eq!(agent.status, "active");
        assert_eq!(agent.workspace_id, "ws-1");
        assert!(agent.config.is_empty());
        assert!(agent.knowledge.is_empty());
    }

    #[test]
    fn test_agent_builders() {
        let agent = Agent::new("agent-1".to_string(), "Dev Agent".to_string(), "ws-1".to_string())
            .with_description("Writes code")
            .with_type("custom")
            .with_config(r#"{"capabilities": ["rust"]}"#)
            .with_knowledge("# Notes");

        assert_eq!(agent.description, "Writes code");
        assert_eq!(agent.agent_type, "custom");
        assert_eq!(agent.config, r#"{"capabilities": ["rust"]}"#);
        assert_eq!(agent.knowledge, "# Notes");
    }

    #[test]
    fn test_agent_archived() {
        let mut agent =
            Agent::new("agent-1".to_string(), "Dev".to_string(), "ws-1".to_string());
        assert!(!agent.is_archived());

        agent.status = "inactive".to_string();
        assert!(agent.is_archived());
    }
}
