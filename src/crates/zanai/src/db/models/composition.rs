//! Composition model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An ordered group of agents executed in sequence.
///
/// Membership lives in the `composition_agents` join table ordered by
/// `position`; the row itself only carries identity and lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Composition {
    /// Unique composition identifier (UUID string)
    pub id: String,

    /// Composition name
    pub name: String,

    /// Composition description
    pub description: String,

    /// Current status: draft, active, inactive
    pub status: String,

    /// Owning workspace identifier
    pub workspace_id: String,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}

impl Composition {
    /// Create a new composition in `draft` status
    pub fn new(id: String, name: String, workspace_id: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            name,
            description: String::new(),
            status: "draft".to_string(),
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

    /// Builder method to set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Whether the composition may be executed
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_creation() {
        let comp = Composition::new("comp-1".to_string(), "Pipeline".to_string(), "ws-1".to_string());

        assert_eq!(comp.id, "comp-1");
        assert_eq!(comp.status, "draft");
        assert!(!comp.is_active());
    }

    #[test]
    fn test_composition_active() {
        let comp = Composition::new("comp-1".to_string(), "Pipeline".to_string(), "ws-1".to_string())
            .with_status("active");

        assert!(comp.is_active());
    }
}
