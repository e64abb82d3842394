//! Workspace model for database persistence

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tenancy/grouping container for agents and compositions.
///
/// # Timestamps
/// All timestamp fields are RFC3339 strings due to SQLite type limitations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workspace {
    /// Unique workspace identifier (UUID string)
    pub id: String,

    /// Workspace name
    pub name: String,

    /// Workspace description
    pub description: String,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Last update timestamp (RFC3339 string)
    pub updated_at: String,
}

impl Workspace {
    /// Create a new workspace with an empty description
    pub fn new(id: String, name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            name,
            description: String::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Builder method to set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let ws = Workspace::new("ws-1".to_string(), "Default".to_string());

        assert_eq!(ws.id, "ws-1");
        assert_eq!(ws.name, "Default");
        assert!(ws.description.is_empty());
    }

    #[test]
    fn test_workspace_with_description() {
        let ws = Workspace::new("ws-1".to_string(), "Default".to_string())
            .with_description("Main workspace");

        assert_eq!(ws.description, "Main workspace");
    }
}
