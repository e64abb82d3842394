//! Workspace API models and DTOs

use crate::api::middleware::validation;
use serde::{Deserialize, Serialize};

/// Request to create a new workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkspaceRequest {
    /// Workspace name (required, 1-255 characters)
    pub name: String,

    /// Workspace description (optional)
    pub description: Option<String>,
}

impl CreateWorkspaceRequest {
    /// Validate the create request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        validation::validate_not_empty(&self.name, "name")?;
        validation::validate_string_length(&self.name, "name", 1, 255)?;
        Ok(())
    }
}

/// Request to update an existing workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkspaceRequest {
    /// Updated name (optional)
    pub name: Option<String>,

    /// Updated description (optional)
    pub description: Option<String>,
}

impl UpdateWorkspaceRequest {
    /// Check if any fields are being updated
    pub fn has_updates(&self) -> bool {
        self.name.is_some() || self.description.is_some()
    }
}

/// Workspace response for API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

impl WorkspaceResponse {
    /// Create a response from the database model
    pub fn from_db_workspace(workspace: crate::db::models::Workspace) -> Self {
        Self {
            id: workspace.id,
            name: workspace.name,
            description: workspace.description,
            created_at: workspace.created_at,
            updated_at: workspace.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valid() {
        let req = CreateWorkspaceRequest {
            name: "Main".to_string(),
            description: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_empty_name() {
        let req = CreateWorkspaceRequest {
            name: "".to_string(),
            description: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_has_updates() {
        let req = UpdateWorkspaceRequest {
            name: Some("New".to_string()),
            description: None,
        };
        assert!(req.has_updates());

        let req = UpdateWorkspaceRequest {
            name: None,
            description: None,
        };
        assert!(!req.has_updates());
    }
}
