//! Execution API models and DTOs

use crate::api::middleware::validation;
use serde::{Deserialize, Serialize};

/// Request to start an agent execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartExecutionRequest {
    /// Agent to execute (required)
    pub agent_id: String,

    /// Input text (required)
    pub input: String,

    /// Optional execution context, stored alongside the record
    pub context: Option<serde_json::Value>,
}

impl StartExecutionRequest {
    /// Validate the start request
    pub fn validate(&self) -> crate::api::error::ApiResult<()> {
        validation::validate_not_empty(&self.agent_id, "agent_id")?;
        validation::validate_not_empty(&self.input, "input")?;
        Ok(())
    }
}

/// Execution response for API (flattened database model)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResponse {
    pub id: String,
    pub agent_id: String,
    pub input: String,
    pub context: Option<String>,
    pub output: Option<String>,
    pub result: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub created_at: String,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
}

impl ExecutionResponse {
    /// Create a response from the database model
    pub fn from_db_execution(execution: crate::db::models::AgentExecution) -> Self {
        Self {
            id: execution.id,
            agent_id: execution.agent_id,
            input: execution.input,
            context: execution.context,
            output: execution.output,
            result: execution.result,
            status: execution.status,
            error: execution.error,
            created_at: execution.created_at,
            started_at: execution.started_at,
            completed_at: execution.completed_at,
        }
    }
}

/// Query parameters for listing executions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionListQuery {
    /// Filter by agent (optional; raises the result limit)
    pub agent_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_request_valid() {
        let req = StartExecutionRequest {
            agent_id: "agent-1".to_string(),
            input: "do the thing".to_string(),
            context: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_start_request_missing_input() {
        let req = StartExecutionRequest {
            agent_id: "agent-1".to_string(),
            input: "".to_string(),
            context: None,
        };
        assert!(req.validate().is_err());
    }
}
