//! Execution models for database persistence
//!
//! Two kinds of execution records: one per single-agent run, and one summary
//! row per composition run aggregating the per-step results.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single-agent execution record.
///
/// # Lifecycle
/// Inserted as `running` when the run starts; updated to `completed` (with
/// output and result JSON) or `failed` (with an error message) when it ends.
/// A client-initiated stop flips a `running` row to `failed`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AgentExecution {
    /// Unique execution identifier (UUID string)
    pub id: String,

    /// Agent being executed
    pub agent_id: String,

    /// Input text handed to the agent
    pub input: String,

    /// Optional JSON context (e.g. prior outputs in a composition run)
    pub context: Option<String>,

    /// Output text, set on completion
    pub output: Option<String>,

    /// Result envelope as a JSON string
    /// (`{output, execution_time_ms, success, simulated}`)
    pub result: Option<String>,

    /// Current status: pending, running, completed, failed
    pub status: String,

    /// Error message if the execution failed
    pub error: Option<String>,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Start timestamp (RFC3339 string, optional)
    pub started_at: Option<String>,

    /// Completion timestamp (RFC3339 string, optional)
    pub completed_at: Option<String>,
}

impl AgentExecution {
    /// Create a new execution record in `running` status
    pub fn new(id: String, agent_id: String, input: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id,
            agent_id,
            input,
            context: None,
            output: None,
            result: None,
            status: "running".to_string(),
            error: None,
            created_at: now.clone(),
            started_at: Some(now),
            completed_at: None,
        }
    }

    /// Builder method to set the JSON context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Whether the execution is still in flight
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

/// A composition execution summary row.
///
/// `results` holds the JSON vector of per-agent step results and `output`
/// the concatenated text of the successful steps.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompositionExecution {
    /// Unique execution identifier (UUID string)
    pub id: String,

    /// Composition that was executed
    pub composition_id: String,

    /// Input text handed to every member agent
    pub input: String,

    /// Per-agent step results as a JSON array string
    pub results: Option<String>,

    /// Concatenated output of the successful steps
    pub output: Option<String>,

    /// Current status: pending, running, completed, failed
    pub status: String,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,

    /// Completion timestamp (RFC3339 string, optional)
    pub completed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_creation() {
        let exec = AgentExecution::new(
            "exec-1".to_string(),
            "agent-1".to_string(),
            "Review this design".to_string(),
        );

        assert!(exec.is_running());
        assert!(exec.started_at.is_some());
        assert!(exec.output.is_none());
    }

    #[test]
    fn test_execution_with_context() {
        let exec = AgentExecution::new(
            "exec-1".to_string(),
            "agent-1".to_string(),
            "input".to_string(),
        )
        .with_context(r#"{"previous_results": []}"#);

        assert_eq!(exec.context, Some(r#"{"previous_results": []}"#.to_string()));
    }
}
