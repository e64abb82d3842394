//! Execution repositories for database operations
//!
//! Covers both single-agent execution rows and composition execution
//! summary rows.

use crate::db::connection::DatabasePool;
use crate::db::models::{AgentExecution, CompositionExecution};
use chrono::Utc;

/// Repository for managing agent execution records
pub struct ExecutionRepository;

impl ExecutionRepository {
    /// Insert an execution record built via [`AgentExecution::new`]
    pub async fn create_running(
        pool: &DatabasePool,
        execution: &AgentExecution,
    ) -> Result<AgentExecution, sqlx::Error> {
        sqlx::query_as::<_, AgentExecution>(
            "INSERT INTO agent_executions
                 (id, agent_id, input, context, status, created_at, started_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&execution.id)
        .bind(&execution.agent_id)
        .bind(&execution.input)
        .bind(&execution.context)
        .bind(&execution.status)
        .bind(&execution.created_at)
        .bind(&execution.started_at)
        .fetch_one(pool)
        .await
    }

    /// Get an execution by ID
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: &str,
    ) -> Result<Option<AgentExecution>, sqlx::Error> {
        sqlx::query_as::<_, AgentExecution>("SELECT * FROM agent_executions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Most recent executions across all agents
    pub async fn list_recent(
        pool: &DatabasePool,
        limit: i64,
    ) -> Result<Vec<AgentExecution>, sqlx::Error> {
        sqlx::query_as::<_, AgentExecution>(
            "SELECT * FROM agent_executions ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Most recent executions for a single agent
    pub async fn list_by_agent(
        pool: &DatabasePool,
        agent_id: &str,
        limit: i64,
    ) -> Result<Vec<AgentExecution>, sqlx::Error> {
        sqlx::query_as::<_, AgentExecution>(
            "SELECT * FROM agent_executions WHERE agent_id = ?
             ORDER BY created_at DESC LIMIT ?",
        )
        .bind(agent_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Mark a running execution as completed with its output and result
    /// envelope.
    ///
    /// Only transitions rows still in `running` status, so a concurrent stop
    /// and a task completion cannot overwrite each other's terminal state.
    /// Returns whether a row was updated.
    pub async fn mark_completed(
        pool: &DatabasePool,
        id: &str,
        output: &str,
        result: &str,
    ) -> Result<bool, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        let done = sqlx::query(
            "UPDATE agent_executions
             SET status = ?, output = ?, result = ?, completed_at = ?
             WHERE id = ? AND status = 'running'",
        )
        .bind("completed")
        .bind(output)
        .bind(result)
        .bind(&now)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(done.rows_affected() > 0)
    }

    /// Mark a running execution as failed with an error message.
    ///
    /// Like [`mark_completed`](Self::mark_completed), only rows still in
    /// `running` status are transitioned. Returns whether a row was updated.
    pub async fn mark_failed(
        pool: &DatabasePool,
        id: &str,
        error: &str,
    ) -> Result<bool, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        let done = sqlx::query(
            "UPDATE agent_executions
             SET status = ?, error = ?, completed_at = ?
             WHERE id = ? AND status = 'running'",
        )
        .bind("failed")
        .bind(error)
        .bind(&now)
        .bind(id)
        .execute(pool)
        .await?;

        Ok(done.rows_affected() > 0)
    }
}

/// Repository for managing composition execution summary rows
pub struct CompositionExecutionRepository;

impl CompositionExecutionRepository {
    /// Insert a completed composition execution summary
    pub async fn create_completed(
        pool: &DatabasePool,
        id: String,
        composition_id: String,
        input: String,
        results: String,
        output: String,
    ) -> Result<CompositionExecution, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, CompositionExecution>(
            "INSERT INTO composition_executions
                 (id, composition_id, input, results, output, status, created_at, completed_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&composition_id)
        .bind(&input)
        .bind(&results)
        .bind(&output)
        .bind("completed")
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Most recent composition executions for a composition
    pub async fn list_by_composition(
        pool: &DatabasePool,
        composition_id: &str,
        limit: i64,
    ) -> Result<Vec<CompositionExecution>, sqlx::Error> {
        sqlx::query_as::<_, CompositionExecution>(
            "SELECT * FROM composition_executions WHERE composition_id = ?
             ORDER BY created_at DESC LIMIT ?",
        )
        .bind(composition_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
