//! Agent repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Agent;
use chrono::Utc;

/// Repository for managing agent database operations
pub struct AgentRepository;

impl AgentRepository {
    /// Insert a fully-populated agent row
    pub async fn create(pool: &DatabasePool, agent: &Agent) -> Result<Agent, sqlx::Error> {
        sqlx::query_as::<_, Agent>(
            "INSERT INTO agents
                 (id, name, description, agent_type, config, knowledge, status,
                  workspace_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&agent.id)
        .bind(&agent.name)
        .bind(&agent.description)
        .bind(&agent.agent_type)
        .bind(&agent.config)
        .bind(&agent.knowledge)
        .bind(&agent.status)
        .bind(&agent.workspace_id)
        .bind(&agent.created_at)
        .bind(&agent.updated_at)
        .fetch_one(pool)
        .await
    }

    /// Get an agent by ID
    pub async fn get_by_id(pool: &DatabasePool, id: &str) -> Result<Option<Agent>, sqlx::Error> {
        sqlx::query_as::<_, Agent>("SELECT * FROM agents WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all agents, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Agent>, sqlx::Error> {
        sqlx::query_as::<_, Agent>("SELECT * FROM agents ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// List agents belonging to a workspace, newest first
    pub async fn list_by_workspace(
        pool: &DatabasePool,
        workspace_id: &str,
    ) -> Result<Vec<Agent>, sqlx::Error> {
        sqlx::query_as::<_, Agent>(
            "SELECT * FROM agents WHERE workspace_id = ? ORDER BY created_at DESC",
        )
        .bind(workspace_id)
        .fetch_all(pool)
        .await
    }

    /// Persist updated agent fields (everything except id and created_at)
    pub async fn update(pool: &DatabasePool, agent: &Agent) -> Result<Agent, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Agent>(
            "UPDATE agents
             SET name = ?, description = ?, agent_type = ?, config = ?,
                 knowledge = ?, status = ?, workspace_id = ?, updated_at = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&agent.name)
        .bind(&agent.description)
        .bind(&agent.agent_type)
        .bind(&agent.config)
        .bind(&agent.knowledge)
        .bind(&agent.status)
        .bind(&agent.workspace_id)
        .bind(&now)
        .bind(&agent.id)
        .fetch_one(pool)
        .await
    }

    /// Update agent status
    pub async fn update_status(
        pool: &DatabasePool,
        id: &str,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE agents SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(&now)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete an agent
    pub async fn delete(pool: &DatabasePool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM agents WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::WorkspaceRepository;
    use crate::db::test_support::memory_db;

    async fn seed_workspace(pool: &DatabasePool) {
        WorkspaceRepository::create(
            pool,
            "ws-1".to_string(),
            "Default".to_string(),
            String::new(),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_create_agent() {
        let db = memory_db().await;
        seed_workspace(db.pool()).await;

        let agent = Agent::new("agent-1".to_string(), "Dev".to_string(), "ws-1".to_string())
            .with_description("Writes code");
        let created = AgentRepository::create(db.pool(), &agent).await.unwrap();

        assert_eq!(created.id, "agent-1");
        assert_eq!(created.status, "active");
        assert_eq!(created.description, "Writes code");
    }

    #[tokio::test]
    async fn test_list_by_workspace() {
        let db = memory_db().await;
        seed_workspace(db.pool()).await;
        WorkspaceRepository::create(
            db.pool(),
            "ws-2".to_string(),
            "Other".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        let a = Agent::new("agent-1".to_string(), "A".to_string(), "ws-1".to_string());
        let b = Agent::new("agent-2".to_string(), "B".to_string(), "ws-2".to_string());
        AgentRepository::create(db.pool(), &a).await.unwrap();
        AgentRepository::create(db.pool(), &b).await.unwrap();

        let agents = AgentRepository::list_by_workspace(db.pool(), "ws-1")
            .await
            .unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].id, "agent-1");
    }

    #[tokio::test]
    async fn test_update_agent() {
        let db = memory_db().await;
        seed_workspace(db.pool()).await;

        let agent = Agent::new("agent-1".to_string(), "Dev".to_string(), "ws-1".to_string());
        let mut created = AgentRepository::create(db.pool(), &agent).await.unwrap();

        created.name = "Senior Dev".to_string();
        created.knowledge = "# Rust".to_string();
        let updated = AgentRepository::update(db.pool(), &created).await.unwrap();

        assert_eq!(updated.name, "Senior Dev");
        assert_eq!(updated.knowledge, "# Rust");
    }

    #[tokio::test]
    async fn test_update_status() {
        let db = memory_db().await;
        seed_workspace(db.pool()).await;

        let agent = Agent::new("agent-1".to_string(), "Dev".to_string(), "ws-1".to_string());
        AgentRepository::create(db.pool(), &agent).await.unwrap();

        AgentRepository::update_status(db.pool(), "agent-1", "inactive")
            .await
            .unwrap();

        let fetched = AgentRepository::get_by_id(db.pool(), "agent-1")
            .await
            .unwrap()
            .unwrap();
        assert!(fetched.is_archived());
    }

    #[tokio::test]
    async fn test_invalid_status_rejected() {
        let db = memory_db().await;
        seed_workspace(db.pool()).await;

        let mut agent = Agent::new("agent-1".to_string(), "Dev".to_string(), "ws-1".to_string());
        agent.status = "bogus".to_string();

        let result = AgentRepository::create(db.pool(), &agent).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_agent() {
        let db = memory_db().await;
        seed_workspace(db.pool()).await;

        let agent = Agent::new("agent-1".to_string(), "Dev".to_string(), "ws-1".to_string());
        AgentRepository::create(db.pool(), &agent).await.unwrap();

        AgentRepository::delete(db.pool(), "agent-1").await.unwrap();

        let fetched = AgentRepository::get_by_id(db.pool(), "agent-1").await.unwrap();
        assert!(fetched.is_none());
    }
}
