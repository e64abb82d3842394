//! Composition repository for database operations
//!
//! Membership lives in the `composition_agents` join table; member queries
//! return agents ordered by their position in the composition.

use crate::db::connection::DatabasePool;
use crate::db::models::{Agent, Composition};
use chrono::Utc;

/// Repository for managing composition database operations
pub struct CompositionRepository;

impl CompositionRepository {
    /// Insert a composition and its ordered member agents in one transaction
    pub async fn create(
        pool: &DatabasePool,
        composition: &Composition,
        agent_ids: &[String],
    ) -> Result<Composition, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let created = sqlx::query_as::<_, Composition>(
            "INSERT INTO compositions
                 (id, name, description, status, workspace_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&composition.id)
        .bind(&composition.name)
        .bind(&composition.description)
        .bind(&composition.status)
        .bind(&composition.workspace_id)
        .bind(&composition.created_at)
        .bind(&composition.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        for (position, agent_id) in agent_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO composition_agents (composition_id, agent_id, position)
                 VALUES (?, ?, ?)",
            )
            .bind(&composition.id)
            .bind(agent_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Get a composition by ID
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: &str,
    ) -> Result<Option<Composition>, sqlx::Error> {
        sqlx::query_as::<_, Composition>("SELECT * FROM compositions WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all compositions, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Composition>, sqlx::Error> {
        sqlx::query_as::<_, Composition>("SELECT * FROM compositions ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// List compositions belonging to a workspace, newest first
    pub async fn list_by_workspace(
        pool: &DatabasePool,
        workspace_id: &str,
    ) -> Result<Vec<Composition>, sqlx::Error> {
        sqlx::query_as::<_, Composition>(
            "SELECT * FROM compositions WHERE workspace_id = ? ORDER BY created_at DESC",
        )
        .bind(workspace_id)
        .fetch_all(pool)
        .await
    }

    /// Member agents in composition order
    pub async fn members(pool: &DatabasePool, id: &str) -> Result<Vec<Agent>, sqlx::Error> {
        sqlx::query_as::<_, Agent>(
            "SELECT a.* FROM agents a
             JOIN composition_agents ca ON ca.agent_id = a.id
             WHERE ca.composition_id = ?
             ORDER BY ca.position",
        )
        .bind(id)
        .fetch_all(pool)
        .await
    }

    /// Replace the member list, preserving the given order
    pub async fn set_members(
        pool: &DatabasePool,
        id: &str,
        agent_ids: &[String],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM composition_agents WHERE composition_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for (position, agent_id) in agent_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO composition_agents (composition_id, agent_id, position)
                 VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(agent_id)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// Persist updated composition fields
    pub async fn update(
        pool: &DatabasePool,
        composition: &Composition,
    ) -> Result<Composition, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Composition>(
            "UPDATE compositions
             SET name = ?, description = ?, status = ?, workspace_id = ?, updated_at = ?
             WHERE id = ?
             RETURNING *",
        )
        .bind(&composition.name)
        .bind(&composition.description)
        .bind(&composition.status)
        .bind(&composition.workspace_id)
        .bind(&now)
        .bind(&composition.id)
        .fetch_one(pool)
        .await
    }

    /// Update composition status
    pub async fn update_status(
        pool: &DatabasePool,
        id: &str,
        status: &str,
    ) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query("UPDATE compositions SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status)
            .bind(&now)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a composition and its membership rows
    pub async fn delete(pool: &DatabasePool, id: &str) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM composition_agents WHERE composition_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM compositions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }
}
