//! Workspace repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Workspace;
use chrono::Utc;

/// Repository for managing workspace database operations
pub struct WorkspaceRepository;

impl WorkspaceRepository {
    /// Create a new workspace in the database
    pub async fn create(
        pool: &DatabasePool,
        id: String,
        name: String,
        description: String,
    ) -> Result<Workspace, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Workspace>(
            "INSERT INTO workspaces (id, name, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&name)
        .bind(&description)
        .bind(&now)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Get a workspace by ID
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: &str,
    ) -> Result<Option<Workspace>, sqlx::Error> {
        sqlx::query_as::<_, Workspace>("SELECT * FROM workspaces WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all workspaces, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Workspace>, sqlx::Error> {
        sqlx::query_as::<_, Workspace>("SELECT * FROM workspaces ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }

    /// Update workspace name and description
    pub async fn update(
        pool: &DatabasePool,
        id: &str,
        name: &str,
        description: &str,
    ) -> Result<Option<Workspace>, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Workspace>(
            "UPDATE workspaces SET name = ?, description = ?, updated_at = ? WHERE id = ?
             RETURNING *",
        )
        .bind(name)
        .bind(description)
        .bind(&now)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a workspace
    pub async fn delete(pool: &DatabasePool, id: &str) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM workspaces WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_db;

    #[tokio::test]
    async fn test_create_and_get() {
        let db = memory_db().await;

        let created = WorkspaceRepository::create(
            db.pool(),
            "ws-1".to_string(),
            "Default".to_string(),
            "Main workspace".to_string(),
        )
        .await
        .unwrap();

        assert_eq!(created.name, "Default");

        let fetched = WorkspaceRepository::get_by_id(db.pool(), "ws-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.description, "Main workspace");
    }

    #[tokio::test]
    async fn test_list_workspaces() {
        let db = memory_db().await;

        WorkspaceRepository::create(
            db.pool(),
            "ws-1".to_string(),
            "First".to_string(),
            String::new(),
        )
        .await
        .unwrap();
        WorkspaceRepository::create(
            db.pool(),
            "ws-2".to_string(),
            "Second".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        let workspaces = WorkspaceRepository::list(db.pool()).await.unwrap();
        assert_eq!(workspaces.len(), 2);
    }

    #[tokio::test]
    async fn test_update_workspace() {
        let db = memory_db().await;

        WorkspaceRepository::create(
            db.pool(),
            "ws-1".to_string(),
            "Old".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        let updated = WorkspaceRepository::update(db.pool(), "ws-1", "New", "desc")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, "desc");
    }

    #[tokio::test]
    async fn test_update_missing_workspace() {
        let db = memory_db().await;

        let updated = WorkspaceRepository::update(db.pool(), "nope", "New", "desc")
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_delete_workspace() {
        let db = memory_db().await;

        WorkspaceRepository::create(
            db.pool(),
            "ws-1".to_string(),
            "Default".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        WorkspaceRepository::delete(db.pool(), "ws-1").await.unwrap();

        let fetched = WorkspaceRepository::get_by_id(db.pool(), "ws-1").await.unwrap();
        assert!(fetched.is_none());
    }
}
