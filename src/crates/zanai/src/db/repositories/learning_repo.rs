//! Learning repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Learning;
use chrono::Utc;

/// Repository for managing learning telemetry records
pub struct LearningRepository;

impl LearningRepository {
    /// Insert a learning record
    pub async fn create(
        pool: &DatabasePool,
        id: String,
        agent_id: String,
        learning_type: String,
        data: String,
        confidence: f64,
    ) -> Result<Learning, sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        sqlx::query_as::<_, Learning>(
            "INSERT INTO learnings (id, agent_id, learning_type, data, confidence, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&id)
        .bind(&agent_id)
        .bind(&learning_type)
        .bind(&data)
        .bind(confidence)
        .bind(&now)
        .fetch_one(pool)
        .await
    }

    /// Most recent learning records across all agents
    pub async fn list_recent(
        pool: &DatabasePool,
        limit: i64,
    ) -> Result<Vec<Learning>, sqlx::Error> {
        sqlx::query_as::<_, Learning>(
            "SELECT * FROM learnings ORDER BY created_at DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Most recent learning records for one agent
    pub async fn list_by_agent(
        pool: &DatabasePool,
        agent_id: &str,
        limit: i64,
    ) -> Result<Vec<Learning>, sqlx::Error> {
        sqlx::query_as::<_, Learning>(
            "SELECT * FROM learnings WHERE agent_id = ?
             ORDER BY created_at DESC LIMIT ?",
        )
        .bind(agent_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_db;

    #[tokio::test]
    async fn test_create_and_list() {
        let db = memory_db().await;

        LearningRepository::create(
            db.pool(),
            "l-1".to_string(),
            "agent-1".to_string(),
            "execution".to_string(),
            r#"{"success": true}"#.to_string(),
            0.9,
        )
        .await
        .unwrap();
        LearningRepository::create(
            db.pool(),
            "l-2".to_string(),
            "agent-2".to_string(),
            "execution".to_string(),
            r#"{"success": false}"#.to_string(),
            0.1,
        )
        .await
        .unwrap();

        let all = LearningRepository::list_recent(db.pool(), 10).await.unwrap();
        assert_eq!(all.len(), 2);

        let by_agent = LearningRepository::list_by_agent(db.pool(), "agent-1", 10)
            .await
            .unwrap();
        assert_eq!(by_agent.len(), 1);
        assert_eq!(by_agent[0].confidence, 0.9);
    }
}
