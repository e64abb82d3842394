//! Specialist repository for database operations

use crate::db::connection::DatabasePool;
use crate::db::models::Specialist;

/// Repository for managing generated specialist templates
pub struct SpecialistRepository;

impl SpecialistRepository {
    /// Insert a fully-populated specialist row
    pub async fn create(
        pool: &DatabasePool,
        specialist: &Specialist,
    ) -> Result<Specialist, sqlx::Error> {
        sqlx::query_as::<_, Specialist>(
            "INSERT INTO specialists
                 (id, name, category, description, prompt, skills, use_cases, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&specialist.id)
        .bind(&specialist.name)
        .bind(&specialist.category)
        .bind(&specialist.description)
        .bind(&specialist.prompt)
        .bind(&specialist.skills)
        .bind(&specialist.use_cases)
        .bind(&specialist.created_at)
        .fetch_one(pool)
        .await
    }

    /// Get a specialist by ID
    pub async fn get_by_id(
        pool: &DatabasePool,
        id: &str,
    ) -> Result<Option<Specialist>, sqlx::Error> {
        sqlx::query_as::<_, Specialist>("SELECT * FROM specialists WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Get all specialists, newest first
    pub async fn list(pool: &DatabasePool) -> Result<Vec<Specialist>, sqlx::Error> {
        sqlx::query_as::<_, Specialist>("SELECT * FROM specialists ORDER BY created_at DESC")
            .fetch_all(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_db;

    fn sample(id: &str) -> Specialist {
        Specialist {
            id: id.to_string(),
            name: "Requirements Analyst".to_string(),
            category: "business".to_string(),
            description: "Elicits and documents requirements".to_string(),
            prompt: "You are a requirements analyst.".to_string(),
            skills: r#"["Elicitation"]"#.to_string(),
            use_cases: r#"["Project kickoff"]"#.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = memory_db().await;

        let created = SpecialistRepository::create(db.pool(), &sample("spec-1"))
            .await
            .unwrap();
        assert_eq!(created.category, "business");

        let fetched = SpecialistRepository::get_by_id(db.pool(), "spec-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.skills_vec(), vec!["Elicitation"]);
    }

    #[tokio::test]
    async fn test_list() {
        let db = memory_db().await;

        SpecialistRepository::create(db.pool(), &sample("spec-1"))
            .await
            .unwrap();
        SpecialistRepository::create(db.pool(), &sample("spec-2"))
            .await
            .unwrap();

        let all = SpecialistRepository::list(db.pool()).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
