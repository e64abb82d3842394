//! Database connection management
//!
//! Provides database connection pooling, migrations, and health checks.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

/// Type alias for the database connection pool
pub type DatabasePool = SqlitePool;

/// Database connection wrapper
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: Arc<DatabasePool>,
}

impl DatabaseConnection {
    /// Create a new database connection from a connection string
    ///
    /// # Arguments
    /// * `database_url` - SQLite connection string (e.g., "sqlite:zanai.db" or "sqlite::memory:")
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        Self::with_max_connections(database_url, 5).await
    }

    /// Create a new database connection with custom pool size
    pub async fn with_max_connections(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Run migrations on the database
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(self.pool.as_ref()).await
    }

    /// Perform a health check by running a simple query
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_one(self.pool.as_ref()).await?;

        Ok(())
    }

    /// Close the connection pool gracefully
    ///
    /// After this is called, the connection cannot be used anymore.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_connection() {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();

        assert!(conn.pool().acquire().await.is_ok());
    }

    #[tokio::test]
    async fn test_health_check_success() {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();

        assert!(conn.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_run_migrations() {
        let conn = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
            .await
            .unwrap();

        conn.run_migrations().await.unwrap();

        // Migrated schema should be queryable.
        sqlx::query("SELECT COUNT(*) FROM agents")
            .fetch_one(conn.pool())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_close_connection() {
        let conn = DatabaseConnection::new("sqlite::memory:").await.unwrap();

        conn.close().await;
    }
}
