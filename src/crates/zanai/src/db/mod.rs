//! Database module
//!
//! Provides database connectivity, models, repositories, and error handling
//! for persistent storage of agents, workspaces, compositions, executions,
//! and learning telemetry.

pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use connection::{DatabaseConnection, DatabasePool};
pub use error::{DatabaseError, DbResult};

#[cfg(test)]
pub(crate) mod test_support {
    use super::connection::DatabaseConnection;

    /// In-memory database with the full schema applied.
    ///
    /// A single connection keeps every query on the same in-memory database.
    pub async fn memory_db() -> DatabaseConnection {
        let conn = DatabaseConnection::with_max_connections("sqlite::memory:", 1)
            .await
            .expect("in-memory database");
        conn.run_migrations().await.expect("migrations");
        conn
    }
}
