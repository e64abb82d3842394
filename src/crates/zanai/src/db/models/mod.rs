//! Database models
//!
//! Core data models for persistent storage. All timestamp fields are stored
//! as RFC3339 strings (TEXT in SQLite) due to sqlx and SQLite type
//! limitations with chrono::DateTime<Utc>.

pub mod agent;
pub mod composition;
pub mod execution;
pub mod learning;
pub mod specialist;
pub mod workspace;

pub use agent::Agent;
pub use composition::Composition;
pub use execution::{AgentExecution, CompositionExecution};
pub use learning::Learning;
pub use specialist::Specialist;
pub use workspace::Workspace;
