//! Repository layer for database operations
//!
//! Stateless repository structs; every method takes the pool explicitly so
//! callers control transaction and lifetime boundaries.

pub mod agent_repo;
pub mod composition_repo;
pub mod execution_repo;
pub mod learning_repo;
pub mod specialist_repo;
pub mod workspace_repo;

pub use agent_repo::AgentRepository;
pub use composition_repo::CompositionRepository;
pub use execution_repo::{CompositionExecutionRepository, ExecutionRepository};
pub use learning_repo::LearningRepository;
pub use specialist_repo::SpecialistRepository;
pub use workspace_repo::WorkspaceRepository;
