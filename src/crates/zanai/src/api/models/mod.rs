//! API data transfer objects

pub mod agent;
pub mod composition;
pub mod execution;
pub mod learning;
pub mod specialist;
pub mod workspace;

pub use agent::{
    AgentExportResponse, AgentListQuery, AgentResponse, CreateAgentRequest, ExportMetadata,
    ExportWorkspace, UpdateAgentRequest,
};
pub use composition::{
    CompositionListQuery, CompositionResponse, CreateCompositionRequest,
    ExecuteCompositionRequest, UpdateCompositionRequest,
};
pub use execution::{ExecutionListQuery, ExecutionResponse, StartExecutionRequest};
pub use learning::{LearningListQuery, LearningResponse};
pub use specialist::{
    CatalogResponse, DownloadResponse, GenerateSpecialistRequest, SpecialistResponse,
};
pub use workspace::{CreateWorkspaceRequest, UpdateWorkspaceRequest, WorkspaceResponse};
