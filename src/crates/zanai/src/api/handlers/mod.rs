//! API endpoint handlers

pub mod agents;
pub mod compositions;
pub mod executions;
pub mod health;
pub mod learnings;
pub mod specialists;
pub mod system;
pub mod workspaces;

pub use agents::{
    archive_agent, create_agent, delete_agent, export_agent, get_agent, list_agents, update_agent,
};
pub use compositions::{
    archive_composition, create_composition, delete_composition, execute_composition,
    get_composition, list_compositions, update_composition,
};
pub use executions::{get_execution, list_executions, start_execution, stop_execution};
pub use health::health;
pub use learnings::list_learnings;
pub use specialists::{download_specialist, generate_specialist, list_specialists};
pub use system::system_info;
pub use workspaces::{
    create_workspace, delete_workspace, get_workspace, list_workspaces, update_workspace,
};
