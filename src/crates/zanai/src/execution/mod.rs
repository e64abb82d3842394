//! Agent and composition execution.
//!
//! Runs an agent by sending its assembled system prompt and the user input to
//! the configured completion provider. When no provider is configured, or the
//! provider call fails or times out, execution degrades to a canned simulated
//! response instead of failing. Composition runs execute member agents
//! sequentially, feeding each step the outputs of the previous ones.

pub mod prompt;
pub mod simulated;

use crate::db::models::{Agent, AgentExecution};
use crate::db::repositories::{
    AgentRepository, CompositionExecutionRepository, CompositionRepository, ExecutionRepository,
    LearningRepository,
};
use crate::db::DatabaseConnection;
use llm::{ChatModel, ChatRequest, Message};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Errors surfaced by the execution service.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Agent not found")]
    AgentNotFound,

    #[error("Composition not found")]
    CompositionNotFound,

    #[error("Composition is not active")]
    CompositionNotActive,

    #[error("Composition has no agents")]
    CompositionEmpty,

    #[error("Execution not found")]
    ExecutionNotFound,

    #[error("Execution is not running")]
    ExecutionNotRunning,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Generation parameters applied to every provider call.
#[derive(Debug, Clone)]
pub struct ExecutionSettings {
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum tokens to generate per completion.
    pub max_tokens: usize,
    /// Upper bound on a single provider call.
    pub timeout: Duration,
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 2000,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Outcome of one agent step inside a composition run.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub agent_id: String,
    pub agent_name: String,
    pub success: bool,
    pub output: Option<String>,
    pub error: Option<String>,
    pub execution_time_ms: u64,
    pub simulated: bool,
}

/// Aggregated result of a composition run.
#[derive(Debug, Clone, Serialize)]
pub struct CompositionRunReport {
    /// Summary row identifier.
    pub execution_id: String,
    pub composition_id: String,
    /// Concatenated output of the successful steps.
    pub output: String,
    /// Per-step results, failures included.
    pub results: Vec<StepResult>,
    pub execution_time_ms: u64,
}

struct CompletionOutcome {
    output: String,
    simulated: bool,
}

/// Drives agent and composition executions against the database and the
/// configured completion provider.
#[derive(Clone)]
pub struct ExecutionService {
    db: DatabaseConnection,
    model: Option<Arc<dyn ChatModel>>,
    settings: ExecutionSettings,
}

impl ExecutionService {
    pub fn new(
        db: DatabaseConnection,
        model: Option<Arc<dyn ChatModel>>,
        settings: ExecutionSettings,
    ) -> Self {
        Self {
            db,
            model,
            settings,
        }
    }

    /// Whether a real completion provider is configured.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Start an agent execution and return the running record immediately.
    ///
    /// The run itself is driven on a background task; callers observe
    /// progress by polling the execution record.
    pub async fn start_agent(
        &self,
        agent_id: &str,
        input: String,
        context: Option<String>,
    ) -> Result<AgentExecution, ExecutionError> {
        let agent = AgentRepository::get_by_id(self.db.pool(), agent_id)
            .await?
            .ok_or(ExecutionError::AgentNotFound)?;

        let mut row = AgentExecution::new(Uuid::new_v4().to_string(), agent.id.clone(), input.clone());
        if let Some(context) = context {
            row = row.with_context(context);
        }
        let execution = ExecutionRepository::create_running(self.db.pool(), &row).await?;

        info!(execution_id = %execution.id, agent_id = %agent.id, "agent execution started");

        let service = self.clone();
        let execution_id = execution.id.clone();
        tokio::spawn(async move {
            service.run_step(&agent, &execution_id, &input).await;
        });

        Ok(execution)
    }

    /// Execute an active composition's member agents in order.
    ///
    /// A failing step is recorded in the results and the run continues with
    /// the remaining agents; only the successful outputs contribute to the
    /// concatenated output.
    pub async fn run_composition(
        &self,
        composition_id: &str,
        input: &str,
    ) -> Result<CompositionRunReport, ExecutionError> {
        let composition = CompositionRepository::get_by_id(self.db.pool(), composition_id)
            .await?
            .ok_or(ExecutionError::CompositionNotFound)?;

        if !composition.is_active() {
            return Err(ExecutionError::CompositionNotActive);
        }

        let members = CompositionRepository::members(self.db.pool(), composition_id).await?;
        if members.is_empty() {
            return Err(ExecutionError::CompositionEmpty);
        }

        info!(
            composition_id = %composition.id,
            agents = members.len(),
            "composition execution started"
        );

        let start = Instant::now();
        let mut results: Vec<StepResult> = Vec::with_capacity(members.len());
        let mut outputs: Vec<String> = Vec::new();

        for (position, agent) in members.iter().enumerate() {
            let context = json!({
                "composition_id": composition.id,
                "position": position,
                "previous_results": outputs,
            })
            .to_string();

            let row =
                AgentExecution::new(Uuid::new_v4().to_string(), agent.id.clone(), input.to_string())
                    .with_context(context);
            let execution = ExecutionRepository::create_running(self.db.pool(), &row).await?;

            let step = self.run_step(agent, &execution.id, input).await;
            if step.success {
                if let Some(output) = &step.output {
                    outputs.push(format!("[{}]: {}", agent.name, output));
                }
            } else {
                warn!(
                    composition_id = %composition.id,
                    agent_id = %agent.id,
                    error = step.error.as_deref().unwrap_or("unknown"),
                    "composition step failed, continuing"
                );
            }
            results.push(step);
        }

        let output = outputs.join("\n\n");
        let summary = CompositionExecutionRepository::create_completed(
            self.db.pool(),
            Uuid::new_v4().to_string(),
            composition.id.clone(),
            input.to_string(),
            serde_json::to_string(&results)?,
            output.clone(),
        )
        .await?;

        Ok(CompositionRunReport {
            execution_id: summary.id,
            composition_id: composition.id,
            output,
            results,
            execution_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Stop a running execution, marking it failed.
    pub async fn stop(&self, execution_id: &str) -> Result<AgentExecution, ExecutionError> {
        let execution = ExecutionRepository::get_by_id(self.db.pool(), execution_id)
            .await?
            .ok_or(ExecutionError::ExecutionNotFound)?;

        if !execution.is_running() {
            return Err(ExecutionError::ExecutionNotRunning);
        }

        ExecutionRepository::mark_failed(self.db.pool(), execution_id, "Execution stopped by user")
            .await?;

        ExecutionRepository::get_by_id(self.db.pool(), execution_id)
            .await?
            .ok_or(ExecutionError::ExecutionNotFound)
    }

    /// Run one agent step against an already-created `running` record,
    /// persisting the terminal state and the learning entry.
    async fn run_step(&self, agent: &Agent, execution_id: &str, input: &str) -> StepResult {
        let start = Instant::now();
        let outcome = self.complete(agent, input).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let envelope = json!({
            "output": outcome.output,
            "execution_time_ms": elapsed_ms,
            "success": true,
            "simulated": outcome.simulated,
        })
        .to_string();

        match ExecutionRepository::mark_completed(
            self.db.pool(),
            execution_id,
            &outcome.output,
            &envelope,
        )
        .await
        {
            Ok(updated) => {
                if !updated {
                    // Stopped while the completion was in flight; the record
                    // already carries its terminal state.
                    info!(execution_id, "execution finished after being stopped");
                }
                self.record_learning(
                    &agent.id,
                    json!({
                        "input": input,
                        "output": outcome.output,
                        "execution_time_ms": elapsed_ms,
                        "success": true,
                    }),
                    0.9,
                )
                .await;

                StepResult {
                    agent_id: agent.id.clone(),
                    agent_name: agent.name.clone(),
                    success: true,
                    output: Some(outcome.output),
                    error: None,
                    execution_time_ms: elapsed_ms,
                    simulated: outcome.simulated,
                }
            }
            Err(err) => {
                warn!(execution_id, error = %err, "failed to persist execution result");
                let message = err.to_string();
                if let Err(err) =
                    ExecutionRepository::mark_failed(self.db.pool(), execution_id, &message).await
                {
                    warn!(execution_id, error = %err, "failed to persist execution failure");
                }
                self.record_learning(
                    &agent.id,
                    json!({
                        "input": input,
                        "error": message,
                        "execution_time_ms": elapsed_ms,
                        "success": false,
                    }),
                    0.1,
                )
                .await;

                StepResult {
                    agent_id: agent.id.clone(),
                    agent_name: agent.name.clone(),
                    success: false,
                    output: None,
                    error: Some(message),
                    execution_time_ms: elapsed_ms,
                    simulated: outcome.simulated,
                }
            }
        }
    }

    /// Produce the agent's output, falling back to a simulated response when
    /// the provider is absent, errors, or exceeds the configured timeout.
    async fn complete(&self, agent: &Agent, input: &str) -> CompletionOutcome {
        let model = match &self.model {
            Some(model) => model,
            None => {
                return CompletionOutcome {
                    output: simulated::simulated_response(&agent.name, input),
                    simulated: true,
                }
            }
        };

        let request = ChatRequest::new(vec![
            Message::system(prompt::build_system_prompt(agent)),
            Message::user(input),
        ])
        .with_temperature(self.settings.temperature)
        .with_max_tokens(self.settings.max_tokens);

        match tokio::time::timeout(self.settings.timeout, model.chat(request)).await {
            Ok(Ok(response)) => CompletionOutcome {
                output: response.text().to_string(),
                simulated: false,
            },
            Ok(Err(err)) => {
                warn!(agent_id = %agent.id, error = %err, "provider call failed, using simulated response");
                CompletionOutcome {
                    output: simulated::simulated_response(&agent.name, input),
                    simulated: true,
                }
            }
            Err(_) => {
                warn!(agent_id = %agent.id, "provider call timed out, using simulated response");
                CompletionOutcome {
                    output: simulated::simulated_response(&agent.name, input),
                    simulated: true,
                }
            }
        }
    }

    /// Record a learning entry; failures are logged and never propagate.
    async fn record_learning(&self, agent_id: &str, data: serde_json::Value, confidence: f64) {
        let result = LearningRepository::create(
            self.db.pool(),
            Uuid::new_v4().to_string(),
            agent_id.to_string(),
            "execution".to_string(),
            data.to_string(),
            confidence,
        )
        .await;

        if let Err(err) = result {
            warn!(agent_id, error = %err, "failed to record learning entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Composition;
    use crate::db::repositories::{AgentRepository, WorkspaceRepository};
    use crate::db::test_support::memory_db;
    use async_trait::async_trait;
    use llm::{ChatResponse, LlmError};
    use std::collections::HashMap;

    struct FixedModel {
        reply: String,
    }

    #[async_trait]
    impl ChatModel for FixedModel {
        async fn chat(&self, _request: ChatRequest) -> llm::Result<ChatResponse> {
            Ok(ChatResponse {
                message: Message::assistant(self.reply.clone()),
                usage: None,
                metadata: HashMap::new(),
            })
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModel for FailingModel {
        async fn chat(&self, _request: ChatRequest) -> llm::Result<ChatResponse> {
            Err(LlmError::ProviderError("boom".to_string()))
        }
    }

    struct SlowModel;

    #[async_trait]
    impl ChatModel for SlowModel {
        async fn chat(&self, _request: ChatRequest) -> llm::Result<ChatResponse> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ChatResponse {
                message: Message::assistant("tarde demais".to_string()),
                usage: None,
                metadata: HashMap::new(),
            })
        }
    }

    async fn service_with(model: Option<Arc<dyn ChatModel>>) -> ExecutionService {
        let db = memory_db().await;
        WorkspaceRepository::create(
            db.pool(),
            "ws-1".to_string(),
            "Default".to_string(),
            String::new(),
        )
        .await
        .unwrap();
        ExecutionService::new(db, model, ExecutionSettings::default())
    }

    async fn seed_agent(service: &ExecutionService, id: &str, name: &str) {
        let agent = Agent::new(id.to_string(), name.to_string(), "ws-1".to_string());
        AgentRepository::create(service.db.pool(), &agent)
            .await
            .unwrap();
    }

    async fn seed_active_composition(service: &ExecutionService, agent_ids: &[String]) {
        let comp = Composition::new(
            "comp-1".to_string(),
            "Pipeline".to_string(),
            "ws-1".to_string(),
        )
        .with_status("active");
        CompositionRepository::create(service.db.pool(), &comp, agent_ids)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_start_agent_unknown_agent() {
        let service = service_with(None).await;

        let result = service.start_agent("nope", "input".to_string(), None).await;
        assert!(matches!(result, Err(ExecutionError::AgentNotFound)));
    }

    #[tokio::test]
    async fn test_start_agent_completes_with_simulated_output() {
        let service = service_with(None).await;
        seed_agent(&service, "agent-1", "Developer").await;

        let execution = service
            .start_agent("agent-1", "build an API".to_string(), None)
            .await
            .unwrap();
        assert!(execution.is_running());

        // The background task finishes quickly with no provider configured.
        let mut finished = None;
        for _ in 0..100 {
            let row = ExecutionRepository::get_by_id(service.db.pool(), &execution.id)
                .await
                .unwrap()
                .unwrap();
            if !row.is_running() {
                finished = Some(row);
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let row = finished.expect("execution should finish");
        assert_eq!(row.status, "completed");
        assert!(row.output.unwrap().contains("Modo Simulado"));
    }

    #[tokio::test]
    async fn test_run_composition_not_found() {
        let service = service_with(None).await;

        let result = service.run_composition("nope", "input").await;
        assert!(matches!(result, Err(ExecutionError::CompositionNotFound)));
    }

    #[tokio::test]
    async fn test_run_composition_requires_active_status() {
        let service = service_with(None).await;
        seed_agent(&service, "agent-1", "Developer").await;

        let comp = Composition::new(
            "comp-1".to_string(),
            "Pipeline".to_string(),
            "ws-1".to_string(),
        );
        CompositionRepository::create(service.db.pool(), &comp, &["agent-1".to_string()])
            .await
            .unwrap();

        let result = service.run_composition("comp-1", "input").await;
        assert!(matches!(result, Err(ExecutionError::CompositionNotActive)));
    }

    #[tokio::test]
    async fn test_run_composition_requires_members() {
        let service = service_with(None).await;
        seed_active_composition(&service, &[]).await;

        let result = service.run_composition("comp-1", "input").await;
        assert!(matches!(result, Err(ExecutionError::CompositionEmpty)));
    }

    #[tokio::test]
    async fn test_run_composition_concatenates_outputs_in_order() {
        let model: Arc<dyn ChatModel> = Arc::new(FixedModel {
            reply: "done".to_string(),
        });
        let service = service_with(Some(model)).await;
        seed_agent(&service, "agent-1", "First").await;
        seed_agent(&service, "agent-2", "Second").await;
        seed_active_composition(&service, &["agent-1".to_string(), "agent-2".to_string()]).await;

        let report = service.run_composition("comp-1", "go").await.unwrap();

        assert_eq!(report.results.len(), 2);
        assert!(report.results.iter().all(|r| r.success && !r.simulated));
        assert_eq!(report.output, "[First]: done\n\n[Second]: done");

        // One summary row persisted.
        let summaries = CompositionExecutionRepository::list_by_composition(
            service.db.pool(),
            "comp-1",
            10,
        )
        .await
        .unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].output.as_deref(), Some(report.output.as_str()));
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back_to_simulated() {
        let model: Arc<dyn ChatModel> = Arc::new(FailingModel);
        let service = service_with(Some(model)).await;
        seed_agent(&service, "agent-1", "Support Agent").await;
        seed_active_composition(&service, &["agent-1".to_string()]).await;

        let report = service.run_composition("comp-1", "help me").await.unwrap();

        assert_eq!(report.results.len(), 1);
        assert!(report.results[0].success);
        assert!(report.results[0].simulated);
        assert!(report.output.contains("Modo Simulado"));
    }

    #[tokio::test]
    async fn test_provider_timeout_falls_back_to_simulated() {
        let db = memory_db().await;
        WorkspaceRepository::create(
            db.pool(),
            "ws-1".to_string(),
            "Default".to_string(),
            String::new(),
        )
        .await
        .unwrap();

        let settings = ExecutionSettings {
            timeout: Duration::from_millis(50),
            ..ExecutionSettings::default()
        };
        let model: Arc<dyn ChatModel> = Arc::new(SlowModel);
        let service = ExecutionService::new(db, Some(model), settings);
        seed_agent(&service, "agent-1", "Developer").await;
        seed_active_composition(&service, &["agent-1".to_string()]).await;

        let report = service.run_composition("comp-1", "build an API").await.unwrap();

        assert_eq!(report.results.len(), 1);
        assert!(report.results[0].success);
        assert!(report.results[0].simulated);
        assert!(report.output.contains("Modo Simulado"));
    }

    #[tokio::test]
    async fn test_composition_steps_record_learnings() {
        let service = service_with(None).await;
        seed_agent(&service, "agent-1", "Developer").await;
        seed_active_composition(&service, &["agent-1".to_string()]).await;

        service.run_composition("comp-1", "go").await.unwrap();

        let learnings = LearningRepository::list_by_agent(service.db.pool(), "agent-1", 10)
            .await
            .unwrap();
        assert_eq!(learnings.len(), 1);
        assert_eq!(learnings[0].confidence, 0.9);
    }

    #[tokio::test]
    async fn test_stop_running_execution() {
        let service = service_with(None).await;
        seed_agent(&service, "agent-1", "Developer").await;

        let row = AgentExecution::new(
            "exec-1".to_string(),
            "agent-1".to_string(),
            "input".to_string(),
        );
        let execution = ExecutionRepository::create_running(service.db.pool(), &row)
            .await
            .unwrap();

        let stopped = service.stop(&execution.id).await.unwrap();
        assert_eq!(stopped.status, "failed");
        assert_eq!(stopped.error.as_deref(), Some("Execution stopped by user"));

        // Stopping again is rejected.
        let result = service.stop(&execution.id).await;
        assert!(matches!(result, Err(ExecutionError::ExecutionNotRunning)));
    }

    #[tokio::test]
    async fn test_stop_unknown_execution() {
        let service = service_with(None).await;

        let result = service.stop("nope").await;
        assert!(matches!(result, Err(ExecutionError::ExecutionNotFound)));
    }
}
