//! Zanai server binary
//!
//! Standalone server for the Zanai backend, providing the REST API for
//! agents, workspaces, compositions, executions, and specialists.

use std::net::SocketAddr;
use std::sync::Arc;

use llm::remote::ZaiClient;
use llm::{ChatModel, RemoteLlmConfig};
use zanai::api::routes::create_router;
use zanai::config::ServerConfig;
use zanai::db::DatabaseConnection;
use zanai::execution::ExecutionService;
use zanai::specialist::SpecialistService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    // Load configuration from zanai-server.toml
    tracing::info!("Loading server configuration...");
    let config = match ServerConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Failed to load configuration file: {}. Using defaults.", e);
            ServerConfig::default()
        }
    };

    tracing::info!("Server name: {}", config.server.name);
    tracing::info!("Database path: {}", config.database.path);

    // Bind address from config, overridable via environment
    let host = std::env::var("HOST").unwrap_or_else(|_| config.server.host.clone());
    let port = match std::env::var("PORT") {
        Ok(value) => value.parse::<u16>()?,
        Err(_) => config.server.port,
    };
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Initialize database connection
    let database_url = config.database_url();
    tracing::info!("Connecting to database: {}", database_url);
    let db = DatabaseConnection::new(&database_url).await?;

    // Run migrations
    tracing::info!("Running database migrations");
    db.run_migrations().await?;

    // Health check the database
    tracing::info!("Performing database health check");
    db.health_check().await?;

    // Build the completion provider when enabled and a key is present;
    // otherwise every run takes the simulated path.
    let model: Option<Arc<dyn ChatModel>> = if config.llm.enabled {
        match config.api_key() {
            Some(api_key) => {
                let llm_config = RemoteLlmConfig::new(
                    api_key,
                    config.llm.base_url.clone(),
                    config.llm.model.clone(),
                )
                .with_timeout(std::time::Duration::from_secs(config.llm.timeout_secs));
                let client = ZaiClient::new(llm_config)?;
                tracing::info!("Completion provider configured: {}", config.llm.model);
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!(
                    "{} not set; running in simulated mode",
                    config.llm.api_key_env
                );
                None
            }
        }
    } else {
        tracing::info!("Completion provider disabled; running in simulated mode");
        None
    };

    let executions = ExecutionService::new(db.clone(), model.clone(), config.execution_settings());
    let specialists = SpecialistService::new(
        db.clone(),
        model,
        std::time::Duration::from_secs(config.llm.timeout_secs),
    );

    // Build the router
    tracing::info!("Building API router");
    let app = create_router(db, executions, specialists);

    // Run server with graceful shutdown
    tracing::info!("Starting zanai server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Zanai server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL-C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
