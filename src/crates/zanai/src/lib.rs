//! Backend service for the Zanai agent dashboard
//!
//! Provides the REST API, SQLite persistence, and execution services for
//! managing AI agents, sequential agent compositions, specialist templates,
//! and learning telemetry. Completions run against a remote chat provider
//! through the `llm` crate, with a simulated fallback when no provider is
//! available.

pub mod api;
pub mod config;
pub mod db;
pub mod execution;
pub mod specialist;

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
