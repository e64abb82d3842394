//! Learning telemetry model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Write-only telemetry recorded after each agent execution.
///
/// `data` is an opaque JSON blob; `confidence` is 0.9 for successful runs and
/// 0.1 for failed ones. Nothing in the execution path reads these back; the
/// dashboard lists them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Learning {
    /// Unique record identifier (UUID string)
    pub id: String,

    /// Agent the record belongs to
    pub agent_id: String,

    /// Record type (e.g. "execution")
    pub learning_type: String,

    /// Opaque JSON payload
    pub data: String,

    /// Confidence score in [0.0, 1.0]
    pub confidence: f64,

    /// Creation timestamp (RFC3339 string)
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_serializes() {
        let learning = Learning {
            id: "l-1".to_string(),
            agent_id: "agent-1".to_string(),
            learning_type: "execution".to_string(),
            data: r#"{"success": true}"#.to_string(),
            confidence: 0.9,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let json = serde_json::to_value(&learning).unwrap();
        assert_eq!(json["learning_type"], "execution");
        assert_eq!(json["confidence"], 0.9);
    }
}
