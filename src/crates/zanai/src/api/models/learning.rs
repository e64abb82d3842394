//! Learning API models and DTOs

use serde::{Deserialize, Serialize};

/// Learning response for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResponse {
    pub id: String,
    pub agent_id: String,
    pub learning_type: String,
    /// Decoded JSON payload; the raw string when it is not valid JSON
    pub data: serde_json::Value,
    pub confidence: f64,
    pub created_at: String,
}

impl LearningResponse {
    /// Create a response from the database model
    pub fn from_db_learning(learning: crate::db::models::Learning) -> Self {
        let data = serde_json::from_str(&learning.data)
            .unwrap_or(serde_json::Value::String(learning.data));
        Self {
            id: learning.id,
            agent_id: learning.agent_id,
            learning_type: learning.learning_type,
            data,
            confidence: learning.confidence,
            created_at: learning.created_at,
        }
    }
}

/// Query parameters for listing learnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningListQuery {
    /// Filter by agent (optional)
    pub agent_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Learning;

    #[test]
    fn test_json_payload_is_decoded() {
        let learning = Learning {
            id: "l-1".to_string(),
            agent_id: "agent-1".to_string(),
            learning_type: "execution".to_string(),
            data: r#"{"success": true}"#.to_string(),
            confidence: 0.9,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let resp = LearningResponse::from_db_learning(learning);
        assert_eq!(resp.data["success"], true);
    }

    #[test]
    fn test_non_json_payload_kept_as_string() {
        let learning = Learning {
            id: "l-1".to_string(),
            agent_id: "agent-1".to_string(),
            learning_type: "execution".to_string(),
            data: "plain text".to_string(),
            confidence: 0.1,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let resp = LearningResponse::from_db_learning(learning);
        assert_eq!(resp.data, serde_json::Value::String("plain text".to_string()));
    }
}
