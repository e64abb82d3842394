//! System prompt assembly from an agent's stored profile.

use crate::db::models::Agent;
use serde_json::Value;

/// Build the system prompt sent ahead of the user input.
///
/// Sections are included only when the agent has content for them. The
/// `config` column may hold YAML or free text; only valid JSON contributes
/// the capabilities and settings sections.
pub fn build_system_prompt(agent: &Agent) -> String {
    let mut prompt = format!("Voce e {}.\n\n", agent.name);

    if !agent.description.is_empty() {
        prompt.push_str(&format!("Descricao: {}\n\n", agent.description));
    }

    if !agent.knowledge.is_empty() {
        prompt.push_str(&format!("Conhecimento:\n{}\n\n", agent.knowledge));
    }

    if !agent.config.is_empty() {
        if let Ok(config) = serde_json::from_str::<Value>(&agent.config) {
            if let Some(capabilities) = config.get("capabilities").and_then(Value::as_array) {
                let joined: Vec<&str> =
                    capabilities.iter().filter_map(Value::as_str).collect();
                if !joined.is_empty() {
                    prompt.push_str(&format!("Capacidades: {}\n\n", joined.join(", ")));
                }
            }
            if let Some(settings) = config.get("settings") {
                if let Ok(rendered) = serde_json::to_string_pretty(settings) {
                    prompt.push_str(&format!("Configuracoes: {}\n\n", rendered));
                }
            }
        }
    }

    prompt.push_str("Responda de forma precisa, util e alinhada com sua especialidade.");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> Agent {
        Agent::new("agent-1".to_string(), "Dev Agent".to_string(), "ws-1".to_string())
    }

    #[test]
    fn test_minimal_prompt() {
        let prompt = build_system_prompt(&agent());

        assert!(prompt.starts_with("Voce e Dev Agent."));
        assert!(prompt.ends_with("especialidade."));
        assert!(!prompt.contains("Descricao:"));
        assert!(!prompt.contains("Conhecimento:"));
    }

    #[test]
    fn test_full_prompt_sections() {
        let agent = agent()
            .with_description("Writes production code")
            .with_knowledge("# Rust\nOwnership rules")
            .with_config(r#"{"capabilities": ["code", "review"], "settings": {"lang": "pt"}}"#);

        let prompt = build_system_prompt(&agent);

        assert!(prompt.contains("Descricao: Writes production code"));
        assert!(prompt.contains("Conhecimento:\n# Rust"));
        assert!(prompt.contains("Capacidades: code, review"));
        assert!(prompt.contains("Configuracoes:"));
        assert!(prompt.contains("\"lang\": \"pt\""));
    }

    #[test]
    fn test_non_json_config_ignored() {
        let agent = agent().with_config("capabilities:\n  - code\n");
        let prompt = build_system_prompt(&agent);

        assert!(!prompt.contains("Capacidades"));
        assert!(prompt.ends_with("especialidade."));
    }
}
