//! Markdown rendering for specialist templates.

use crate::db::models::Specialist;

/// Render a template as a standalone markdown document.
pub fn render(specialist: &Specialist) -> String {
    let mut doc = String::new();

    doc.push_str("---\n");
    doc.push_str(&format!("name: {}\n", specialist.name));
    doc.push_str(&format!("category: {}\n", specialist.category));
    doc.push_str(&format!("created: {}\n", specialist.created_at));
    doc.push_str("---\n\n");

    doc.push_str(&format!("# {}\n\n", specialist.name));
    doc.push_str(&format!("{}\n\n", specialist.description));

    doc.push_str("## Prompt\n\n");
    doc.push_str(&format!("{}\n\n", specialist.prompt));

    let skills = specialist.skills_vec();
    if !skills.is_empty() {
        doc.push_str("## Habilidades\n\n");
        for skill in &skills {
            doc.push_str(&format!("- {}\n", skill));
        }
        doc.push('\n');
    }

    let use_cases = specialist.use_cases_vec();
    if !use_cases.is_empty() {
        doc.push_str("## Casos de Uso\n\n");
        for use_case in &use_cases {
            doc.push_str(&format!("- {}\n", use_case));
        }
    }

    doc.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_all_sections() {
        let specialist = Specialist {
            id: "spec-1".to_string(),
            name: "Analista de Requisitos".to_string(),
            category: "business".to_string(),
            description: "Levanta requisitos".to_string(),
            prompt: "Voce e um analista.".to_string(),
            skills: r#"["Elicitacao"]"#.to_string(),
            use_cases: r#"["Kickoff"]"#.to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let doc = render(&specialist);

        assert!(doc.starts_with("---\nname: Analista de Requisitos"));
        assert!(doc.contains("# Analista de Requisitos"));
        assert!(doc.contains("## Prompt"));
        assert!(doc.contains("- Elicitacao"));
        assert!(doc.contains("- Kickoff"));
    }

    #[test]
    fn test_render_omits_empty_lists() {
        let specialist = Specialist {
            id: "spec-1".to_string(),
            name: "Generico".to_string(),
            category: "content".to_string(),
            description: "Sem listas".to_string(),
            prompt: "Prompt.".to_string(),
            skills: "[]".to_string(),
            use_cases: "[]".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let doc = render(&specialist);

        assert!(!doc.contains("## Habilidades"));
        assert!(!doc.contains("## Casos de Uso"));
    }
}
