//! Built-in specialist catalog.
//!
//! Categories and seed templates shipped with the service; generated
//! templates stored in the database are merged on top by the service layer.

use crate::db::models::Specialist;
use serde::Serialize;

/// Timestamp applied to the built-in templates.
const SEED_CREATED_AT: &str = "2024-01-01T00:00:00Z";

/// A catalog category.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// The fixed category list.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: "business",
            name: "Negocios",
            icon: "📊",
            description: "Analise de requisitos, processos e estrategia",
        },
        Category {
            id: "technical",
            name: "Tecnico",
            icon: "⚙️",
            description: "Arquitetura, desenvolvimento e operacao de sistemas",
        },
        Category {
            id: "content",
            name: "Conteudo",
            icon: "✍️",
            description: "Redacao, documentacao e comunicacao",
        },
        Category {
            id: "legal",
            name: "Juridico",
            icon: "⚖️",
            description: "Contratos, conformidade e privacidade",
        },
    ]
}

/// Whether `id` names a known category.
pub fn is_known_category(id: &str) -> bool {
    categories().iter().any(|c| c.id == id)
}

fn seed(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    prompt: &str,
    skills: &[&str],
    use_cases: &[&str],
) -> Specialist {
    Specialist {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        prompt: prompt.to_string(),
        skills: serde_json::to_string(skills).unwrap_or_else(|_| "[]".to_string()),
        use_cases: serde_json::to_string(use_cases).unwrap_or_else(|_| "[]".to_string()),
        created_at: SEED_CREATED_AT.to_string(),
    }
}

/// Templates shipped with the service.
pub fn seed_templates() -> Vec<Specialist> {
    vec![
        seed(
            "seed-requirements-analyst",
            "Analista de Requisitos",
            "business",
            "Levanta, documenta e prioriza requisitos de negocio",
            "Voce e um analista de requisitos experiente. Conduza o levantamento \
             de requisitos com perguntas objetivas, documente requisitos \
             funcionais e nao-funcionais e aponte ambiguidades.",
            &["Elicitacao", "Documentacao", "Priorizacao"],
            &["Kickoff de projeto", "Refinamento de backlog"],
        ),
        seed(
            "seed-process-consultant",
            "Consultor de Processos",
            "business",
            "Mapeia processos e propoe melhorias mensuraveis",
            "Voce e um consultor de processos. Mapeie o processo atual, \
             identifique gargalos e proponha melhorias com indicadores claros.",
            &["Mapeamento de processos", "Indicadores", "Analise de custo"],
            &["Otimizacao operacional", "Diagnostico de fluxo"],
        ),
        seed(
            "seed-software-architect",
            "Arquiteto de Software",
            "technical",
            "Desenha arquiteturas e avalia decisoes tecnicas",
            "Voce e um arquiteto de software. Avalie requisitos, proponha uma \
             arquitetura em componentes e registre as decisoes e seus \
             trade-offs.",
            &["Arquitetura", "Escalabilidade", "Revisao tecnica"],
            &["Desenho de sistema", "Avaliacao de stack"],
        ),
        seed(
            "seed-devops-engineer",
            "Engenheiro DevOps",
            "technical",
            "Automatiza build, deploy e operacao de sistemas",
            "Voce e um engenheiro DevOps. Proponha pipelines de integracao e \
             entrega continua, monitoramento e praticas de operacao.",
            &["CI/CD", "Observabilidade", "Infraestrutura como codigo"],
            &["Automacao de deploy", "Resposta a incidentes"],
        ),
        seed(
            "seed-technical-writer",
            "Redator Tecnico",
            "content",
            "Escreve documentacao clara para produtos e APIs",
            "Voce e um redator tecnico. Produza documentacao clara e objetiva, \
             com exemplos praticos e estrutura consistente.",
            &["Documentacao", "Exemplos", "Revisao"],
            &["Documentacao de API", "Guias de usuario"],
        ),
        seed(
            "seed-privacy-officer",
            "Especialista em Privacidade",
            "legal",
            "Avalia conformidade com leis de protecao de dados",
            "Voce e um especialista em privacidade de dados. Avalie fluxos de \
             dados pessoais, aponte riscos de conformidade e recomende \
             controles.",
            &["LGPD", "Analise de risco", "Politicas de dados"],
            &["Revisao de conformidade", "Mapeamento de dados pessoais"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_known() {
        assert!(is_known_category("business"));
        assert!(is_known_category("technical"));
        assert!(!is_known_category("mystery"));
    }

    #[test]
    fn test_seed_templates_reference_known_categories() {
        for template in seed_templates() {
            assert!(is_known_category(&template.category), "{}", template.id);
            assert!(!template.skills_vec().is_empty());
            assert!(!template.use_cases_vec().is_empty());
        }
    }
}
