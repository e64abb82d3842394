//! Simulated agent responses.
//!
//! Used whenever no completion provider is configured or the provider call
//! fails; execution then degrades to a canned persona response instead of
//! erroring out.

/// Marker prepended to every simulated response so clients can tell canned
/// output from real completions.
const SIMULATED_BANNER: &str = "**Modo Simulado** - Resposta gerada localmente.\n\n";

/// Produce a canned response matching the agent's persona.
///
/// Persona selection is by case-insensitive substring on the agent name and
/// accepts both English and Portuguese role names.
pub fn simulated_response(agent_name: &str, input: &str) -> String {
    let name_lower = agent_name.to_lowercase();

    let body = if name_lower.contains("developer") || name_lower.contains("desenvolvedor") {
        developer_response(agent_name, input)
    } else if name_lower.contains("business") || name_lower.contains("analista") {
        business_response(agent_name, input)
    } else if name_lower.contains("support") || name_lower.contains("suporte") {
        support_response(agent_name, input)
    } else {
        generic_response(agent_name, input)
    };

    format!("{}{}", SIMULATED_BANNER, body)
}

fn developer_response(agent_name: &str, input: &str) -> String {
    format!(
        "## Analise Tecnica de {agent_name}\n\n\
         Sobre a solicitacao:\n\n> {input}\n\n\
         ### Abordagem sugerida\n\
         1. Levantar os requisitos tecnicos e restricoes do ambiente\n\
         2. Desenhar a solucao em componentes pequenos e testaveis\n\
         3. Implementar de forma incremental com revisao de codigo\n\
         4. Cobrir os caminhos criticos com testes automatizados\n\n\
         ### Consideracoes\n\
         - Priorize legibilidade e manutencao sobre otimizacao prematura\n\
         - Documente as decisoes de arquitetura relevantes\n\n\
         Posso detalhar qualquer etapa da implementacao."
    )
}

fn business_response(agent_name: &str, input: &str) -> String {
    format!(
        "## Analise de Negocio de {agent_name}\n\n\
         Sobre a solicitacao:\n\n> {input}\n\n\
         ### Pontos levantados\n\
         1. Identificar os stakeholders e seus objetivos\n\
         2. Mapear os processos impactados e indicadores atuais\n\
         3. Avaliar custo, beneficio e riscos da mudanca\n\
         4. Definir metricas de sucesso mensuraveis\n\n\
         ### Recomendacao\n\
         Validar as premissas com os envolvidos antes de avancar para a \
         proxima fase.\n\n\
         Posso aprofundar qualquer um desses pontos."
    )
}

fn support_response(agent_name: &str, input: &str) -> String {
    format!(
        "## Atendimento de {agent_name}\n\n\
         Recebi sua solicitacao:\n\n> {input}\n\n\
         ### Proximos passos\n\
         1. Verificar se o problema e conhecido na base de atendimento\n\
         2. Reproduzir o cenario descrito para confirmar o comportamento\n\
         3. Aplicar a solucao recomendada ou escalar para o time responsavel\n\n\
         Se puder, envie mensagens de erro ou passos para reproduzir; isso \
         acelera bastante a resolucao.\n\n\
         Estou a disposicao para acompanhar o caso."
    )
}

fn generic_response(agent_name: &str, input: &str) -> String {
    format!(
        "## Resposta de {agent_name}\n\n\
         Analisei sua solicitacao:\n\n> {input}\n\n\
         Com base no meu perfil, sugiro dividir o trabalho em etapas claras, \
         validar cada resultado parcial e registrar as decisoes tomadas ao \
         longo do caminho.\n\n\
         Posso ajudar com mais detalhes sobre qualquer parte desta resposta."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_developer_persona_matched() {
        let out = simulated_response("Senior Developer", "build an API");
        assert!(out.contains("Analise Tecnica"));
        assert!(out.contains("build an API"));
    }

    #[test]
    fn test_portuguese_persona_matched() {
        let out = simulated_response("Desenvolvedora Backend", "criar API");
        assert!(out.contains("Analise Tecnica"));

        let out = simulated_response("Analista de Requisitos", "novo projeto");
        assert!(out.contains("Analise de Negocio"));

        let out = simulated_response("Agente de Suporte", "erro no login");
        assert!(out.contains("Atendimento"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let out = simulated_response("BUSINESS ANALYST", "roadmap");
        assert!(out.contains("Analise de Negocio"));
    }

    #[test]
    fn test_unknown_persona_gets_generic_response() {
        let out = simulated_response("Mystery Agent", "do something");
        assert!(out.contains("Resposta de Mystery Agent"));
    }

    #[test]
    fn test_banner_always_present() {
        for name in ["Developer", "Analista", "Suporte", "Other"] {
            assert!(simulated_response(name, "x").starts_with("**Modo Simulado**"));
        }
    }
}
