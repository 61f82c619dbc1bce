use crate::models::{ClauseCategory, ClauseDefinition, RiskTier};

/// The monitored clause categories, in matching order.
pub static CATALOGUE: &[ClauseDefinition] = &[
    ClauseDefinition {
        category: ClauseCategory::Indenizacao,
        keywords: &[
            "indenização",
            "ressarcimento",
            "danos",
            "prejuízos",
            "responsabilidade civil",
            "indemnification",
            "damages",
            "liability",
            "compensation",
        ],
        description: "Cláusulas de indenização e responsabilidade civil",
        risk: RiskTier::High,
    },
    ClauseDefinition {
        category: ClauseCategory::RescisaoUnilateral,
        keywords: &[
            "rescisão unilateral",
            "cancelamento unilateral",
            "extinção unilateral",
            "resilição",
            "unilateral termination",
            "unilateral cancellation",
            "termination rights",
        ],
        description: "Direito de rescindir contrato sem consentimento da outra parte",
        risk: RiskTier::High,
    },
    ClauseDefinition {
        category: ClauseCategory::MultaContratual,
        keywords: &[
            "multa contratual",
            "penalidade",
            "sanção contratual",
            "cláusula penal",
            "contractual penalty",
            "penalty clause",
            "liquidated damages",
        ],
        description: "Multas e penalidades contratuais",
        risk: RiskTier::Medium,
    },
    ClauseDefinition {
        category: ClauseCategory::Confidencialidade,
        keywords: &[
            "confidencialidade",
            "sigilo",
            "informação confidencial",
            "não divulgação",
            "confidentiality",
            "non-disclosure",
            "proprietary information",
        ],
        description: "Obrigações de confidencialidade e sigilo",
        risk: RiskTier::Medium,
    },
    ClauseDefinition {
        category: ClauseCategory::Exclusividade,
        keywords: &[
            "exclusividade",
            "exclusivo",
            "único fornecedor",
            "único prestador",
            "exclusivity",
            "exclusive",
            "sole provider",
        ],
        description: "Cláusulas de exclusividade comercial",
        risk: RiskTier::Medium,
    },
    ClauseDefinition {
        category: ClauseCategory::ForoEleicao,
        keywords: &[
            "foro de eleição",
            "foro competente",
            "jurisdição",
            "tribunal competente",
            "choice of forum",
            "jurisdiction",
            "competent court",
        ],
        description: "Definição do foro/jurisdição para resolução de disputas",
        risk: RiskTier::Low,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn definition(category: ClauseCategory) -> Option<&'static ClauseDefinition> {
        CATALOGUE.iter().find(|d| d.category == category)
    }

    #[test]
    fn test_six_distinct_categories() {
        let ids: HashSet<_> = CATALOGUE.iter().map(|d| d.category).collect();
        assert_eq!(CATALOGUE.len(), 6);
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(definition(ClauseCategory::Indenizacao).unwrap().risk, RiskTier::High);
        assert_eq!(definition(ClauseCategory::RescisaoUnilateral).unwrap().risk, RiskTier::High);
        assert_eq!(definition(ClauseCategory::MultaContratual).unwrap().risk, RiskTier::Medium);
        assert_eq!(definition(ClauseCategory::ForoEleicao).unwrap().risk, RiskTier::Low);
    }

    #[test]
    fn test_keywords_are_non_empty() {
        for def in CATALOGUE {
            assert!(!def.keywords.is_empty(), "{} has no keywords", def.category);
            assert!(def.keywords.iter().all(|k| !k.trim().is_empty()));
        }
    }
}
